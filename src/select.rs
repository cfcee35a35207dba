//! # Layer 3: Enqueue Strategy Selection
//!
//! Type-level choice between the two enqueue strategies of a deferred
//! logging pipeline:
//!
//! - [`Deferred`]: copy the value into the queue and format it later.
//! - [`Immediate`]: format the value on the calling thread, enqueue the text.
//!
//! Selection is pure type selection (`Bool::If` / `Bool::select`), so the
//! chosen path is fixed at compile time and no `if` remains at runtime.
//!
//! ```
//! use tola_copyable::prelude::*;
//! use tola_copyable::select::{route, EnqueueHandler, StrategyOf};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     deferred: Vec<String>,
//!     formatted: Vec<String>,
//! }
//!
//! impl<T: core::fmt::Debug> EnqueueHandler<T> for Recorder {
//!     type Output = ();
//!     fn defer(&mut self, value: &T) -> Self::Output {
//!         self.deferred.push(format!("{value:?}"));
//!     }
//!     fn format_now(&mut self, value: &T) -> Self::Output {
//!         self.formatted.push(format!("{value:?}"));
//!     }
//! }
//!
//! let mut recorder = Recorder::default();
//! route(&mut recorder, &42u32);
//! route(&mut recorder, &std::rc::Rc::new(7));
//!
//! assert_eq!(recorder.deferred, ["42"]);
//! assert_eq!(recorder.formatted, ["7"]);
//! assert_eq!(<StrategyOf<String> as EnqueueStrategy>::NAME, "deferred");
//! ```

use crate::classify::Copyable;
use crate::primitives::Bool;

/// Copy into the queue, format on the backend thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deferred;

/// Format on the calling thread before enqueueing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate;

/// An enqueue strategy.
pub trait EnqueueStrategy {
    /// The value itself is copied into the queue.
    const DEFERRED: bool;
    const NAME: &'static str;
}

impl EnqueueStrategy for Deferred {
    const DEFERRED: bool = true;
    const NAME: &'static str = "deferred";
}

impl EnqueueStrategy for Immediate {
    const DEFERRED: bool = false;
    const NAME: &'static str = "immediate";
}

/// The strategy selected for values of type `T`.
pub type StrategyOf<T> = <<T as Copyable>::Verdict as Bool>::If<Deferred, Immediate>;

/// The two enqueue paths, supplied by the logging pipeline.
pub trait EnqueueHandler<T: ?Sized> {
    type Output;

    /// Enqueue a copy of `value` for formatting on the backend.
    fn defer(&mut self, value: &T) -> Self::Output;

    /// Format `value` now and enqueue the result.
    fn format_now(&mut self, value: &T) -> Self::Output;
}

/// Send `value` down the path its type was classified for.
#[inline(always)]
pub fn route<T, H>(handler: &mut H, value: &T) -> H::Output
where
    T: Copyable + ?Sized,
    H: EnqueueHandler<T>,
{
    <T::Verdict as Bool>::select(
        handler,
        |h: &mut H| h.defer(value),
        |h: &mut H| h.format_now(value),
    )
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    struct Counter {
        deferred: usize,
        immediate: usize,
    }

    impl<T: ?Sized> EnqueueHandler<T> for Counter {
        type Output = &'static str;

        fn defer(&mut self, _: &T) -> &'static str {
            self.deferred += 1;
            Deferred::NAME
        }

        fn format_now(&mut self, _: &T) -> &'static str {
            self.immediate += 1;
            Immediate::NAME
        }
    }

    #[test]
    fn test_route_follows_verdict() {
        let mut counter = Counter { deferred: 0, immediate: 0 };
        assert_eq!(route(&mut counter, &1.5f64), "deferred");
        assert_eq!(route(&mut counter, &vec![String::from("a")]), "deferred");
        assert_eq!(route(&mut counter, &Box::new(3u8)), "immediate");
        assert_eq!(route(&mut counter, &(1u8, std::cell::Cell::new(2u8))), "immediate");
        assert_eq!((counter.deferred, counter.immediate), (2, 2));
    }

    #[test]
    fn test_strategy_type() {
        assert!(<StrategyOf<u64> as EnqueueStrategy>::DEFERRED);
        assert!(!<StrategyOf<*const u8> as EnqueueStrategy>::DEFERRED);
        let _: StrategyOf<Option<u8>> = Deferred;
        let _: StrategyOf<std::sync::Mutex<u8>> = Immediate;
    }
}
