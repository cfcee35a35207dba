//! # Layer 2: Copyability Classification
//!
//! Decides, entirely at compile time, whether a value of type `T` may be
//! copied into a queue and formatted later on another thread, or must be
//! formatted on the calling thread before it is enqueued.
//!
//! ```text
//! IsCopyable<T> = AnyOf[
//!     IsTrivial<T>,
//!     IsArithmetic<T>,
//!     IsTextString<T>,
//!     IsCopyablePair<T>,        -- recurses into IsCopyable<First>, IsCopyable<Second>
//!     IsCopyableContainer<T>,   -- recurses into IsCopyable<Element>
//!     IsCopyableTuple<T>,       -- recurses into every element
//!     IsUserTaggedCopyable<T>,
//! ]
//! ```
//!
//! ## Example
//!
//! ```
//! use tola_copyable::prelude::*;
//!
//! #[derive(TypeShape)]
//! struct Session {
//!     user: String,
//!     token: Box<[u8; 32]>,
//! }
//!
//! assert!(is_copyable::<i32>());
//! assert!(is_copyable::<(i32, String)>());
//! assert!(is_copyable::<Vec<Vec<i32>>>());
//! assert!(!is_copyable::<Session>());
//! assert!(!is_copyable::<Vec<Session>>());
//! ```

mod leaf;

pub use leaf::{
    IsArithmetic, IsClass, IsContainer, IsCopyableContainer, IsCopyablePair, IsCopyableTuple,
    IsPairLike, IsTagged, IsTextString, IsTrivial, IsTuple, IsUserTaggedCopyable,
};

use core::marker::PhantomData;

use crate::logic::{AnyOf, Predicate};
use crate::primitives::Bool;
use crate::shape::TypeShape;

/// Top-level predicate: `T` is safe to copy for deferred formatting.
pub struct IsCopyable<T: ?Sized>(PhantomData<*const T>);

/// The rules combined by [`IsCopyable`], in order.
pub type CopyableRules<T> = crate::hlist![
    IsTrivial<T>,
    IsArithmetic<T>,
    IsTextString<T>,
    IsCopyablePair<T>,
    IsCopyableContainer<T>,
    IsCopyableTuple<T>,
    IsUserTaggedCopyable<T>,
];

impl<T: TypeShape + ?Sized> Predicate for IsCopyable<T> {
    type Out = <AnyOf<CopyableRules<T>> as Predicate>::Out;
}

/// Verdict of the classifier for a shaped type.
///
/// Blanket-implemented for every [`TypeShape`]; use it as a bound when a
/// generic function needs the verdict.
pub trait Copyable: TypeShape {
    /// `Present` if the type may be copied for deferred formatting.
    type Verdict: Bool;
    const IS_COPYABLE: bool = <Self::Verdict as Bool>::VALUE;
}

impl<T: TypeShape + ?Sized> Copyable for T {
    type Verdict = <IsCopyable<T> as Predicate>::Out;
}

/// Whether `T` may be copied into a deferred buffer.
#[inline(always)]
pub const fn is_copyable<T: Copyable + ?Sized>() -> bool {
    T::IS_COPYABLE
}

/// Whether the type of `value` may be copied into a deferred buffer.
///
/// The verdict depends only on the type, so it is the same for `let` and
/// `let mut` bindings of the same value.
#[inline(always)]
pub const fn is_copyable_of<T: Copyable + ?Sized>(_value: &T) -> bool {
    T::IS_COPYABLE
}
