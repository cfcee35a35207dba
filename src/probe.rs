//! Probes that tolerate types without a shape.
//!
//! [`Probe<T>`] exposes `IS_COPYABLE`, `IS_TRIVIAL`, ... for *any* concrete
//! `T`. When `T: TypeShape` the inherent constants answer; otherwise the
//! compiler falls back to the trait constants, which are `false`. A type
//! that is not a pair or container, or a container whose element has no
//! shape, therefore yields `false` instead of a compile error.
//!
//! ## How it works
//!
//! 1. Each probed property gets a fallback trait with `const IS_X: bool = false`.
//! 2. The fallback is implemented for `Probe<T>` for all `T`.
//! 3. An inherent `IS_X` is defined on `Probe<T>` where `T: TypeShape`.
//!
//! Inherent items win over trait items when their bounds hold.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. Inside
//! `fn foo<T>()` the bound cannot be proven and the fallback always answers.
//! Use `is_copyable::<T>()` with a `T: Copyable` bound there.
//!
//! ```
//! use tola_copyable::is_copyable;
//!
//! struct Unshaped(Vec<u8>);
//!
//! assert!(is_copyable!(Vec<(u32, String)>));
//! assert!(!is_copyable!(Unshaped));
//! assert!(!is_copyable!(Vec<Unshaped>));
//! ```

use core::marker::PhantomData;

use crate::classify::{
    IsArithmetic, IsContainer, IsCopyable, IsPairLike, IsTextString, IsTrivial,
    IsUserTaggedCopyable,
};
use crate::logic::Predicate;
use crate::shape::TypeShape;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<*const T>);

/// Generate fallback traits and inherent consts for each probed predicate.
macro_rules! impl_probe {
    ($($Name:ident => $Pred:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc(hidden)]
                pub trait [<$Name Fallback>] {
                    const [<IS_ $Name:snake:upper>]: bool = false;
                }
                impl<T: ?Sized> [<$Name Fallback>] for Probe<T> {}
            )*

            impl<T: TypeShape + ?Sized> Probe<T> {
                $(
                    pub const [<IS_ $Name:snake:upper>]: bool = <$Pred<T> as Predicate>::VALUE;
                )*
            }
        }
    };
}

impl_probe! {
    Copyable => IsCopyable,
    Trivial => IsTrivial,
    Arithmetic => IsArithmetic,
    TextString => IsTextString,
    PairLike => IsPairLike,
    Container => IsContainer,
    UserTaggedCopyable => IsUserTaggedCopyable,
}

/// Classify any concrete type, answering `false` when it has no shape.
///
/// ```
/// use tola_copyable::is_copyable;
///
/// assert!(is_copyable!(i32));
/// assert!(is_copyable!(std::collections::HashMap<String, Vec<f64>>));
/// assert!(!is_copyable!(std::rc::Rc<i32>));
/// assert!(!is_copyable!(std::net::TcpStream));
/// ```
#[macro_export]
macro_rules! is_copyable {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::CopyableFallback as _;
        $crate::probe::Probe::<$T>::IS_COPYABLE
    }};
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Unshaped;

    #[test]
    fn test_shaped_types_answer() {
        assert!(Probe::<u8>::IS_ARITHMETIC);
        assert!(Probe::<String>::IS_TEXT_STRING);
        assert!(Probe::<(u8, u8)>::IS_PAIR_LIKE);
        assert!(Probe::<Vec<u8>>::IS_CONTAINER);
        assert!(!Probe::<Vec<Box<u8>>>::IS_COPYABLE);
    }

    #[test]
    fn test_unshaped_types_fall_back() {
        assert!(!Probe::<Unshaped>::IS_COPYABLE);
        assert!(!Probe::<Unshaped>::IS_TRIVIAL);
        assert!(!Probe::<(u8, Unshaped)>::IS_PAIR_LIKE);
        assert!(!Probe::<Option<Unshaped>>::IS_CONTAINER);
        assert!(!Probe::<Unshaped>::IS_USER_TAGGED_COPYABLE);
    }
}
