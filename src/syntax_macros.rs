//! Type-level list syntax.

/// Build an HList type from a list of types.
///
/// `hlist![A, B, C]` expands to `HCons<A, HCons<B, HCons<C, HNil>>>`.
/// Used for predicate lists (`AllOf<hlist![..]>`) and for tuple element
/// lists (`TupleOf<hlist![..]>`).
///
/// # Example
///
/// ```
/// use tola_copyable::hlist;
/// use tola_copyable::logic::{AllOf, HCons, HNil, Predicate};
/// use tola_copyable::{Absent, Present};
///
/// let _: core::marker::PhantomData<hlist![u8, u16]> =
///     core::marker::PhantomData::<HCons<u8, HCons<u16, HNil>>>;
/// assert!(!<AllOf<hlist![Present, Absent]> as Predicate>::VALUE);
/// ```
#[macro_export]
macro_rules! hlist {
    () => { $crate::logic::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::logic::HCons<$head, $crate::hlist![$($tail),*]>
    };
}
