//! `AllOf`, `AnyOf` and `Not` over heterogeneous predicate lists.

use core::marker::PhantomData;

use super::Predicate;
use crate::primitives::{Absent, Bool, Present};

// =============================================================================
// HList
// =============================================================================

/// Empty HList
pub struct HNil;

/// HList cons cell
pub struct HCons<H, T>(PhantomData<(H, T)>);

// =============================================================================
// Combinators
// =============================================================================

/// Every predicate in `List` holds. Empty list: true.
pub struct AllOf<List>(PhantomData<List>);

/// At least one predicate in `List` holds. Empty list: false.
pub struct AnyOf<List>(PhantomData<List>);

/// Negation of `P`.
pub struct Not<P>(PhantomData<P>);

/// Lifts a type-level [`Bool`] into a predicate.
pub struct Lit<B>(PhantomData<B>);

impl Predicate for AllOf<HNil> {
    type Out = Present;
}

impl<H, T> Predicate for AllOf<HCons<H, T>>
where
    H: Predicate,
    AllOf<T>: Predicate,
{
    type Out = <H::Out as Bool>::And<<AllOf<T> as Predicate>::Out>;
}

impl Predicate for AnyOf<HNil> {
    type Out = Absent;
}

impl<H, T> Predicate for AnyOf<HCons<H, T>>
where
    H: Predicate,
    AnyOf<T>: Predicate,
{
    type Out = <H::Out as Bool>::Or<<AnyOf<T> as Predicate>::Out>;
}

impl<P: Predicate> Predicate for Not<P> {
    type Out = <P::Out as Bool>::Not;
}

impl<B: Bool> Predicate for Lit<B> {
    type Out = B;
}
