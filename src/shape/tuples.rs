//! Shapes for `()`, pairs and tuples up to arity 12.

use super::{NotContainer, NotPair, NotTuple, PairOf, TupleOf, TypeShape};
use crate::classify::IsTrivial;
use crate::logic::{AllOf, HNil, Predicate};
use crate::primitives::{Absent, Present};

impl TypeShape for () {
    type Trivial = Present;
    type Arithmetic = Absent;
    type TextString = Absent;
    type Class = Absent;
    type Tagged = Absent;
    type Pair = NotPair;
    type Container = NotContainer;
    type Tuple = TupleOf<HNil>;
}

// The 2-tuple is the pair type. It is trivial iff both halves are.
impl<A: TypeShape, B: TypeShape> TypeShape for (A, B) {
    type Trivial = <AllOf<crate::hlist![IsTrivial<A>, IsTrivial<B>]> as Predicate>::Out;
    type Arithmetic = Absent;
    type TextString = Absent;
    type Class = Absent;
    type Tagged = Absent;
    type Pair = PairOf<A, B>;
    type Container = NotContainer;
    type Tuple = NotTuple;
}

macro_rules! impl_tuple_shape {
    ($($name:ident),+) => {
        impl<$($name: TypeShape),+> TypeShape for ($($name,)+) {
            type Trivial = <AllOf<crate::hlist![$(IsTrivial<$name>),+]> as Predicate>::Out;
            type Arithmetic = Absent;
            type TextString = Absent;
            type Class = Absent;
            type Tagged = Absent;
            type Pair = NotPair;
            type Container = NotContainer;
            type Tuple = TupleOf<crate::hlist![$($name),+]>;
        }
    };
}

impl_tuple_shape!(A);
impl_tuple_shape!(A, B, C);
impl_tuple_shape!(A, B, C, D);
impl_tuple_shape!(A, B, C, D, E);
impl_tuple_shape!(A, B, C, D, E, F);
impl_tuple_shape!(A, B, C, D, E, F, G);
impl_tuple_shape!(A, B, C, D, E, F, G, H);
impl_tuple_shape!(A, B, C, D, E, F, G, H, I);
impl_tuple_shape!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_shape!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_shape!(A, B, C, D, E, F, G, H, I, J, K, L);
