//! Leaf predicates over a [`TypeShape`].

use core::marker::PhantomData;

use crate::logic::{AllOf, Lit, Not, Predicate};
use crate::shape::{ContainerSlot, PairSlot, TupleSlot, TypeShape};

macro_rules! leaf_predicate {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T: ?Sized>(PhantomData<*const T>);
    };
}

leaf_predicate!(
    /// Bitwise duplicable, no ownership semantics.
    IsTrivial
);
leaf_predicate!(
    /// Built-in numeric scalar.
    IsArithmetic
);
leaf_predicate!(
    /// A standard text string. Never a character buffer or a sequence of characters.
    IsTextString
);
leaf_predicate!(
    /// A nominal struct or enum.
    IsClass
);
leaf_predicate!(
    /// Carries the `CopyLoggable` tag.
    IsTagged
);
leaf_predicate!(
    /// A two-element pair exposing `First` and `Second`.
    IsPairLike
);
leaf_predicate!(
    /// A pair whose two elements are both copyable.
    IsCopyablePair
);
leaf_predicate!(
    /// A sequence-like container that is not a text string.
    IsContainer
);
leaf_predicate!(
    /// A container whose element type is copyable.
    IsCopyableContainer
);
leaf_predicate!(
    /// A tuple other than a pair.
    IsTuple
);
leaf_predicate!(
    /// A tuple whose elements are all copyable.
    IsCopyableTuple
);
leaf_predicate!(
    /// A non-trivial class that opted in with the tag.
    IsUserTaggedCopyable
);

impl<T: TypeShape + ?Sized> Predicate for IsTrivial<T> {
    type Out = T::Trivial;
}

impl<T: TypeShape + ?Sized> Predicate for IsArithmetic<T> {
    type Out = T::Arithmetic;
}

impl<T: TypeShape + ?Sized> Predicate for IsTextString<T> {
    type Out = T::TextString;
}

impl<T: TypeShape + ?Sized> Predicate for IsClass<T> {
    type Out = T::Class;
}

impl<T: TypeShape + ?Sized> Predicate for IsTagged<T> {
    type Out = T::Tagged;
}

impl<T: TypeShape + ?Sized> Predicate for IsPairLike<T> {
    type Out = <T::Pair as PairSlot>::IsPair;
}

// `NotPair` answers without naming element types.
impl<T: TypeShape + ?Sized> Predicate for IsCopyablePair<T> {
    type Out = <AllOf<crate::hlist![IsPairLike<T>, Lit<<T::Pair as PairSlot>::Copyable>]> as Predicate>::Out;
}

// Strings iterate over characters but are classified by IsTextString.
impl<T: TypeShape + ?Sized> Predicate for IsContainer<T> {
    type Out = <AllOf<
        crate::hlist![Not<IsTextString<T>>, Lit<<T::Container as ContainerSlot>::IsContainer>]
    > as Predicate>::Out;
}

impl<T: TypeShape + ?Sized> Predicate for IsCopyableContainer<T> {
    type Out = <AllOf<
        crate::hlist![IsContainer<T>, Lit<<T::Container as ContainerSlot>::Copyable>]
    > as Predicate>::Out;
}

impl<T: TypeShape + ?Sized> Predicate for IsTuple<T> {
    type Out = <T::Tuple as TupleSlot>::IsTuple;
}

impl<T: TypeShape + ?Sized> Predicate for IsCopyableTuple<T> {
    type Out = <AllOf<crate::hlist![IsTuple<T>, Lit<<T::Tuple as TupleSlot>::Copyable>]> as Predicate>::Out;
}

impl<T: TypeShape + ?Sized> Predicate for IsUserTaggedCopyable<T> {
    type Out = <AllOf<crate::hlist![IsClass<T>, Not<IsTrivial<T>>, IsTagged<T>]> as Predicate>::Out;
}
