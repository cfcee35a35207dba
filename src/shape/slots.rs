//! Pair, container and tuple slots.
//!
//! Each slot answers two questions: "is the type one of these" and "are all
//! of its elements copyable". The second question recurses into
//! [`IsCopyable`] only from the element-carrying slot types.

use core::marker::PhantomData;

use super::TypeShape;
use crate::classify::IsCopyable;
use crate::logic::{AllOf, HCons, HNil, Predicate};
use crate::primitives::{Absent, Bool, Present};

// =============================================================================
// Pair
// =============================================================================

/// Pair slot of a [`TypeShape`].
pub trait PairSlot {
    type IsPair: Bool;
    /// Both elements are copyable. `Absent` for non-pairs.
    type Copyable: Bool;
}

/// Element types of a fixed two-element pair.
pub trait Pair {
    type First;
    type Second;
}

/// The type is not a pair.
pub struct NotPair;

/// The type is a pair of `First` and `Second`.
pub struct PairOf<First, Second>(PhantomData<(First, Second)>);

impl PairSlot for NotPair {
    type IsPair = Absent;
    type Copyable = Absent;
}

impl<First: TypeShape, Second: TypeShape> PairSlot for PairOf<First, Second> {
    type IsPair = Present;
    type Copyable =
        <AllOf<crate::hlist![IsCopyable<First>, IsCopyable<Second>]> as Predicate>::Out;
}

impl<First, Second> Pair for PairOf<First, Second> {
    type First = First;
    type Second = Second;
}

// =============================================================================
// Container
// =============================================================================

/// Container slot of a [`TypeShape`].
pub trait ContainerSlot {
    /// Exposes an iteration capability over `Element`.
    type IsContainer: Bool;
    /// The element type is copyable. `Absent` for non-containers.
    type Copyable: Bool;
}

/// Element type of a sequence-like container.
pub trait Sequence {
    type Element;
}

/// The type is not a container.
pub struct NotContainer;

/// The type iterates over `Element` values.
pub struct ElementsOf<Element>(PhantomData<Element>);

impl ContainerSlot for NotContainer {
    type IsContainer = Absent;
    type Copyable = Absent;
}

impl<Element: TypeShape> ContainerSlot for ElementsOf<Element> {
    type IsContainer = Present;
    type Copyable = <IsCopyable<Element> as Predicate>::Out;
}

impl<Element> Sequence for ElementsOf<Element> {
    type Element = Element;
}

// =============================================================================
// Tuple
// =============================================================================

/// Tuple slot of a [`TypeShape`]. Pairs use [`PairSlot`] instead.
pub trait TupleSlot {
    type IsTuple: Bool;
    /// Every element is copyable. `Absent` for non-tuples.
    type Copyable: Bool;
}

/// The type is not a tuple.
pub struct NotTuple;

/// The type is a tuple whose element types form the HList `Elements`.
pub struct TupleOf<Elements>(PhantomData<Elements>);

/// All types in an HList of element types are copyable.
pub trait ElementsCopyable {
    type Out: Bool;
}

impl ElementsCopyable for HNil {
    type Out = Present;
}

impl<H: TypeShape, T: ElementsCopyable> ElementsCopyable for HCons<H, T> {
    type Out = <<IsCopyable<H> as Predicate>::Out as Bool>::And<T::Out>;
}

impl TupleSlot for NotTuple {
    type IsTuple = Absent;
    type Copyable = Absent;
}

impl<Elements: ElementsCopyable> TupleSlot for TupleOf<Elements> {
    type IsTuple = Present;
    type Copyable = Elements::Out;
}
