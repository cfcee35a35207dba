//! # Layer 1: Type Shapes
//!
//! A [`TypeShape`] is the nominal description of a type's static shape: a
//! handful of type-level booleans plus three slots that either carry the
//! element types of a pair, container or tuple, or say that the type is none
//! of those.
//!
//! ```text
//! TypeShape
//!   Trivial / Arithmetic / TextString / Class / Tagged   : Bool
//!   Pair      : NotPair      | PairOf<First, Second>
//!   Container : NotContainer | ElementsOf<Element>
//!   Tuple     : NotTuple     | TupleOf<HCons<A, HCons<B, ...>>>
//! ```
//!
//! Element types are only reachable through `PairOf`, `ElementsOf` and
//! `TupleOf`. Asking whether a non-container's elements are copyable never
//! names an element type, so the recursion in [`crate::classify`] stops at
//! the first type that is not a pair, container or tuple.
//!
//! Core, alloc and std types have shapes out of the box (see the table in
//! `std_shapes.rs`). User types get one with `#[derive(TypeShape)]`.

mod slots;
mod std_shapes;
mod tuples;

pub use slots::{
    ContainerSlot, ElementsCopyable, ElementsOf, NotContainer, NotPair, NotTuple, Pair, PairOf,
    PairSlot, Sequence, TupleOf, TupleSlot,
};

use crate::primitives::Bool;

/// Static shape facts for a classifiable type.
///
/// Implemented for primitives and the standard containers by this crate, and
/// for user types by `#[derive(TypeShape)]`.
///
/// # Manual implementation
///
/// ```
/// use tola_copyable::prelude::*;
/// use tola_copyable::shape::{NotContainer, NotPair, NotTuple};
/// use tola_copyable::{Absent, Present};
///
/// struct Handle(Box<u32>);
///
/// impl TypeShape for Handle {
///     type Trivial = Absent;
///     type Arithmetic = Absent;
///     type TextString = Absent;
///     type Class = Present;
///     type Tagged = Present;
///     type Pair = NotPair;
///     type Container = NotContainer;
///     type Tuple = NotTuple;
/// }
/// impl CopyLoggable for Handle {}
///
/// assert!(is_copyable::<Handle>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no type shape, so its copyability cannot be classified",
    label = "no `TypeShape` for `{Self}`",
    note = "Add `#[derive(TypeShape)]` (optionally with `#[shape(copy_loggable)]`) to the type, or use `is_copyable!` which answers `false` for unshaped concrete types."
)]
pub trait TypeShape {
    /// Bitwise duplicable, no ownership semantics.
    type Trivial: Bool;
    /// Built-in numeric scalar (including `bool` and `char`).
    type Arithmetic: Bool;
    /// A standard text string.
    type TextString: Bool;
    /// A nominal struct/enum type (as opposed to scalars, tuples, arrays, pointers).
    type Class: Bool;
    /// Carries the [`CopyLoggable`] tag.
    type Tagged: Bool;
    type Pair: PairSlot;
    type Container: ContainerSlot;
    type Tuple: TupleSlot;
}

/// Tag marker: the type asserts it is safe to copy into a deferred buffer
/// even though it is not trivial.
///
/// The marker is read through [`TypeShape::Tagged`]; the derive sets both.
///
/// ```
/// use tola_copyable::prelude::*;
///
/// #[derive(TypeShape)]
/// #[shape(copy_loggable)]
/// struct Order {
///     id: u64,
///     symbol: Box<str>,
/// }
///
/// fn enqueue<T: CopyLoggable>(_: &T) {}
/// enqueue(&Order { id: 1, symbol: "X".into() });
/// assert!(is_copyable::<Order>());
/// ```
pub trait CopyLoggable {}
