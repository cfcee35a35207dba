//! Predicate types and boolean combinators.
//!
//! A [`Predicate`] is a nullary compile-time construct: a type whose
//! associated [`Predicate::Out`] is `Present` or `Absent`. Combinators are
//! predicates themselves, so they nest freely:
//!
//! ```
//! use tola_copyable::hlist;
//! use tola_copyable::logic::{AllOf, AnyOf, Not, Predicate};
//! use tola_copyable::{Absent, Present};
//!
//! type Inner = AnyOf<hlist![Absent, Not<Absent>]>;
//! type Outer = AllOf<hlist![Present, Inner]>;
//!
//! assert!(<Outer as Predicate>::VALUE);
//! assert!(!<AnyOf<hlist![]> as Predicate>::VALUE);
//! ```

mod combinators;

pub use combinators::{AllOf, AnyOf, HCons, HNil, Lit, Not};

use crate::primitives::{Absent, Bool, Present};

/// A compile-time boolean-producing construct.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a compile-time predicate",
    label = "expected a predicate here",
    note = "Predicates are `Present`, `Absent`, the combinators `AllOf`/`AnyOf`/`Not`, `Lit<B>` for a type-level `Bool`, or a leaf predicate over a type with a shape."
)]
pub trait Predicate {
    type Out: Bool;
    /// The verdict as a constant.
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl Predicate for Present {
    type Out = Present;
}

impl Predicate for Absent {
    type Out = Absent;
}
