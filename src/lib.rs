#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library shapes (OsString, HashMap, Instant, ...)
// - alloc: enables alloc shapes (String, Vec, BTreeMap, ...) in no_std
// - probe: enables `is_copyable!` and `Probe<T>` for unshaped types

//! # tola-copyable
//!
//! Compile-time classification of types that are safe to copy into a
//! deferred logging queue.
//!
//! A logging frontend that hands values to a backend thread must decide, per
//! argument type, between two enqueue strategies:
//!
//! - **copy now, format later**: the value is duplicated into the queue and
//!   rendered on the backend thread;
//! - **format now**: the value is rendered on the calling thread because a
//!   copy would be unsafe or would not carry what is needed to render it.
//!
//! `tola-copyable` answers that question with zero runtime cost. The verdict
//! is an associated type (`Present` / `Absent`) computed by the trait
//! solver, and an associated `const bool`.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives & Logic                                      |
//! |  - Bool (Present/Absent), Predicate, AllOf / AnyOf / Not, hlist!  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Shapes                                                  |
//! |  - TypeShape facts + pair/container/tuple slots                   |
//! |  - std shapes (generated), #[derive(TypeShape)]                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Classification                                          |
//! |  - leaf predicates, IsCopyable<T>, Copyable, is_copyable!         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Strategy Selection                                      |
//! |  - Deferred / Immediate, StrategyOf<T>, route()                   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Rules
//!
//! A type is copyable if it is trivial, arithmetic, a text string, a pair of
//! copyable types, a container of a copyable type, a tuple of copyable
//! types, or a non-trivial class explicitly tagged with [`CopyLoggable`].
//! Pointers, boxes and shared pointers are not copyable.
//!
//! Containers and pairs are recognized nominally, from their [`TypeShape`],
//! never from incidental members such as an `Item` type.
//!
//! ## Quick Start
//!
//! ```
//! use tola_copyable::prelude::*;
//!
//! #[derive(TypeShape)]
//! struct Quote { bid: f64, ask: f64 }
//!
//! #[derive(TypeShape)]
//! struct Account { owner: String, balances: Vec<i64> }
//!
//! #[derive(TypeShape)]
//! #[shape(copy_loggable)]
//! struct Order { id: u64, symbol: String }
//!
//! assert!(is_copyable::<Quote>());        // trivial
//! assert!(!is_copyable::<Account>());     // owns data, not tagged
//! assert!(is_copyable::<Order>());        // tagged
//! assert!(is_copyable::<(u32, String)>());
//! assert!(is_copyable::<Vec<Vec<i32>>>());
//! assert!(!is_copyable::<Vec<Account>>());
//! ```

// Allow `::tola_copyable` to work inside the crate itself
extern crate self as tola_copyable;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives and Logic
// =============================================================================
pub mod primitives;
pub mod logic;

// =============================================================================
// Layer 1: Shapes
// =============================================================================
pub mod shape;

// =============================================================================
// Layer 2: Classification
// =============================================================================
pub mod classify;

#[cfg(feature = "probe")]
pub mod probe;

// =============================================================================
// Layer 3: Strategy Selection
// =============================================================================
pub mod select;

// hlist!
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use classify::{is_copyable, is_copyable_of, Copyable, IsCopyable};
pub use primitives::bool::{Absent, Bool, Present};
pub use shape::{CopyLoggable, TypeShape};

// Re-export proc-macros. The derive shares the trait's name.
pub use macros::TypeShape;

/// Common items for classification.
pub mod prelude {
    pub use crate::classify::{is_copyable, is_copyable_of, Copyable};
    pub use crate::select::{Deferred, EnqueueStrategy, Immediate};
    pub use crate::shape::{CopyLoggable, TypeShape};
    pub use macros::TypeShape;
    // Note: is_copyable! and hlist! are #[macro_export] so they're at crate root
}
