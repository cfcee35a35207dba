//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeShape)]` | on struct/enum | Declare the type's shape |
//! | `#[shape(..)]` | helper attribute | Tag, opaque, container or pair opt-in |

pub mod type_shape;

pub use type_shape::expand_derive_type_shape;
