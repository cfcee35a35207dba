//! Procedural macros for tola-copyable
//!
//! ## Example
//!
//! ```ignore
//! #[derive(TypeShape)]
//! struct Tick { price: f64, qty: u32 }          // trivial: copyable
//!
//! #[derive(TypeShape)]
//! #[shape(copy_loggable)]
//! struct Order { id: u64, symbol: String }      // tagged: copyable
//!
//! #[derive(TypeShape)]
//! #[shape(container(u32))]
//! struct Ids { inner: Vec<u32> }                // declared container of u32
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `TypeShape` impls for primitive, core, alloc and std types.
///
/// Only invoked once, inside `tola-copyable` itself: the output refers to
/// `crate::` paths and to the `alloc`/`std` features of that crate.
#[proc_macro]
pub fn define_std_shapes(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_std_shapes().into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive the `TypeShape` of a struct or enum.
///
/// The type is a class; it is trivial iff every field type is trivial.
///
/// # Options
///
/// - `#[shape(copy_loggable)]`: tag the type as safe to copy for deferred
///   formatting, and implement `CopyLoggable`.
/// - `#[shape(opaque)]`: never trivial; field types need no shape.
/// - `#[shape(container(Elem))]`: the type is a container of `Elem`.
/// - `#[shape(pair(First, Second))]`: the type is a pair.
#[proc_macro_derive(TypeShape, attributes(shape))]
pub fn derive_type_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_type_shape(input).into()
}
