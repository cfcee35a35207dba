//! Internal code generators used by the crate itself.

pub mod std_types;
