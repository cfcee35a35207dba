//! `is_copyable!` on arbitrary concrete types, shaped or not.

#![cfg(all(feature = "std", feature = "probe"))]
#![allow(dead_code)]

use tola_copyable::is_copyable;
use tola_copyable::probe::*;
use tola_copyable::TypeShape;

/// No shape at all.
struct Unshaped {
    bytes: Vec<u8>,
}

/// Structurally a pair, but without a shape.
struct PairLookalike {
    first: u8,
    second: u8,
}

#[derive(TypeShape)]
#[shape(copy_loggable)]
struct Shaped {
    bytes: Vec<u8>,
}

#[test]
fn test_unshaped_types_are_not_copyable() {
    assert!(!is_copyable!(Unshaped));
    assert!(!is_copyable!(PairLookalike));
    assert!(!is_copyable!(std::net::TcpStream));
}

#[test]
fn test_unshaped_elements_are_not_copyable() {
    assert!(!is_copyable!(Vec<Unshaped>));
    assert!(!is_copyable!(Option<Unshaped>));
    assert!(!is_copyable!((u32, Unshaped)));
    assert!(!is_copyable!((u32, u32, Unshaped)));
    assert!(!is_copyable!(std::collections::HashMap<String, Unshaped>));
}

#[test]
fn test_shaped_types_match_the_classifier() {
    assert!(is_copyable!(i32));
    assert!(is_copyable!(Shaped));
    assert!(is_copyable!(Vec<Vec<i32>>));
    assert!(is_copyable!((i32, String)));
    assert!(!is_copyable!(Box<i32>));
    assert_eq!(is_copyable!(Vec<Shaped>), tola_copyable::is_copyable::<Vec<Shaped>>());
}

#[test]
fn test_leaf_probes() {
    assert!(Probe::<f32>::IS_ARITHMETIC);
    assert!(Probe::<[u8; 4]>::IS_TRIVIAL);
    assert!(!Probe::<[u8; 4]>::IS_TEXT_STRING);
    assert!(Probe::<Box<str>>::IS_TEXT_STRING);
    assert!(!Probe::<Box<str>>::IS_CONTAINER);
    assert!(Probe::<(u8, String)>::IS_PAIR_LIKE);
    assert!(Probe::<Shaped>::IS_USER_TAGGED_COPYABLE);

    assert!(!Probe::<PairLookalike>::IS_PAIR_LIKE);
    assert!(!Probe::<Unshaped>::IS_CONTAINER);
    assert!(!Probe::<Unshaped>::IS_ARITHMETIC);
}

#[test]
fn test_generic_context_falls_back() {
    // The bound is not visible inside a generic body: the probe answers false.
    fn probe_in_generic<T>() -> bool {
        is_copyable!(T)
    }
    assert!(!probe_in_generic::<i32>());
    assert!(tola_copyable::is_copyable::<i32>());
}
