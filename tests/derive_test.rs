//! `#[derive(TypeShape)]` on user types.

#![cfg(feature = "std")]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::marker::PhantomData;

use tola_copyable::classify::{IsContainer, IsPairLike, IsTrivial};
use tola_copyable::logic::Predicate;
use tola_copyable::prelude::*;
use tola_copyable::shape::{Pair, PairSlot, Sequence};
use tola_copyable::Bool;

// =============================================================================
// Trivial aggregates
// =============================================================================

#[derive(TypeShape)]
struct Empty;

#[derive(TypeShape)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(TypeShape)]
struct Candle(u64, [f32; 4], core::time::Duration);

#[derive(TypeShape)]
enum Side {
    Buy,
    Sell,
}

#[derive(TypeShape)]
enum Event {
    Tick { px: f64 },
    Halt(u32, Side),
}

#[test]
fn test_trivial_aggregates() {
    assert!(<IsTrivial<Empty> as Predicate>::VALUE);
    assert!(<IsTrivial<Point> as Predicate>::VALUE);
    assert!(<IsTrivial<Candle> as Predicate>::VALUE);
    assert!(<IsTrivial<Side> as Predicate>::VALUE);
    assert!(<IsTrivial<Event> as Predicate>::VALUE);
    assert!(is_copyable::<Point>());
    assert!(is_copyable::<Vec<Event>>());
}

// =============================================================================
// Non-trivial classes and the tag
// =============================================================================

#[derive(TypeShape)]
struct Account {
    owner: String,
    balance: i64,
}

#[derive(TypeShape)]
enum Payload {
    Small(u8),
    Text(String),
}

#[derive(TypeShape)]
#[shape(copy_loggable)]
struct Order {
    id: u64,
    symbol: String,
}

#[derive(TypeShape)]
#[shape(copy_loggable)]
struct TaggedPoint {
    x: i32,
}

#[test]
fn test_non_trivial_untagged_is_rejected() {
    assert!(!<IsTrivial<Account> as Predicate>::VALUE);
    assert!(!is_copyable::<Account>());
    assert!(!is_copyable::<Payload>());
}

#[test]
fn test_tag_opts_in() {
    fn require_tag<T: CopyLoggable>() {}
    require_tag::<Order>();
    assert!(is_copyable::<Order>());
    assert!(is_copyable::<BTreeMap<u64, Order>>());
}

#[test]
fn test_trivial_tagged_is_copyable() {
    assert!(<IsTrivial<TaggedPoint> as Predicate>::VALUE);
    assert!(is_copyable::<TaggedPoint>());
}

// =============================================================================
// Opaque
// =============================================================================

struct ForeignHandle(u32);

#[derive(TypeShape)]
#[shape(opaque)]
struct Connection {
    handle: ForeignHandle,
}

#[derive(TypeShape)]
#[shape(opaque, copy_loggable)]
struct CachedConnection {
    handle: ForeignHandle,
}

#[test]
fn test_opaque_needs_no_field_shapes() {
    assert!(!<IsTrivial<Connection> as Predicate>::VALUE);
    assert!(!is_copyable::<Connection>());
    assert!(is_copyable::<CachedConnection>());
}

// =============================================================================
// Generics
// =============================================================================

#[derive(TypeShape)]
struct Labeled<T> {
    label: u16,
    value: T,
}

#[derive(TypeShape)]
struct Marked<M> {
    raw: u32,
    marker: PhantomData<M>,
}

#[test]
fn test_generic_fields_follow_parameters() {
    assert!(is_copyable::<Labeled<f64>>());
    assert!(<IsTrivial<Labeled<f64>> as Predicate>::VALUE);
    assert!(!is_copyable::<Labeled<String>>());
    assert!(!is_copyable::<Labeled<Account>>());
    assert!(is_copyable::<Marked<String>>());
}

// =============================================================================
// Nominal container and pair opt-in
// =============================================================================

#[derive(TypeShape)]
#[shape(container(u32))]
struct Ids {
    inner: Vec<u32>,
}

#[derive(TypeShape)]
#[shape(container(Account))]
struct Accounts {
    inner: Vec<Account>,
}

#[derive(TypeShape)]
#[shape(pair(String, f64))]
struct Entry {
    key: String,
    value: f64,
}

/// Looks iterable, but declares nothing.
#[derive(TypeShape)]
struct LooksLikeContainer {
    items: Vec<u32>,
}

impl IntoIterator for LooksLikeContainer {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[test]
fn test_declared_container() {
    assert!(<IsContainer<Ids> as Predicate>::VALUE);
    assert!(is_copyable::<Ids>());
    assert!(!is_copyable::<Accounts>());
    let _: Option<<ElementsOfIds as Sequence>::Element> = Some(7u32);
}

type ElementsOfIds = <Ids as TypeShape>::Container;

#[test]
fn test_declared_pair() {
    assert!(<IsPairLike<Entry> as Predicate>::VALUE);
    assert!(is_copyable::<Entry>());
    let first: <<Entry as TypeShape>::Pair as Pair>::First = String::from("k");
    let second: <<Entry as TypeShape>::Pair as Pair>::Second = 1.0;
    assert_eq!((first.as_str(), second), ("k", 1.0));
    assert!(<<<Entry as TypeShape>::Pair as PairSlot>::Copyable as Bool>::VALUE);
}

#[test]
fn test_structural_lookalike_is_not_a_container() {
    assert!(!<IsContainer<LooksLikeContainer> as Predicate>::VALUE);
    assert!(!is_copyable::<LooksLikeContainer>());
}
