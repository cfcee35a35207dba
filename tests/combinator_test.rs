//! Boolean combinators over heterogeneous predicates.

#![cfg(feature = "std")]
#![allow(clippy::assertions_on_constants)]

use tola_copyable::classify::{IsArithmetic, IsTextString, IsTrivial};
use tola_copyable::hlist;
use tola_copyable::logic::{AllOf, AnyOf, HNil, Lit, Not, Predicate};
use tola_copyable::{Absent, Present};

const _: () = assert!(<AllOf<HNil> as Predicate>::VALUE);
const _: () = assert!(!<AnyOf<HNil> as Predicate>::VALUE);

#[test]
fn test_identities() {
    assert!(<AllOf<hlist![]> as Predicate>::VALUE);
    assert!(!<AnyOf<hlist![]> as Predicate>::VALUE);
    assert!(<Not<AnyOf<hlist![]>> as Predicate>::VALUE);
}

#[test]
fn test_single_element() {
    assert!(<AllOf<hlist![Present]> as Predicate>::VALUE);
    assert!(!<AllOf<hlist![Absent]> as Predicate>::VALUE);
    assert!(<AnyOf<hlist![Present]> as Predicate>::VALUE);
    assert!(!<AnyOf<hlist![Absent]> as Predicate>::VALUE);
}

#[test]
fn test_heterogeneous_predicates() {
    type NumberOrText<T> = AnyOf<hlist![IsArithmetic<T>, IsTextString<T>]>;
    assert!(<NumberOrText<u16> as Predicate>::VALUE);
    assert!(<NumberOrText<String> as Predicate>::VALUE);
    assert!(!<NumberOrText<Vec<u16>> as Predicate>::VALUE);

    type TrivialNonNumber<T> = AllOf<hlist![IsTrivial<T>, Not<IsArithmetic<T>>]>;
    assert!(<TrivialNonNumber<core::time::Duration> as Predicate>::VALUE);
    assert!(!<TrivialNonNumber<u8> as Predicate>::VALUE);
}

#[test]
fn test_recursive_composition() {
    type Inner = AllOf<hlist![Present, Not<Absent>, Lit<Present>]>;
    type Middle = AnyOf<hlist![Absent, Inner]>;
    type Outer = AllOf<hlist![Middle, Not<AllOf<hlist![Middle, Absent]>>]>;
    assert!(<Inner as Predicate>::VALUE);
    assert!(<Middle as Predicate>::VALUE);
    assert!(<Outer as Predicate>::VALUE);
}

#[test]
fn test_result_types() {
    let _: <AllOf<hlist![Present, Present]> as Predicate>::Out = Present;
    let _: <AnyOf<hlist![Absent, Absent]> as Predicate>::Out = Absent;
    let _: <Not<Present> as Predicate>::Out = Absent;
}
