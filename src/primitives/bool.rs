//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;

    /// Run one of two continuations based on this boolean value.
    ///
    /// `ctx` is handed to whichever branch runs, so both branches may borrow
    /// the same state mutably. After monomorphization no branch remains.
    fn select<Ctx, Out, Then, Else>(ctx: Ctx, then: Then, otherwise: Else) -> Out
    where
        Then: FnOnce(Ctx) -> Out,
        Else: FnOnce(Ctx) -> Out;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;

    #[inline(always)]
    fn select<Ctx, Out, Then, Else>(ctx: Ctx, then: Then, _otherwise: Else) -> Out
    where
        Then: FnOnce(Ctx) -> Out,
        Else: FnOnce(Ctx) -> Out,
    {
        then(ctx)
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;

    #[inline(always)]
    fn select<Ctx, Out, Then, Else>(ctx: Ctx, _then: Then, otherwise: Else) -> Out
    where
        Then: FnOnce(Ctx) -> Out,
        Else: FnOnce(Ctx) -> Out,
    {
        otherwise(ctx)
    }
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// `Present` for `true`, `Absent` for `false`.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <BoolOf<C> as Bool>::If<T, E>;
