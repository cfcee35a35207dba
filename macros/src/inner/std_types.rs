//! Standard library shape tables for auto-generation.

use proc_macro2::TokenStream;
use quote::quote;

/// How a table entry is classified.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Built-in numeric scalar. Trivial as well.
    Arithmetic,
    /// Trivial value class (durations, non-zero integers, markers).
    Trivial,
    /// Trivial iff the named parameter is.
    TrivialIf(&'static str),
    /// Trivial iff every named parameter is.
    TrivialIfAll(&'static [&'static str]),
    /// Text string that does not expose elements.
    Text,
    /// Text string iterating over the named element type.
    IterableText(&'static str),
    /// Owning container of the named element type.
    Container(&'static str),
    /// Container that is trivial iff its element is (`Option<T>`).
    TrivialContainer(&'static str),
    /// Fixed-size array: trivial iff its element is, not a class.
    Array(&'static str),
    /// Owning or shared class with no copy guarantee.
    Opaque,
    /// References and raw pointers.
    Pointer,
}

use ShapeKind::*;

/// A type pattern, its generics (with bounds) and its kind.
pub type ShapeEntry = (&'static str, &'static str, ShapeKind);

const SHAPE: &str = "crate::shape::TypeShape";

/// Primitive types (always available).
pub const PRIMITIVE_TYPES: &[ShapeEntry] = &[
    ("bool", "", Arithmetic),
    ("char", "", Arithmetic),

    // Unsigned integers
    ("u8", "", Arithmetic),
    ("u16", "", Arithmetic),
    ("u32", "", Arithmetic),
    ("u64", "", Arithmetic),
    ("u128", "", Arithmetic),
    ("usize", "", Arithmetic),

    // Signed integers
    ("i8", "", Arithmetic),
    ("i16", "", Arithmetic),
    ("i32", "", Arithmetic),
    ("i64", "", Arithmetic),
    ("i128", "", Arithmetic),
    ("isize", "", Arithmetic),

    // Floats
    ("f32", "", Arithmetic),
    ("f64", "", Arithmetic),
];

/// Core types (always available).
pub const CORE_TYPES: &[ShapeEntry] = &[
    // NonZero
    ("core::num::NonZeroU8", "", Trivial),
    ("core::num::NonZeroU16", "", Trivial),
    ("core::num::NonZeroU32", "", Trivial),
    ("core::num::NonZeroU64", "", Trivial),
    ("core::num::NonZeroU128", "", Trivial),
    ("core::num::NonZeroUsize", "", Trivial),
    ("core::num::NonZeroI8", "", Trivial),
    ("core::num::NonZeroI16", "", Trivial),
    ("core::num::NonZeroI32", "", Trivial),
    ("core::num::NonZeroI64", "", Trivial),
    ("core::num::NonZeroI128", "", Trivial),
    ("core::num::NonZeroIsize", "", Trivial),

    // Time
    ("core::time::Duration", "", Trivial),

    // Markers and small value types
    ("core::cmp::Ordering", "", Trivial),
    ("core::marker::PhantomData<T>", "T: ?Sized", Trivial),
    ("core::marker::PhantomPinned", "", Trivial),

    // Numeric wrappers
    ("core::num::Wrapping<T>", "T: crate::shape::TypeShape", TrivialIf("T")),
    ("core::num::Saturating<T>", "T: crate::shape::TypeShape", TrivialIf("T")),
    ("core::cmp::Reverse<T>", "T: crate::shape::TypeShape", TrivialIf("T")),

    // Arrays and Option
    ("[T; N]", "T: crate::shape::TypeShape, const N: usize", Array("T")),
    ("Option<T>", "T: crate::shape::TypeShape", TrivialContainer("T")),
    ("Result<T, E>", "T: crate::shape::TypeShape, E: crate::shape::TypeShape", TrivialIfAll(&["T", "E"])),

    // Ranges over plain values
    ("core::ops::Range<T>", "T: crate::shape::TypeShape", TrivialIf("T")),
    ("core::ops::RangeInclusive<T>", "T: crate::shape::TypeShape", TrivialIf("T")),

    // Pointers and references
    ("&'a T", "'a, T: ?Sized", Pointer),
    ("&'a mut T", "'a, T: ?Sized", Pointer),
    ("*const T", "T: ?Sized", Pointer),
    ("*mut T", "T: ?Sized", Pointer),
    ("core::ptr::NonNull<T>", "T: ?Sized", Pointer),

    // Cell types
    ("core::cell::Cell<T>", "T: ?Sized", Opaque),
    ("core::cell::RefCell<T>", "T: ?Sized", Opaque),
    ("core::cell::UnsafeCell<T>", "T: ?Sized", Opaque),
    ("core::cell::OnceCell<T>", "T", Opaque),
];

/// Alloc library types (requires "alloc" feature).
pub const ALLOC_TYPES: &[ShapeEntry] = &[
    // Strings
    ("alloc::string::String", "", IterableText("char")),
    ("alloc::boxed::Box<str>", "", IterableText("char")),
    ("alloc::borrow::Cow<'a, str>", "'a", IterableText("char")),
    ("alloc::ffi::CString", "", Text),

    // Smart pointers. `Box<T>` stays sized so `Box<str>` above does not overlap.
    ("alloc::boxed::Box<T>", "T", Opaque),
    ("alloc::rc::Rc<T>", "T: ?Sized", Opaque),
    ("alloc::sync::Arc<T>", "T: ?Sized", Opaque),
    ("alloc::rc::Weak<T>", "T: ?Sized", Opaque),
    ("alloc::sync::Weak<T>", "T: ?Sized", Opaque),

    // Collections
    ("alloc::vec::Vec<T>", "T: crate::shape::TypeShape", Container("T")),
    ("alloc::collections::VecDeque<T>", "T: crate::shape::TypeShape", Container("T")),
    ("alloc::collections::LinkedList<T>", "T: crate::shape::TypeShape", Container("T")),
    ("alloc::collections::BinaryHeap<T>", "T: crate::shape::TypeShape", Container("T")),
    ("alloc::collections::BTreeSet<T>", "T: crate::shape::TypeShape", Container("T")),
    (
        "alloc::collections::BTreeMap<K, V>",
        "K: crate::shape::TypeShape, V: crate::shape::TypeShape",
        Container("(K, V)"),
    ),
];

/// Standard library types (requires "std" feature).
pub const STD_TYPES: &[ShapeEntry] = &[
    // Strings
    ("std::ffi::OsString", "", Text),

    // Collections
    ("std::collections::HashSet<T, S>", "T: crate::shape::TypeShape, S", Container("T")),
    (
        "std::collections::HashMap<K, V, S>",
        "K: crate::shape::TypeShape, V: crate::shape::TypeShape, S",
        Container("(K, V)"),
    ),

    // Time
    ("std::time::Instant", "", Trivial),
    ("std::time::SystemTime", "", Trivial),

    // std::net
    ("std::net::IpAddr", "", Trivial),
    ("std::net::Ipv4Addr", "", Trivial),
    ("std::net::Ipv6Addr", "", Trivial),
    ("std::net::SocketAddr", "", Trivial),

    // std::thread
    ("std::thread::ThreadId", "", Trivial),
    ("std::thread::Thread", "", Opaque),

    // std::sync
    ("std::sync::Mutex<T>", "T: ?Sized", Opaque),
    ("std::sync::RwLock<T>", "T: ?Sized", Opaque),
    ("std::sync::OnceLock<T>", "T", Opaque),

    // std::fs
    ("std::fs::File", "", Opaque),
];

/// The associated types of one `TypeShape` impl.
struct Facts {
    trivial: TokenStream,
    arithmetic: TokenStream,
    text: TokenStream,
    class: TokenStream,
    container: TokenStream,
}

fn parse_ty(src: &str) -> syn::Type {
    syn::parse_str(src).expect("shape table entries are valid types")
}

fn facts(kind: ShapeKind) -> Facts {
    let present = quote! { crate::primitives::Present };
    let absent = quote! { crate::primitives::Absent };
    let shape: syn::Path = syn::parse_str(SHAPE).expect("valid path");
    let not_container = quote! { crate::shape::NotContainer };
    let elements_of = |elem: &str| {
        let elem = parse_ty(elem);
        quote! { crate::shape::ElementsOf<#elem> }
    };
    let trivial_if = |param: &str| {
        let param = parse_ty(param);
        quote! { <#param as #shape>::Trivial }
    };

    match kind {
        Arithmetic => Facts {
            trivial: present.clone(),
            arithmetic: present,
            text: absent.clone(),
            class: absent,
            container: not_container,
        },
        Trivial => Facts {
            trivial: present.clone(),
            arithmetic: absent.clone(),
            text: absent,
            class: present,
            container: not_container,
        },
        TrivialIf(param) => Facts {
            trivial: trivial_if(param),
            arithmetic: absent.clone(),
            text: absent,
            class: present,
            container: not_container,
        },
        TrivialIfAll(params) => {
            let params = params.iter().map(|param| parse_ty(param));
            Facts {
                trivial: quote! {
                    <crate::logic::AllOf<
                        crate::hlist![#(crate::classify::IsTrivial<#params>),*]
                    > as crate::logic::Predicate>::Out
                },
                arithmetic: absent.clone(),
                text: absent,
                class: present,
                container: not_container,
            }
        }
        Text => Facts {
            trivial: absent.clone(),
            arithmetic: absent,
            text: present.clone(),
            class: present,
            container: not_container,
        },
        IterableText(elem) => Facts {
            trivial: absent.clone(),
            arithmetic: absent,
            text: present.clone(),
            class: present,
            container: elements_of(elem),
        },
        Container(elem) => Facts {
            trivial: absent.clone(),
            arithmetic: absent.clone(),
            text: absent,
            class: present,
            container: elements_of(elem),
        },
        TrivialContainer(elem) => Facts {
            trivial: trivial_if(elem),
            arithmetic: absent.clone(),
            text: absent,
            class: present,
            container: elements_of(elem),
        },
        Array(elem) => Facts {
            trivial: trivial_if(elem),
            arithmetic: absent.clone(),
            text: absent.clone(),
            class: absent,
            container: elements_of(elem),
        },
        Opaque => Facts {
            trivial: absent.clone(),
            arithmetic: absent.clone(),
            text: absent,
            class: present,
            container: not_container,
        },
        Pointer => Facts {
            trivial: absent.clone(),
            arithmetic: absent.clone(),
            text: absent.clone(),
            class: absent,
            container: not_container,
        },
    }
}

fn expand_entry(entry: &ShapeEntry, cfg: &TokenStream) -> TokenStream {
    let (path, generics, kind) = *entry;
    let ty = parse_ty(path);
    let generics: syn::Generics = if generics.is_empty() {
        syn::Generics::default()
    } else {
        syn::parse_str(&format!("<{}>", generics)).expect("shape table generics are valid")
    };
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let Facts { trivial, arithmetic, text, class, container } = facts(kind);

    quote! {
        #cfg
        impl #impl_generics crate::shape::TypeShape for #ty #where_clause {
            type Trivial = #trivial;
            type Arithmetic = #arithmetic;
            type TextString = #text;
            type Class = #class;
            type Tagged = crate::primitives::Absent;
            type Pair = crate::shape::NotPair;
            type Container = #container;
            type Tuple = crate::shape::NotTuple;
        }
    }
}

/// Generate `TypeShape` impls for primitives, core, alloc and std types.
///
/// Alloc and std entries are gated on the calling crate's features.
pub fn expand_std_shapes() -> TokenStream {
    let tables: [(&[ShapeEntry], TokenStream); 4] = [
        (PRIMITIVE_TYPES, quote! {}),
        (CORE_TYPES, quote! {}),
        (ALLOC_TYPES, quote! { #[cfg(feature = "alloc")] }),
        (STD_TYPES, quote! { #[cfg(feature = "std")] }),
    ];

    let impls = tables
        .iter()
        .flat_map(|(table, cfg)| table.iter().map(move |entry| expand_entry(entry, cfg)));

    quote! { #(#impls)* }
}
