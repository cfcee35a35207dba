//! Common parsing utilities
//!
//! Parses the `#[shape(...)]` helper attribute of `#[derive(TypeShape)]`.

use syn::{
    meta::ParseNestedMeta,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Token, Type,
};

// =============================================================================
// #[shape(...)] Options
// =============================================================================

/// Options collected from every `#[shape(...)]` attribute on a type.
///
/// ```ignore
/// #[shape(copy_loggable)]
/// #[shape(opaque)]
/// #[shape(container(Elem))]
/// #[shape(pair(First, Second))]
/// ```
#[derive(Default)]
pub struct ShapeArgs {
    /// Tagged with `CopyLoggable`.
    pub copy_loggable: bool,
    /// Never trivial; fields are not inspected.
    pub opaque: bool,
    /// Declared container element type.
    pub container: Option<Type>,
    /// Declared pair element types.
    pub pair: Option<(Type, Type)>,
}

impl ShapeArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = ShapeArgs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("shape")) {
            attr.parse_nested_meta(|meta| args.apply(meta))?;
        }
        Ok(args)
    }

    fn apply(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("copy_loggable") {
            self.copy_loggable = true;
        } else if meta.path.is_ident("opaque") {
            self.opaque = true;
        } else if meta.path.is_ident("container") {
            if self.pair.is_some() {
                return Err(meta.error("a shape is either a pair or a container, not both"));
            }
            let content;
            syn::parenthesized!(content in meta.input);
            self.container = Some(content.parse()?);
        } else if meta.path.is_ident("pair") {
            if self.container.is_some() {
                return Err(meta.error("a shape is either a pair or a container, not both"));
            }
            let content;
            syn::parenthesized!(content in meta.input);
            let types = parse_type_list(&content)?;
            match <[Type; 2]>::try_from(types) {
                Ok([first, second]) => self.pair = Some((first, second)),
                Err(_) => return Err(meta.error("`pair` takes exactly two types: pair(First, Second)")),
            }
        } else {
            return Err(meta.error(
                "unknown shape option; expected `copy_loggable`, `opaque`, `container(..)` or `pair(..)`",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

/// Parse comma-separated types (e.g., in `pair(A, B)`)
pub fn parse_type_list(input: ParseStream) -> syn::Result<Vec<Type>> {
    parse_comma_separated(input)
}
