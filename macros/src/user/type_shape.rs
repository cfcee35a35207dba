//! `#[derive(TypeShape)]`

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Type};

use crate::common::ShapeArgs;

/// Field types of a struct or of every enum variant, in declaration order.
fn field_types(input: &DeriveInput) -> syn::Result<Vec<&Type>> {
    match &input.data {
        Data::Struct(data) => Ok(data.fields.iter().map(|f| &f.ty).collect()),
        Data::Enum(data) => Ok(data
            .variants
            .iter()
            .flat_map(|v| v.fields.iter().map(|f| &f.ty))
            .collect()),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "TypeShape cannot be derived for unions",
        )),
    }
}

/// Expand `#[derive(TypeShape)]`.
///
/// - `Trivial` is the conjunction of `IsTrivial` over every field type
///   (`Absent` under `#[shape(opaque)]`).
/// - `Class` is always `Present`.
/// - `#[shape(copy_loggable)]` sets `Tagged` and implements `CopyLoggable`.
/// - `#[shape(container(E))]` / `#[shape(pair(A, B))]` fill the slots.
pub fn expand_derive_type_shape(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let args = ShapeArgs::from_attrs(&input.attrs)?;
    let fields = field_types(input)?;
    let krate = quote! { ::tola_copyable };
    let ident = &input.ident;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::TypeShape));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let trivial = if args.opaque {
        quote! { #krate::Absent }
    } else {
        quote! {
            <#krate::logic::AllOf<
                #krate::hlist![#(#krate::classify::IsTrivial<#fields>),*]
            > as #krate::logic::Predicate>::Out
        }
    };
    let tagged = if args.copy_loggable {
        quote! { #krate::Present }
    } else {
        quote! { #krate::Absent }
    };
    let pair = match &args.pair {
        Some((first, second)) => quote! { #krate::shape::PairOf<#first, #second> },
        None => quote! { #krate::shape::NotPair },
    };
    let container = match &args.container {
        Some(elem) => quote! { #krate::shape::ElementsOf<#elem> },
        None => quote! { #krate::shape::NotContainer },
    };
    let tag_impl = args.copy_loggable.then(|| {
        quote! {
            impl #impl_generics #krate::CopyLoggable for #ident #ty_generics #where_clause {}
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::TypeShape for #ident #ty_generics #where_clause {
            type Trivial = #trivial;
            type Arithmetic = #krate::Absent;
            type TextString = #krate::Absent;
            type Class = #krate::Present;
            type Tagged = #tagged;
            type Pair = #pair;
            type Container = #container;
            type Tuple = #krate::shape::NotTuple;
        }

        #tag_impl
    })
}
