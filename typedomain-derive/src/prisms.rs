//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Prisms are generated for unit variants (focus `()`) and single-field
//! tuple variants (focus the field). Variants with several fields have no
//! payload that can be borrowed as one value, so they get no prism; match
//! them through the `fold` generated by `#[derive(TaggedUnion)]` instead.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Generics, Ident, Type, Variant};

use crate::naming::to_snake_case;

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(&input.ident, &input.generics, data_enum.variants.iter())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants.filter_map(generate_variant_prism).collect();
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> Option<TokenStream2> {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => Some(generate_unit_variant_prism(variant_name, &method_name)),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields
            .unnamed
            .first()
            .map(|field| generate_newtype_variant_prism(variant_name, &method_name, &field.ty)),
        Fields::Unnamed(_) | Fields::Named(_) => None,
    }
}

fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let doc = format!("A prism on the `{variant_name}` variant. The focus is `()`.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::typedomain::optics::Prism<Self, ()> + Clone {
            ::typedomain::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name => ::core::option::Option::Some(&()),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |(): ()| Self::#variant_name,
                |source: Self| match source {
                    Self::#variant_name => ::core::option::Option::Some(()),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
            )
        }
    }
}

fn generate_newtype_variant_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &Type,
) -> TokenStream2 {
    let doc = format!("A prism on the payload of the `{variant_name}` variant.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::typedomain::optics::Prism<Self, #field_type> + Clone {
            ::typedomain::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name(value) => ::core::option::Option::Some(value),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |value: #field_type| Self::#variant_name(value),
                |source: Self| match source {
                    Self::#variant_name(value) => ::core::option::Option::Some(value),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
            )
        }
    }
}
