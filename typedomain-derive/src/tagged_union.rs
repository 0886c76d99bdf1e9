//! Implementation of the `#[derive(TaggedUnion)]` macro.
//!
//! For an enum `Name` this generates:
//!
//! - `impl TaggedUnion for Name` (the closed tag list and `tag()`);
//! - `Name::fold(self, ..)` and `Name::fold_ref(&self, ..)`, taking one
//!   handler per variant in declaration order.
//!
//! A missing handler is an argument-count error at the `fold` call site.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields, Ident, Type};

use crate::naming::{binding, snake_case_ident};

/// Main implementation of the `TaggedUnion` derive macro.
pub fn derive_tagged_union_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) if data_enum.variants.is_empty() => syn::Error::new_spanned(
            &input.ident,
            "TaggedUnion needs at least one variant",
        )
        .to_compile_error(),
        Data::Enum(data_enum) => generate(&input, data_enum),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "TaggedUnion can only be derived for enums. A struct is a single record, use #[derive(Lenses)].",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "TaggedUnion cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// One variant, flattened into what the generated code needs.
struct VariantInfo<'a> {
    ident: &'a Ident,
    handler: Ident,
    field_types: Vec<&'a Type>,
    bind_pattern: TokenStream2,
    ignore_pattern: TokenStream2,
    bindings: Vec<Ident>,
}

fn variant_info(variant: &syn::Variant) -> VariantInfo<'_> {
    let ident = &variant.ident;
    let field_types: Vec<&Type> = variant.fields.iter().map(|field| &field.ty).collect();
    let bindings: Vec<Ident> = (0..field_types.len()).map(binding).collect();

    let (bind_pattern, ignore_pattern) = match &variant.fields {
        Fields::Unit => (quote! {}, quote! {}),
        Fields::Unnamed(_) => (quote! { ( #(#bindings),* ) }, quote! { (..) }),
        Fields::Named(fields) => {
            let names = fields.named.iter().filter_map(|field| field.ident.as_ref());
            (quote! { { #(#names: #bindings),* } }, quote! { { .. } })
        }
    };

    VariantInfo {
        ident,
        handler: snake_case_ident(ident),
        field_types,
        bind_pattern,
        ignore_pattern,
        bindings,
    }
}

fn generate(input: &DeriveInput, data_enum: &DataEnum) -> TokenStream2 {
    let name = &input.ident;
    let visibility = &input.vis;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let variants: Vec<VariantInfo<'_>> = data_enum.variants.iter().map(variant_info).collect();

    let tags: Vec<String> = variants.iter().map(|variant| variant.ident.to_string()).collect();
    let variant_idents: Vec<&Ident> = variants.iter().map(|variant| variant.ident).collect();
    let handlers: Vec<&Ident> = variants.iter().map(|variant| &variant.handler).collect();
    let ignore_patterns: Vec<&TokenStream2> = variants.iter().map(|variant| &variant.ignore_pattern).collect();
    let bind_patterns: Vec<&TokenStream2> = variants.iter().map(|variant| &variant.bind_pattern).collect();
    let bindings: Vec<&Vec<Ident>> = variants.iter().map(|variant| &variant.bindings).collect();

    // Handlers are bounded parameters so closure signatures are inferred at the call site.
    let owned_handlers = variants.iter().map(|variant| {
        let handler = &variant.handler;
        let types = &variant.field_types;
        quote! { #handler: impl ::core::ops::FnOnce(#(#types),*) -> __R }
    });
    let borrowed_handlers = variants.iter().map(|variant| {
        let handler = &variant.handler;
        let types = &variant.field_types;
        quote! { #handler: impl ::core::ops::FnOnce(#(&'__fold #types),*) -> __R }
    });

    let handler_list = handlers
        .iter()
        .map(|handler| format!("`{}`", handler.to_string().trim_start_matches("r#")))
        .collect::<Vec<_>>()
        .join(", ");
    let fold_doc = format!(
        "Consumes the value, passing its payload to the handler of its variant.\n\n\
         Handlers, in variant order: {handler_list}."
    );

    quote! {
        impl #impl_generics ::typedomain::sum::TaggedUnion for #name #type_generics #where_clause {
            const TAGS: &'static [&'static str] = &[#(#tags),*];

            fn tag(&self) -> &'static str {
                match self {
                    #(Self::#variant_idents #ignore_patterns => #tags,)*
                }
            }
        }

        #[allow(dead_code, clippy::too_many_arguments)]
        impl #impl_generics #name #type_generics #where_clause {
            #[doc = #fold_doc]
            #[inline]
            #visibility fn fold<__R>(self, #(#owned_handlers),*) -> __R {
                match self {
                    #(Self::#variant_idents #bind_patterns => #handlers(#(#bindings),*),)*
                }
            }

            /// Like `fold`, passing references to the payload.
            #[inline]
            #visibility fn fold_ref<'__fold, __R>(&'__fold self, #(#borrowed_handlers),*) -> __R {
                match self {
                    #(Self::#variant_idents #bind_patterns => #handlers(#(#bindings),*),)*
                }
            }
        }
    }
}
