//! Implementation of the `#[derive(ValueObject)]` macro.
//!
//! Declares the structural strategy. Comparison itself is the type's own
//! `PartialEq`, which the `ValueObject` supertraits require to be `Eq`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

/// Main implementation of the ValueObject derive macro.
pub fn derive_value_object_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if let Data::Union(_) = input.data {
        return syn::Error::new_spanned(&input.ident, "ValueObject cannot be derived for unions.")
            .to_compile_error()
            .into();
    }

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    TokenStream::from(quote! {
        impl #impl_generics ::typedomain::equality::Equality for #name #type_generics #where_clause {
            type Strategy = ::typedomain::equality::Structural;
        }

        impl #impl_generics ::typedomain::equality::ValueObject for #name #type_generics #where_clause {}
    })
}
