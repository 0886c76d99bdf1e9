//! Implementation of the `#[derive(Entity)]` macro.
//!
//! The identity is located as follows.
//!
//! Structs: the field marked `#[entity(id)]`, otherwise the field named `id`.
//!
//! Enums (lifecycle states of one entity) declare the identity type with
//! `#[entity(id = Type)]`, and every variant must carry the identity:
//!
//! - the field marked `#[entity(id)]`, otherwise a field named `id`;
//! - a variant with a single unmarked tuple field delegates to that field's
//!   own `Entity::id`, so `Paid(PaidInvoice)` works when `PaidInvoice` is an
//!   entity with the same identity type.
//!
//! Unit variants carry nothing and are rejected.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DataEnum, DataStruct, DeriveInput, Field, Fields, Ident,
    Index, Type, Variant,
};

use crate::naming::binding;

/// Main implementation of the Entity derive macro.
pub fn derive_entity_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => struct_identity(&input, data_struct),
        Data::Enum(data_enum) => enum_identity(&input, data_enum),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Entity cannot be derived for unions.",
        )),
    }
    .map_or_else(syn::Error::into_compile_error, |identity| {
        generate(&input, &identity)
    });

    TokenStream::from(expanded)
}

/// Where the identity lives.
struct Identity {
    id_type: Type,
    accessor: TokenStream2,
}

fn struct_identity(input: &DeriveInput, data_struct: &DataStruct) -> syn::Result<Identity> {
    let fields: Vec<&Field> = data_struct.fields.iter().collect();
    let index = identity_field(&fields)?.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "Entity needs an identity: add a field named `id` or mark one with #[entity(id)]",
        )
    })?;

    let field = fields[index];
    let access = field.ident.as_ref().map_or_else(
        || {
            let index = Index::from(index);
            quote! { #index }
        },
        |name| quote! { #name },
    );

    Ok(Identity {
        id_type: field.ty.clone(),
        accessor: quote! { &self.#access },
    })
}

fn enum_identity(input: &DeriveInput, data_enum: &DataEnum) -> syn::Result<Identity> {
    let id_type = enum_id_type(&input.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "Entity on an enum needs the identity type: #[entity(id = Type)]",
        )
    })?;

    let mut errors: Option<syn::Error> = None;
    let mut arms = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        match variant_arm(variant) {
            Ok(arm) => arms.push(arm),
            Err(error) => match errors.as_mut() {
                Some(combined) => combined.combine(error),
                None => errors = Some(error),
            },
        }
    }
    if let Some(error) = errors {
        return Err(error);
    }

    Ok(Identity {
        id_type,
        accessor: quote! {
            match self {
                #(#arms)*
            }
        },
    })
}

fn variant_arm(variant: &Variant) -> syn::Result<TokenStream2> {
    let name = &variant.ident;
    let fields: Vec<&Field> = variant.fields.iter().collect();
    let identity = binding(0);

    match (&variant.fields, identity_field(&fields)?) {
        (Fields::Unit, _) => Err(syn::Error::new_spanned(
            variant,
            "variant must carry the identity",
        )),
        (Fields::Named(_), Some(index)) => {
            let field_name = &fields[index].ident;
            Ok(quote! { Self::#name { #field_name: #identity, .. } => #identity, })
        }
        (Fields::Unnamed(_), Some(index)) => {
            let positions = (0..fields.len()).map(|position| {
                if position == index {
                    quote! { #identity }
                } else {
                    quote! { _ }
                }
            });
            Ok(quote! { Self::#name( #(#positions),* ) => #identity, })
        }
        (Fields::Unnamed(_), None) if fields.len() == 1 => Ok(quote! {
            Self::#name(#identity) => ::typedomain::equality::Entity::id(#identity),
        }),
        (Fields::Named(_) | Fields::Unnamed(_), None) => Err(syn::Error::new_spanned(
            variant,
            "variant must carry the identity: add a field named `id`, mark one with #[entity(id)], \
             or wrap a single entity",
        )),
    }
}

/// Index of the identity field among `fields`: the marked one, else `id`.
fn identity_field(fields: &[&Field]) -> syn::Result<Option<usize>> {
    let mut marked = None;
    for (index, field) in fields.iter().enumerate() {
        if is_marked_id(&field.attrs)? {
            if marked.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked #[entity(id)]",
                ));
            }
            marked = Some(index);
        }
    }

    Ok(marked.or_else(|| {
        fields
            .iter()
            .position(|field| field.ident.as_ref().is_some_and(|name| name == "id"))
    }))
}

fn is_marked_id(attributes: &[Attribute]) -> syn::Result<bool> {
    let mut marked = false;
    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("entity")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                marked = true;
                Ok(())
            } else {
                Err(meta.error("expected #[entity(id)]"))
            }
        })?;
    }
    Ok(marked)
}

fn enum_id_type(attributes: &[Attribute]) -> syn::Result<Option<Type>> {
    let mut id_type = None;
    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("entity")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                id_type = Some(meta.value()?.parse::<Type>()?);
                Ok(())
            } else {
                Err(meta.error("expected #[entity(id = Type)]"))
            }
        })?;
    }
    Ok(id_type)
}

fn generate(input: &DeriveInput, identity: &Identity) -> TokenStream2 {
    let name: &Ident = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let Identity { id_type, accessor } = identity;

    quote! {
        impl #impl_generics ::typedomain::equality::Equality for #name #type_generics #where_clause {
            type Strategy = ::typedomain::equality::Identity;
        }

        impl #impl_generics ::typedomain::equality::Entity for #name #type_generics #where_clause {
            type Id = #id_type;

            #[inline]
            fn id(&self) -> &Self::Id {
                #accessor
            }
        }

        impl #impl_generics ::core::cmp::PartialEq for #name #type_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::typedomain::equality::Entity::id(self) == ::typedomain::equality::Entity::id(other)
            }
        }

        impl #impl_generics ::core::cmp::Eq for #name #type_generics #where_clause {}

        impl #impl_generics ::core::hash::Hash for #name #type_generics #where_clause {
            #[inline]
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                ::core::hash::Hash::hash(::typedomain::equality::Entity::id(self), state);
            }
        }
    }
}
