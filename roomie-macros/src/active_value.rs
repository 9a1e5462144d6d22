use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Emits `impl IntoActiveValue<T> for T` so enum columns can be used in
/// `DeriveIntoActiveModel` insert shapes.
pub(crate) fn derive_into_active_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    TokenStream::from(quote! {
        impl #impl_generics sea_orm::IntoActiveValue<#name #ty_generics> for #name #ty_generics #where_clause {
            fn into_active_value(self) -> sea_orm::ActiveValue<#name #ty_generics> {
                sea_orm::ActiveValue::Set(self)
            }
        }
    })
}
