mod active_value;
mod seed;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `TableInitializer` plus the seeding traits for an iden enum.
///
/// ```ignore
/// #[derive(DeriveIden, SeedableInitializer)]
/// #[seedable(meta(model = NewSiteSetting, create_table = create_table, seed_data = seed))]
/// pub enum SiteSetting { Table, Key, Value, UpdatedAt }
/// ```
#[proc_macro_derive(SeedableInitializer, attributes(seedable))]
pub fn derive_seedable_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match seed::expand_seedable(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `TableInitializer` for a table that never receives seed rows.
#[proc_macro_derive(UnseedableInitializer, attributes(unseedable))]
pub fn derive_unseedable_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match seed::expand_unseedable(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `IntoActiveValue` for enums stored through sea-orm.
#[proc_macro_derive(IntoActiveValue)]
pub fn derive_into_active_value(input: TokenStream) -> TokenStream {
    active_value::derive_into_active_value(input)
}
