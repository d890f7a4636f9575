//! Procedural macros for Arbiter.
//!
//! - `#[derive(Message)]` - marks a type as a valid selector input.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_macro_input, parse_quote};

/// Derive macro for implementing the `Message` marker trait.
///
/// Every type parameter of the deriving type is required to be a `Message`
/// itself, so `Wrapper<T>` is only a message when `T` is.
///
/// ```rust,ignore
/// #[derive(Debug, arbiter::Message)]
/// struct Ticket {
///     support_num: i64,
/// }
/// ```
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);

    for param in &mut input.generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::arbiter::Message));
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded: TokenStream2 = quote! {
        impl #impl_generics ::arbiter::Message for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
