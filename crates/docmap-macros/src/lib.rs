extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives the class descriptor of a struct so it can be registered with a
/// mapper.
///
/// The struct must implement `Debug`, `Default` and `Clone`. Field options
/// are given with `#[document(...)]`:
///
/// * `field` persists the field; `key = "..."` overrides its storage key
/// * `ty = "..."` overrides the inferred type token
/// * `embed` marks a `Vec<T>` field as a collection of embedded `T` documents
/// * `get = ident` and `set = ident` register accessor and mutator methods
/// * `skip` leaves the field out of the class
/// * `extra` marks an `IndexMap<String, Value>` field that collects
///   undeclared attributes
///
/// `#[document(name = "...")]` on the struct sets the class name.
#[proc_macro_derive(Document, attributes(document))]
pub fn derive_document(input: TokenStream) -> TokenStream {
    match docmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
