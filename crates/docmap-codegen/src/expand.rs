mod describe;
mod mapped;
mod persist;

use crate::schema::Document;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The document being expanded
    document: &'a Document,

    /// Path prefix for docmap types
    docmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let mapped_impl = self.expand_mapped_impl();
        let describe_impl = self.expand_describe_impl();
        let persist_impl = self.expand_persist_impl();

        wrap_in_const(quote! {
            #mapped_impl
            #describe_impl
            #persist_impl
        })
    }
}

pub(super) fn document(document: &Document) -> TokenStream {
    Expand {
        document,
        docmap: quote!(_docmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use docmap as _docmap;
            #code
        };
    }
}
