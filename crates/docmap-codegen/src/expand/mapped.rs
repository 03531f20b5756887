use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_mapped_impl(&self) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &self.document.ident;

        quote! {
            impl #docmap::Mapped for #ident {
                fn class_name(&self) -> &str {
                    <Self as #docmap::Describe>::type_name()
                }

                fn as_any(&self) -> &dyn #docmap::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn #docmap::Any {
                    self
                }

                fn into_any(self: #docmap::Box<Self>) -> #docmap::Box<dyn #docmap::Any> {
                    self
                }

                fn clone_boxed(&self) -> #docmap::Box<dyn #docmap::Mapped> {
                    #docmap::Box::new(#docmap::Clone::clone(self))
                }
            }
        }
    }
}
