use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets documents be used as field types of other documents.
    pub(super) fn expand_persist_impl(&self) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &self.document.ident;

        quote! {
            impl #docmap::Persist for #ident {
                fn type_token() -> #docmap::Cow<'static, str> {
                    #docmap::Cow::Borrowed(<Self as #docmap::Describe>::type_name())
                }

                fn to_value(&self) -> #docmap::Value {
                    #docmap::Value::Object(#docmap::Box::new(#docmap::Clone::clone(self)))
                }

                fn from_value(value: #docmap::Value) -> #docmap::Result<Self> {
                    match value {
                        #docmap::Value::Object(object) => #docmap::downcast::<Self>(object),
                        value => Err(#docmap::Error::type_conversion(
                            &value,
                            <Self as #docmap::Describe>::type_name(),
                        )),
                    }
                }
            }
        }
    }
}
