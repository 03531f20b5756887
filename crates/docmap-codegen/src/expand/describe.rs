use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    pub(super) fn expand_describe_impl(&self) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &self.document.ident;

        let attributes = self.document.fields.iter().map(|field| self.expand_attribute(field));
        let methods = self
            .document
            .fields
            .iter()
            .flat_map(|field| self.expand_methods(field));
        let extra = self.expand_extra();

        let type_name = self.document.attr.name.as_ref().map(|name| {
            quote! {
                fn type_name() -> &'static str {
                    #name
                }
            }
        });

        quote! {
            impl #docmap::Describe for #ident {
                fn describe() -> #docmap::Class {
                    #docmap::Class::builder(<Self as #docmap::Describe>::type_name())
                        .constructor(#docmap::Constructor::Default(|| {
                            #docmap::Box::new(<Self as #docmap::Default>::default())
                        }))
                        #( .attribute(#attributes) )*
                        #( .method(#methods) )*
                        #extra
                        .build()
                }

                #type_name
            }
        }
    }

    fn expand_attribute(&self, field: &Field) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &field.ident;
        let name = &field.name;

        let attribute = if field.public {
            quote! {
                #docmap::Attribute::public(#name, #docmap::FieldAccess {
                    get: |this| {
                        use #docmap::Persist as _;
                        Ok(#docmap::downcast_ref::<Self>(this)?.#ident.to_value())
                    },
                    set: |this, value| {
                        #docmap::downcast_mut::<Self>(this)?.#ident = #docmap::Persist::from_value(value)?;
                        Ok(())
                    },
                })
            }
        } else {
            quote!(#docmap::Attribute::private(#name))
        };

        let annotations = self.expand_annotations(field);

        quote! {
            #attribute #( .annotate(#annotations) )*
        }
    }

    fn expand_annotations(&self, field: &Field) -> Vec<TokenStream> {
        let docmap = &self.docmap;
        let ty = &field.ty;
        let mut annotations = vec![];

        if field.attr.field.is_some() {
            annotations.push(match &field.attr.key {
                Some(key) => quote!(#docmap::Annotation::field_with_key(#key)),
                None => quote!(#docmap::Annotation::field()),
            });
        }

        annotations.push(match &field.attr.ty {
            Some(token) => quote!(#docmap::Annotation::ty(#token)),
            None => quote!(#docmap::Annotation::ty(<#ty as #docmap::Persist>::type_token())),
        });

        if let Some(element) = &field.element {
            annotations.push(quote! {
                #docmap::Annotation::embed(<#element as #docmap::Persist>::type_token())
            });
        }

        annotations
    }

    /// Accessor and mutator methods named by `get` and `set`.
    fn expand_methods(&self, field: &Field) -> Vec<TokenStream> {
        let docmap = &self.docmap;
        let mut methods = vec![];

        if let Some(get) = &field.attr.get {
            let name = get.unraw().to_string();

            methods.push(quote! {
                #docmap::Method::getter(#name, |this| {
                    use #docmap::Persist as _;
                    Ok(Self::#get(#docmap::downcast_ref::<Self>(this)?).to_value())
                })
            });
        }

        if let Some(set) = &field.attr.set {
            let name = set.unraw().to_string();

            methods.push(quote! {
                #docmap::Method::setter(#name, |this, value| {
                    Self::#set(
                        #docmap::downcast_mut::<Self>(this)?,
                        #docmap::Persist::from_value(value)?,
                    );
                    Ok(())
                })
            });
        }

        methods
    }

    fn expand_extra(&self) -> Option<TokenStream> {
        let docmap = &self.docmap;
        let ident = self.document.extra.as_ref()?;

        Some(quote! {
            .extra(#docmap::ExtraAccess {
                get: |this| Ok(#docmap::Clone::clone(&#docmap::downcast_ref::<Self>(this)?.#ident)),
                insert: |this, key, value| {
                    #docmap::downcast_mut::<Self>(this)?.#ident.insert(key, value);
                    Ok(())
                },
            })
        })
    }
}
