use super::ErrorSet;

/// Options of a `#[document(...)]` attribute on a struct.
#[derive(Debug, Default)]
pub(crate) struct DocumentAttr {
    /// Class name to register the type under, `name = "app::User"`
    pub(crate) name: Option<syn::LitStr>,
}

/// Options of the `#[document(...)]` attributes on a field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// The `field` tag: the attribute is persisted
    pub(crate) field: Option<syn::Path>,

    /// Explicit storage key, `key = "..."`
    pub(crate) key: Option<syn::LitStr>,

    /// Explicit type token, `ty = "..."`
    pub(crate) ty: Option<syn::LitStr>,

    /// The field is a collection of embedded documents
    pub(crate) embed: Option<syn::Path>,

    /// Accessor method, `get = ident`
    pub(crate) get: Option<syn::Ident>,

    /// Mutator method, `set = ident`
    pub(crate) set: Option<syn::Ident>,

    /// The field is not part of the class
    pub(crate) skip: Option<syn::Path>,

    /// The field collects undeclared attributes
    pub(crate) extra: Option<syn::Path>,
}

impl DocumentAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        let mut errs = ErrorSet::new();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("document")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if result.name.is_some() {
                        errs.spanned(&meta.path, "duplicate `name` option");
                    } else {
                        result.name = Some(lit);
                    }

                    Ok(())
                } else {
                    Err(meta.error("unsupported `document` option on a struct; expected `name`"))
                }
            })?;
        }

        errs.finish()?;
        Ok(result)
    }
}

impl FieldAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        let mut errs = ErrorSet::new();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("document")) {
            attr.parse_nested_meta(|meta| {
                let path = &meta.path;

                if path.is_ident("field") {
                    set_flag(&mut result.field, path, &mut errs);
                } else if path.is_ident("embed") {
                    set_flag(&mut result.embed, path, &mut errs);
                } else if path.is_ident("skip") {
                    set_flag(&mut result.skip, path, &mut errs);
                } else if path.is_ident("extra") {
                    set_flag(&mut result.extra, path, &mut errs);
                } else if path.is_ident("key") {
                    let value = meta.value()?.parse()?;
                    set_value(&mut result.key, value, path, &mut errs);
                } else if path.is_ident("ty") {
                    let value = meta.value()?.parse()?;
                    set_value(&mut result.ty, value, path, &mut errs);
                } else if path.is_ident("get") {
                    let value = meta.value()?.parse()?;
                    set_value(&mut result.get, value, path, &mut errs);
                } else if path.is_ident("set") {
                    let value = meta.value()?.parse()?;
                    set_value(&mut result.set, value, path, &mut errs);
                } else {
                    return Err(meta.error(
                        "unsupported `document` option; expected one of \
                         `field`, `key`, `ty`, `embed`, `get`, `set`, `skip`, `extra`",
                    ));
                }

                Ok(())
            })?;
        }

        errs.finish()?;
        Ok(result)
    }
}

fn set_flag(slot: &mut Option<syn::Path>, path: &syn::Path, errs: &mut ErrorSet) {
    if slot.is_some() {
        errs.spanned(path, format!("duplicate `{}` option", option_name(path)));
    } else {
        *slot = Some(path.clone());
    }
}

fn set_value<T>(slot: &mut Option<T>, value: T, path: &syn::Path, errs: &mut ErrorSet) {
    if slot.is_some() {
        errs.spanned(path, format!("duplicate `{}` option", option_name(path)));
    } else {
        *slot = Some(value);
    }
}

fn option_name(path: &syn::Path) -> String {
    path.get_ident()
        .map(ToString::to_string)
        .unwrap_or_default()
}
