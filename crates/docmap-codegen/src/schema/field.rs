use super::{ErrorSet, FieldAttr};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Attribute name, the identifier without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// True if the field is declared `pub`
    pub(crate) public: bool,

    /// `#[document(...)]` options
    pub(crate) attr: FieldAttr,

    /// Element type of an `embed` field
    pub(crate) element: Option<syn::Type>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "document fields must be named"));
        };

        let attr = FieldAttr::from_ast(&field.attrs)?;
        let mut errs = ErrorSet::new();

        if let Some(skip) = &attr.skip {
            if attr.field.is_some()
                || attr.key.is_some()
                || attr.ty.is_some()
                || attr.embed.is_some()
                || attr.get.is_some()
                || attr.set.is_some()
                || attr.extra.is_some()
            {
                errs.spanned(skip, "`skip` cannot be combined with other options");
            }
        }

        if let Some(extra) = &attr.extra {
            if attr.field.is_some()
                || attr.key.is_some()
                || attr.ty.is_some()
                || attr.embed.is_some()
                || attr.get.is_some()
                || attr.set.is_some()
            {
                errs.spanned(extra, "`extra` cannot be combined with other options");
            }
        }

        if let (Some(key), None) = (&attr.key, &attr.field) {
            errs.spanned(key, "`key` requires the `field` option");
        }

        if let Some(key) = &attr.key {
            if key.value().is_empty() {
                errs.spanned(key, "storage key cannot be empty");
            }
        }

        let mut element = None;

        if let Some(embed) = &attr.embed {
            match vec_element(&field.ty) {
                Some(ty) => element = Some(ty.clone()),
                None => errs.spanned(embed, "`embed` requires a `Vec<T>` or `Option<Vec<T>>` field"),
            }

            if let Some(ty) = &attr.ty {
                if ty.value() != "array" {
                    errs.spanned(ty, "`embed` fields have type `array`");
                }
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            public: matches!(field.vis, syn::Visibility::Public(_)),
            attr,
            element,
        })
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.attr.skip.is_some()
    }

    pub(crate) fn is_extra(&self) -> bool {
        self.attr.extra.is_some()
    }
}

/// Returns `T` for `Vec<T>` and `Option<Vec<T>>`.
fn vec_element(ty: &syn::Type) -> Option<&syn::Type> {
    let inner = generic_arg(ty, "Option").unwrap_or(ty);
    generic_arg(inner, "Vec")
}

fn generic_arg<'a>(ty: &'a syn::Type, wrapper: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;

    if segment.ident != wrapper {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first()? {
        syn::GenericArgument::Type(ty) if args.args.len() == 1 => Some(ty),
        _ => None,
    }
}
