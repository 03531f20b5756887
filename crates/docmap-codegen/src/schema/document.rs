use super::{DocumentAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Document {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Struct-level options
    pub(crate) attr: DocumentAttr,

    /// Fields that are attributes of the class, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Field collecting undeclared attributes
    pub(crate) extra: Option<syn::Ident>,
}

impl Document {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "document fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "generic documents are not supported",
            ));
        }

        let attr = DocumentAttr::from_ast(&ast.attrs)?;

        let mut errs = ErrorSet::new();
        let mut fields = vec![];
        let mut extra: Option<syn::Ident> = None;

        for node in &node.named {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if field.is_skipped() {
                continue;
            }

            if field.is_extra() {
                if extra.is_some() {
                    errs.spanned(node, "only one field can be marked `extra`");
                } else {
                    extra = Some(field.ident);
                }

                continue;
            }

            fields.push(field);
        }

        errs.finish()?;

        Ok(Self {
            ident: ast.ident.clone(),
            attr,
            fields,
            extra,
        })
    }
}
