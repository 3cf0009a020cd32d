use syn::spanned::Spanned as _;

use crate::error::ExpandError;

/// Collects the case names of the annotated enum, in declaration order.
///
/// Payload declarations are left on the cases themselves; only the names
/// matter from here on.
pub(crate) fn case_idents(item: &syn::Item) -> syn::Result<Vec<syn::Ident>> {
    let syn::Item::Enum(item) = item else {
        return Err(ExpandError::NotAnEnum(item.span()).into());
    };

    item.variants.iter().map(case_ident).collect()
}

fn case_ident(variant: &syn::Variant) -> syn::Result<syn::Ident> {
    for attr in &variant.attrs {
        // A conditionally-compiled case may be absent from the final enum,
        // and the generated companion and match arms cannot mirror that.
        if attr.path().is_ident("cfg") || attr.path().is_ident("cfg_attr") {
            return Err(ExpandError::ConditionalCase(attr.span()).into());
        }
    }

    Ok(variant.ident.clone())
}
