use syn::parse_quote;

use crate::{parsing::MacroOptions, tokens};

/// Builds the payload-free companion enum: one bare case per original case,
/// in declaration order, with the original enum's visibility.
///
/// The companion is a plain closed enum, so every value of it names exactly
/// one known case.
pub(crate) fn companion_enum(
    vis: &syn::Visibility,
    companion_ident: &syn::Ident,
    cases: &[syn::Ident],
    options: MacroOptions,
) -> syn::ItemEnum {
    let mut item: syn::ItemEnum = parse_quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #vis enum #companion_ident {
            #(#cases),*
        }
    };

    if options.use_serde {
        let private_module = tokens::private_module();
        item.attrs.push(parse_quote!(
            #[derive(#private_module::serde::Serialize, #private_module::serde::Deserialize)]
        ));
        item.attrs
            .push(parse_quote!(#[serde(crate = "is_case::__private::serde")]));
    }

    item
}
