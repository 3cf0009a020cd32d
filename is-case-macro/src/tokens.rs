use syn::parse_quote;

pub(crate) fn private_module() -> syn::Path {
    parse_quote!(::is_case::__private)
}

pub(crate) fn trait_path() -> syn::Path {
    parse_quote!(::is_case::CaseComparable)
}

pub(crate) fn companion_ident(enum_ident: &syn::Ident) -> syn::Ident {
    quote::format_ident!("{enum_ident}Companion")
}
