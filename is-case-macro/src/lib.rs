mod assert_case;
mod companion;
mod comparator;
mod error;
mod is_case;
mod parsing;
mod tokens;
mod variants;

#[proc_macro_attribute]
pub fn is_case(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let options = parsing::MacroOptions::new(false);
    let (Ok(tokens) | Err(tokens)) =
        is_case::is_case(attr.into(), item.into(), options).map_err(|e| e.into_compile_error());
    tokens.into()
}

#[proc_macro_attribute]
pub fn is_case_serde(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let options = parsing::MacroOptions::new(true);
    let (Ok(tokens) | Err(tokens)) =
        is_case::is_case(attr.into(), item.into(), options).map_err(|e| e.into_compile_error());
    tokens.into()
}

#[proc_macro]
pub fn assert_case(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let (Ok(tokens) | Err(tokens)) =
        assert_case::assert_case(input.into()).map_err(|e| e.into_compile_error());
    tokens.into()
}
