use proc_macro2::{TokenStream, TokenTree};

/// Options shared by the attribute entry points.
#[derive(Clone, Copy)]
pub(crate) struct MacroOptions {
    pub(crate) use_serde: bool,
}

impl MacroOptions {
    pub(crate) fn new(use_serde: bool) -> Self {
        Self { use_serde }
    }
}

/// Splits a macro invocation's input on top-level commas, keeping each
/// argument as an uninterpreted fragment. A single trailing comma is allowed.
///
/// Commas nested in groups live inside their own token tree, so a plain
/// scan over the stream only ever sees the separators.
pub(crate) fn split_arguments(input: TokenStream) -> Vec<TokenStream> {
    let mut fragments = vec![TokenStream::new()];
    for token in input {
        match &token {
            TokenTree::Punct(punct) if punct.as_char() == ',' => {
                fragments.push(TokenStream::new());
            }
            _ => fragments
                .last_mut()
                .expect("fragment list starts non-empty")
                .extend([token]),
        }
    }

    if fragments.len() > 1 && fragments.last().is_some_and(TokenStream::is_empty) {
        fragments.pop();
    }

    fragments
}
