use proc_macro2::{Span, TokenStream};
use quote::quote;

use crate::{error::ExpandError, parsing};

/// Rewrites `assert_case!(value, companion)` into a fatal assertion over the
/// case predicate.
///
/// Both arguments are spliced into the output as unevaluated fragments; when
/// and whether they run is decided by `debug_assert!`, which keeps its usual
/// contract — a terminating check when `debug_assertions` is enabled, a no-op
/// otherwise.
pub(crate) fn assert_case(input: TokenStream) -> syn::Result<TokenStream> {
    let fragments = parsing::split_arguments(input);

    if fragments.len() < 2 {
        return Err(ExpandError::NotEnoughArguments(Span::call_site()).into());
    }

    let value = fragments.first().expect("at least two fragments");
    let companion = fragments.last().expect("at least two fragments");

    for fragment in [value, companion] {
        if fragment.is_empty() {
            return Err(ExpandError::EmptyArgument(Span::call_site()).into());
        }
    }

    Ok(quote! {
        ::core::debug_assert!((#value).is(#companion))
    })
}
