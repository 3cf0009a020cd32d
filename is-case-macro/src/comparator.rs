use proc_macro2::TokenStream;
use quote::quote;

use crate::tokens;

/// Builds the case-identity predicate and attaches it to the original enum.
///
/// The `CaseComparable` impl carries the match: one arm per case pairing it
/// with its companion counterpart, then a default arm mapping every remaining
/// pair to `false`. The `{ .. }` rest pattern ignores whatever payload a case
/// carries. An inherent `is` with the same signature delegates to the trait
/// impl so call sites do not need the trait in scope.
pub(crate) fn comparison_impls(
    item: &syn::ItemEnum,
    companion_ident: &syn::Ident,
    cases: &[syn::Ident],
) -> TokenStream {
    let enum_ident = &item.ident;
    let vis = &item.vis;
    let trait_path = tokens::trait_path();
    let (impl_generics, type_generics, where_clause) = item.generics.split_for_impl();

    let arms = cases.iter().map(|case| {
        quote! {
            (Self::#case { .. }, #companion_ident::#case) => true,
        }
    });

    quote! {
        impl #impl_generics #enum_ident #type_generics #where_clause {
            /// Checks whether `self` holds the case named by `companion`,
            /// ignoring any payload the case carries.
            #vis fn is(&self, companion: #companion_ident) -> bool {
                <Self as #trait_path>::is(self, companion)
            }
        }

        impl #impl_generics #trait_path for #enum_ident #type_generics #where_clause {
            type Companion = #companion_ident;

            #[allow(unreachable_patterns)]
            fn is(&self, companion: #companion_ident) -> bool {
                match (self, companion) {
                    #(#arms)*
                    _ => false,
                }
            }
        }
    }
}
