use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned as _;

use crate::{companion, comparator, parsing::MacroOptions, tokens, variants};

pub(crate) fn is_case(
    attr: TokenStream,
    item: TokenStream,
    options: MacroOptions,
) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new(attr.span(), "is_case takes no arguments"));
    }

    let item: syn::Item = syn::parse2(item)?;
    let cases = variants::case_idents(&item)?;

    let syn::Item::Enum(item) = item else {
        unreachable!()
    };

    let companion_ident = tokens::companion_ident(&item.ident);
    let companion = companion::companion_enum(&item.vis, &companion_ident, &cases, options);
    let comparison = comparator::comparison_impls(&item, &companion_ident, &cases);

    Ok(quote! {
        #item

        #companion

        #comparison
    })
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use quote::quote;

    use crate::parsing::MacroOptions;

    use super::is_case;

    #[test]
    fn expansion() {
        let expanded = is_case(
            TokenStream::new(),
            quote! {
                enum Test {
                    Test1(String),
                    Test2(i32),
                }
            },
            MacroOptions::new(false),
        )
        .unwrap();

        let expected = quote! {
            enum Test {
                Test1(String),
                Test2(i32),
            }

            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            enum TestCompanion {
                Test1,
                Test2
            }

            impl Test {
                /// Checks whether `self` holds the case named by `companion`,
                /// ignoring any payload the case carries.
                fn is(&self, companion: TestCompanion) -> bool {
                    <Self as ::is_case::CaseComparable>::is(self, companion)
                }
            }

            impl ::is_case::CaseComparable for Test {
                type Companion = TestCompanion;

                #[allow(unreachable_patterns)]
                fn is(&self, companion: TestCompanion) -> bool {
                    match (self, companion) {
                        (Self::Test1 { .. }, TestCompanion::Test1) => true,
                        (Self::Test2 { .. }, TestCompanion::Test2) => true,
                        _ => false,
                    }
                }
            }
        };

        assert_eq!(expanded.to_string(), expected.to_string());
    }

    #[test]
    fn deterministic_output() {
        let item = quote! {
            enum Test {
                Test1(String),
                Test2(i32),
            }
        };

        let first = is_case(TokenStream::new(), item.clone(), MacroOptions::new(false)).unwrap();
        let second = is_case(TokenStream::new(), item, MacroOptions::new(false)).unwrap();

        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn original_members_are_untouched() {
        let item = quote! {
            #[derive(PartialEq)]
            pub enum Status {
                Ok(u16),
                Error { message: String },
            }
        };

        let expanded = is_case(TokenStream::new(), item.clone(), MacroOptions::new(false))
            .unwrap()
            .to_string();

        assert!(expanded.starts_with(&item.to_string()));
    }

    #[test]
    fn rejects_non_enums() {
        let err = is_case(
            TokenStream::new(),
            quote!(
                struct Test;
            ),
            MacroOptions::new(false),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "`#[is_case]` can only be applied to an enum");
    }

    #[test]
    fn rejects_attribute_arguments() {
        let err = is_case(
            quote!(serde),
            quote! {
                enum Test {
                    Test1(String),
                }
            },
            MacroOptions::new(false),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "is_case takes no arguments");
    }
}
