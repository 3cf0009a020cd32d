use proc_macro2::Span;

/// Failure kinds surfaced as compile errors at the annotated item or call site.
#[derive(Debug)]
pub(crate) enum ExpandError {
    /// The annotated item is not an enum.
    NotAnEnum(Span),
    /// A case is declared behind `#[cfg]`, so the companion cannot mirror it.
    ConditionalCase(Span),
    /// The call site supplies fewer than two arguments.
    NotEnoughArguments(Span),
    /// An argument slot at the call site contains no tokens.
    EmptyArgument(Span),
}

impl ExpandError {
    fn span(&self) -> Span {
        match self {
            Self::NotAnEnum(span)
            | Self::ConditionalCase(span)
            | Self::NotEnoughArguments(span)
            | Self::EmptyArgument(span) => *span,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotAnEnum(_) => "`#[is_case]` can only be applied to an enum",
            Self::ConditionalCase(_) => {
                "cases behind `#[cfg]` cannot be mirrored into the companion enum"
            }
            Self::NotEnoughArguments(_) => {
                "`assert_case!` expects a value and a companion case"
            }
            Self::EmptyArgument(_) => "expected an expression, found nothing",
        }
    }
}

impl From<ExpandError> for syn::Error {
    fn from(error: ExpandError) -> Self {
        syn::Error::new(error.span(), error.message())
    }
}
