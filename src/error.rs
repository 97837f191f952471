use thiserror::Error;

/// Errors from the fallible corners of the API: parsing region codes, locale
/// codes and caller-supplied alias resources. Table construction and lookups never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanonError {
    #[error("invalid region code `{0}`: expected exactly two ASCII letters")]
    InvalidRegionCode(String),

    #[error("unknown display locale `{0}`: expected one of eng, fra, ara")]
    UnknownLang(String),

    #[error("alias table line {line}: expected `alias = target`, got `{content}`")]
    AliasSyntax { line: usize, content: String },

    #[error("alias table line {line}: alias and target must both normalize to non-empty keys")]
    EmptyAlias { line: usize },
}
