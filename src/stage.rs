//! Core normalization stage abstraction.
//!
//! A country key is produced by running raw text through a short, fixed
//! sequence of stages. Every stage is a pure `&str -> String` transform with
//! a cheap pre-check, so a pipeline over already-clean text never allocates:
//!
//! * `needs_apply(&self, text)` – fast scan. Returning `false` skips the stage
//!   and the `Cow` flows through untouched.
//! * `apply(&self, Cow<str>)` – the transform itself. Must return the input
//!   `Cow` unchanged when there is nothing to do.
//!
//! Stages are infallible: there is no input for which a country key cannot
//! be computed.

pub mod collapse_whitespace;
pub mod remove_diacritics;
pub mod replace_separators;
pub mod strip_arabic_punctuation;
pub mod trim;
pub mod upper_case;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and test failure messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    ///
    /// The default is conservative and always applies.
    #[inline]
    fn needs_apply(&self, _text: &str) -> bool {
        true
    }

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Rebuilds `text` from the chars that survive `map`, returning the original
/// `Cow` when nothing changed.
///
/// `map` returns `None` to drop a char, or `Some(c)` to emit `c`.
#[inline]
pub(crate) fn map_chars<'a>(text: Cow<'a, str>, map: impl Fn(char) -> Option<char>) -> Cow<'a, str> {
    let Some(first_change) = text
        .char_indices()
        .find(|&(_, c)| map(c) != Some(c))
        .map(|(i, _)| i)
    else {
        return text;
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first_change]);
    out.extend(text[first_change..].chars().filter_map(&map));
    Cow::Owned(out)
}
