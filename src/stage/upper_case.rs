use crate::stage::Stage;
use std::borrow::Cow;

/// Full Unicode uppercasing, locale-independent.
///
/// Multi-char expansions follow the Unicode special casing table
/// (`ß` → `SS`). Scripts without case (Arabic) pass through unchanged and
/// without allocation.
pub struct UpperCase;

impl Stage for UpperCase {
    fn name(&self) -> &'static str {
        "upper_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_lowercase());
        }
        text.chars().any(|c| {
            let mut upper = c.to_uppercase();
            upper.next() != Some(c) || upper.next().is_some()
        })
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_uppercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_uppercase())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for UpperCase {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("tunisia", "TUNISIA"), ("Straße", "STRASSE")]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(UpperCase.apply(Cow::Borrowed("saudi arabia")), "SAUDI ARABIA");
    }

    #[test]
    fn sharp_s_expands() {
        assert_eq!(UpperCase.apply(Cow::Borrowed("Großbritannien")), "GROSSBRITANNIEN");
    }

    #[test]
    fn already_upper_is_zero_copy() {
        let out = UpperCase.apply(Cow::Borrowed("TUNISIA"));
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn arabic_is_caseless() {
        assert!(!UpperCase.needs_apply("المغرب"));
        let out = UpperCase.apply(Cow::Borrowed("المغرب"));
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
