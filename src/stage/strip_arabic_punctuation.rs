use crate::stage::{Stage, map_chars};
use std::borrow::Cow;

/// Arabic semicolon, question mark and comma.
pub const ARABIC_PUNCTUATION: [char; 3] = ['\u{061B}', '\u{061F}', '\u{060C}'];

/// Deletes Arabic punctuation outright (no replacement space).
pub struct StripArabicPunctuation;

impl Stage for StripArabicPunctuation {
    fn name(&self) -> &'static str {
        "strip_arabic_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && text.contains(&ARABIC_PUNCTUATION[..])
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, |c| (!ARABIC_PUNCTUATION.contains(&c)).then_some(c))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripArabicPunctuation {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("مصر،", "مصر"), ("ليبيا؟", "ليبيا")]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_all_three_marks() {
        let out = StripArabicPunctuation.apply(Cow::Borrowed("مصر، تونس؛ ليبيا؟"));
        assert_eq!(out, "مصر تونس ليبيا");
    }

    #[test]
    fn latin_comma_untouched() {
        let input = "KOREA, REPUBLIC OF";
        assert!(!StripArabicPunctuation.needs_apply(input));
        let out = StripArabicPunctuation.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
