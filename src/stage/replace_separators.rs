use crate::stage::{Stage, map_chars};
use std::borrow::Cow;

/// Is `c` a separator that must become a plain space in a country key?
///
/// | Class        | Characters                          |
/// |--------------|-------------------------------------|
/// | apostrophes  | `'` `‘` `’` `ʼ` `` ` `` `´` `^` `~` |
/// | punctuation  | `.` `,` `(` `)` `/`                 |
/// | dashes       | `-` `–` `—`                         |
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\'' | '\u{2018}'
            | '\u{2019}'
            | '\u{02BC}'
            | '`'
            | '\u{00B4}'
            | '^'
            | '~'
            | '.'
            | ','
            | '('
            | ')'
            | '/'
            | '-'
            | '\u{2013}'
            | '\u{2014}'
    )
}

/// Replaces apostrophes, dots, commas, parentheses, slashes and dashes with a
/// single space each. Runs of spaces are left for [`CollapseWhitespace`].
///
/// [`CollapseWhitespace`]: crate::stage::collapse_whitespace::CollapseWhitespace
pub struct ReplaceSeparators;

impl Stage for ReplaceSeparators {
    fn name(&self) -> &'static str {
        "replace_separators"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_separator)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, |c| Some(if is_separator(c) { ' ' } else { c }))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for ReplaceSeparators {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("GUINEA-BISSAU", "GUINEA BISSAU"), ("D'IVOIRE", "D IVOIRE")]
    }
}
