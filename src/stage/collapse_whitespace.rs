use crate::stage::Stage;
use std::borrow::Cow;

/// Collapses every run of Unicode whitespace into one ASCII space.
///
/// A lone tab or NBSP counts as a run and is rewritten to `' '`, so the
/// output only ever contains U+0020 as whitespace. Edges are not trimmed.
///
/// Zero-copy when the input already has single ASCII spaces only.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        let mut prev_ws = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if prev_ws || c != ' ' {
                    return true;
                }
                prev_ws = true;
            } else {
                prev_ws = false;
            }
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for CollapseWhitespace {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("SRI  LANKA", "SRI LANKA"), ("SRI\u{00A0}LANKA", "SRI LANKA")]
    }
}
