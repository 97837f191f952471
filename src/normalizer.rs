//! The country-key normalizer: a fixed, monomorphised chain of stages.

use crate::{
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::{
        collapse_whitespace::CollapseWhitespace, remove_diacritics::RemoveDiacritics,
        replace_separators::ReplaceSeparators, strip_arabic_punctuation::StripArabicPunctuation,
        trim::Trim, upper_case::UpperCase,
    },
};
use std::borrow::Cow;

type KeyPipeline = ChainedProcess<
    Trim,
    ChainedProcess<
        CollapseWhitespace,
        ChainedProcess<
            ReplaceSeparators,
            ChainedProcess<
                StripArabicPunctuation,
                ChainedProcess<UpperCase, ChainedProcess<Trim, ChainedProcess<RemoveDiacritics, EmptyProcess>>>,
            >,
        >,
    >,
>;

const KEY_PIPELINE: KeyPipeline = ChainedProcess {
    stage: Trim,
    previous: ChainedProcess {
        stage: CollapseWhitespace,
        previous: ChainedProcess {
            stage: ReplaceSeparators,
            previous: ChainedProcess {
                stage: StripArabicPunctuation,
                previous: ChainedProcess {
                    stage: UpperCase,
                    previous: ChainedProcess {
                        stage: Trim,
                        previous: ChainedProcess {
                            stage: RemoveDiacritics,
                            previous: EmptyProcess,
                        },
                    },
                },
            },
        },
    },
};

/// Turns any country string into a `NormalizedKey`.
///
/// Stage order:
///
/// 1. NFD + strip U+0300..=U+036F
/// 2. trim
/// 3. uppercase
/// 4. delete `؛` `؟` `،`
/// 5. apostrophes, `.` `,` `(` `)` `/`, dashes → space
/// 6. collapse whitespace runs to one space
/// 7. trim again, since step 5 can leave a separator-turned-space at an edge
///
/// The result is idempotent: normalizing a key returns the same key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyNormalizer;

impl KeyNormalizer {
    /// Zero-copy when `text` is already a normalized key.
    #[inline]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        KEY_PIPELINE.process(Cow::Borrowed(text))
    }

    #[inline]
    pub fn is_normalized(&self, text: &str) -> bool {
        matches!(self.normalize(text), Cow::Borrowed(_))
    }

    /// The same stages assembled at runtime, for callers that want to extend
    /// the pipeline (e.g. append a transliteration step).
    pub fn to_dynamic(&self) -> DynamicProcess {
        DynamicProcess::new()
            .push(RemoveDiacritics)
            .push(Trim)
            .push(UpperCase)
            .push(StripArabicPunctuation)
            .push(ReplaceSeparators)
            .push(CollapseWhitespace)
            .push(Trim)
    }
}

/// Normalize a raw country string. `None` and `""` both yield `""`.
///
/// ```
/// use countrycanon::normalize;
///
/// assert_eq!(normalize("  Saudi   Arabia  "), "SAUDI ARABIA");
/// assert_eq!(normalize("Côte d'Ivoire"), "COTE D IVOIRE");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        Some(text) => KeyNormalizer.normalize(text).into_owned(),
        None => String::new(),
    }
}
