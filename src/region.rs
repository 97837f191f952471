//! Region codes and the locale-aware display-name capability.

pub mod data;

use crate::{
    error::CanonError,
    lang::{ARA, ENG, FRA, Lang},
};
use data::REGION_TABLE;
use std::{borrow::Cow, fmt};

/// Two ASCII letters, stored uppercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCode([u8; 2]);

impl RegionCode {
    /// Parses `"tn"`, `"TN"` or `" Tn "`.
    pub fn new(code: &str) -> Result<Self, CanonError> {
        match code.trim().as_bytes() {
            &[a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(CanonError::InvalidRegionCode(code.to_string())),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Every two-letter combination `AA..=ZZ` (676 codes), in order.
    pub fn all_candidates() -> impl Iterator<Item = RegionCode> {
        (b'A'..=b'Z').flat_map(|a| (b'A'..=b'Z').map(move |b| RegionCode([a, b])))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionCode({})", self.as_str())
    }
}

/// Resolves a region code to its display name in a given locale.
///
/// Return `None` when the code is not a recognized region or the locale has
/// no translation for it. Resolvers that follow the ICU convention of echoing
/// an unknown code back unchanged are also handled: the canon builder treats a
/// name equal to the bare code as "unrecognized".
pub trait RegionNameResolver: Send + Sync {
    fn display_name(&self, code: RegionCode, lang: Lang) -> Option<Cow<'static, str>>;
}

impl<F> RegionNameResolver for F
where
    F: Fn(RegionCode, Lang) -> Option<Cow<'static, str>> + Send + Sync,
{
    #[inline]
    fn display_name(&self, code: RegionCode, lang: Lang) -> Option<Cow<'static, str>> {
        self(code, lang)
    }
}

/// Display names compiled into the binary (see [`data`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledRegionNames;

impl BundledRegionNames {
    /// All codes the bundled dataset knows, sorted.
    pub fn codes(&self) -> Vec<RegionCode> {
        let mut codes: Vec<RegionCode> = REGION_TABLE
            .keys()
            .filter_map(|k| RegionCode::new(k).ok())
            .collect();
        codes.sort_unstable();
        codes
    }
}

impl RegionNameResolver for BundledRegionNames {
    fn display_name(&self, code: RegionCode, lang: Lang) -> Option<Cow<'static, str>> {
        let names = REGION_TABLE.get(code.as_str())?;
        let name = match lang {
            l if l == ENG => names.en,
            l if l == FRA => names.fr,
            l if l == ARA => names.ar,
            _ => return None,
        };
        Some(Cow::Borrowed(name))
    }
}

/// A resolver with no locale data at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegionNames;

impl RegionNameResolver for NoRegionNames {
    #[inline]
    fn display_name(&self, _code: RegionCode, _lang: Lang) -> Option<Cow<'static, str>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_uppercases() {
        assert_eq!(RegionCode::new("tn").unwrap().as_str(), "TN");
        assert_eq!(RegionCode::new(" Fr ").unwrap().to_string(), "FR");
    }

    #[test]
    fn rejects_bad_codes() {
        for bad in ["", "T", "TUN", "T1", "é1", "ت"] {
            assert_eq!(
                RegionCode::new(bad),
                Err(CanonError::InvalidRegionCode(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn candidates_cover_the_alphabet_grid() {
        let all: Vec<RegionCode> = RegionCode::all_candidates().collect();
        assert_eq!(all.len(), 676);
        assert_eq!(all[0].as_str(), "AA");
        assert_eq!(all[675].as_str(), "ZZ");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bundled_names_in_three_locales() {
        let fr = RegionCode::new("FR").unwrap();
        assert_eq!(BundledRegionNames.display_name(fr, ENG).as_deref(), Some("France"));
        assert_eq!(BundledRegionNames.display_name(fr, FRA).as_deref(), Some("France"));
        assert_eq!(BundledRegionNames.display_name(fr, ARA).as_deref(), Some("فرنسا"));
    }

    #[test]
    fn bundled_unknown_code_and_locale() {
        let zz = RegionCode::new("ZZ").unwrap();
        assert_eq!(BundledRegionNames.display_name(zz, ENG), None);

        let deu = Lang {
            code: "DEU",
            name: "German",
        };
        let de = RegionCode::new("DE").unwrap();
        assert_eq!(BundledRegionNames.display_name(de, deu), None);
    }

    #[test]
    fn bundled_dataset_is_complete() {
        let codes = BundledRegionNames.codes();
        assert_eq!(codes.len(), 250);
        for code in codes {
            for lang in [ENG, FRA, ARA] {
                let name = BundledRegionNames.display_name(code, lang);
                assert!(
                    name.as_deref().is_some_and(|n| !n.trim().is_empty()),
                    "{code} has no {} name",
                    lang.name()
                );
            }
        }
    }

    #[test]
    fn closures_are_resolvers() {
        let only_tn = |code: RegionCode, _lang: Lang| -> Option<Cow<'static, str>> {
            (code.as_str() == "TN").then_some(Cow::Borrowed("Tunisia"))
        };
        let tn = RegionCode::new("TN").unwrap();
        let ly = RegionCode::new("LY").unwrap();
        assert_eq!(only_tn.display_name(tn, ENG).as_deref(), Some("Tunisia"));
        assert_eq!(only_tn.display_name(ly, ENG), None);
    }
}
