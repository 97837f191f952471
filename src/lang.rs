use crate::error::CanonError;
use std::str::FromStr;

/// A display locale for region names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Case-insensitive lookup by ISO 639-3 (`"fra"`) or ISO 639-1 (`"fr"`) code.
    pub fn from_code(code: &str) -> Option<Lang> {
        let upper = code.trim().to_ascii_uppercase();
        match upper.as_str() {
            "ENG" | "EN" => Some(ENG),
            "FRA" | "FR" => Some(FRA),
            "ARA" | "AR" => Some(ARA),
            _ => None,
        }
    }
}

impl FromStr for Lang {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| CanonError::UnknownLang(s.trim().to_string()))
    }
}

pub const ENG: Lang = Lang {
    code: "ENG",
    name: "English",
};
pub const FRA: Lang = Lang {
    code: "FRA",
    name: "French",
};
pub const ARA: Lang = Lang {
    code: "ARA",
    name: "Arabic",
};

/// Canonical names are always the English display names.
pub const CANONICAL_LANG: Lang = ENG;

/// Locales whose display names become aliases of the English canonical name.
pub const DEFAULT_ALIAS_LANGS: &[Lang] = &[FRA, ARA];
