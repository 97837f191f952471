//! Alias tables: ordered `alias -> target` pairs applied on top of the
//! locale-derived canon table.

use crate::{error::CanonError, normalizer::KeyNormalizer};
use std::{borrow::Cow, sync::LazyLock};
use tracing::warn;

static BUILTIN_SYNONYMS: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::builtin("synonyms.txt", include_str!("alias/synonyms.txt")));

static BUILTIN_ARABIC_NAMES: LazyLock<AliasTable> = LazyLock::new(|| {
    AliasTable::builtin("arabic_names.txt", include_str!("alias/arabic_names.txt"))
});

/// An ordered list of `(alias, target)` pairs. Later pairs win over earlier
/// ones when two aliases normalize to the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acronyms, legacy names and exonyms (`src/alias/synonyms.txt`).
    pub fn builtin_synonyms() -> Self {
        BUILTIN_SYNONYMS.clone()
    }

    /// Common Arabic country names (`src/alias/arabic_names.txt`).
    pub fn builtin_arabic_names() -> Self {
        BUILTIN_ARABIC_NAMES.clone()
    }

    fn builtin(resource: &'static str, source: &str) -> Self {
        Self::parse(source).unwrap_or_else(|err| {
            warn!(resource, %err, "skipping unreadable built-in alias table");
            Self::new()
        })
    }

    /// Parses a line-oriented alias resource:
    ///
    /// ```text
    /// # comment
    /// Ivory Coast = Côte d'Ivoire
    /// KSA         = Saudi Arabia   # trailing comments are fine
    /// ```
    ///
    /// Blank lines and `#` comments are skipped. Line numbers in errors are
    /// 1-based.
    pub fn parse(source: &str) -> Result<Self, CanonError> {
        let mut table = Self::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
            if content.is_empty() {
                continue;
            }

            let Some((alias, target)) = content.split_once('=') else {
                return Err(CanonError::AliasSyntax {
                    line,
                    content: content.to_string(),
                });
            };
            let (alias, target) = (alias.trim(), target.trim());
            if KeyNormalizer.normalize(alias).is_empty() || KeyNormalizer.normalize(target).is_empty() {
                return Err(CanonError::EmptyAlias { line });
            }
            table.push(alias.to_string(), target.to_string());
        }
        Ok(table)
    }

    pub fn push(
        &mut self,
        alias: impl Into<Cow<'static, str>>,
        target: impl Into<Cow<'static, str>>,
    ) {
        self.entries.push((alias.into(), target.into()));
    }

    /// Appends every pair of `other` after this table's pairs.
    pub fn extend(&mut self, other: AliasTable) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, t)| (a.as_ref(), t.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
