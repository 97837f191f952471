//! The country canon table and the process-wide canonicalizer.
//!
//! A [`CanonTable`] maps every known spelling of a country (region code,
//! English/French/Arabic display name, acronym, legacy name, colloquial
//! Arabic name) to one canonical key: the normalized English display name.
//!
//! ```
//! use countrycanon::canon_country;
//!
//! assert_eq!(canon_country("tn"), "TUNISIA");
//! assert_eq!(canon_country("Burma"), "MYANMAR");
//! assert_eq!(canon_country("مصر"), "EGYPT");
//! assert_eq!(canon_country("Wakanda"), "WAKANDA");
//! assert_eq!(canon_country(None), "");
//! ```

use crate::{
    alias::AliasTable,
    error::CanonError,
    lang::{CANONICAL_LANG, DEFAULT_ALIAS_LANGS, Lang},
    normalizer::KeyNormalizer,
    region::{BundledRegionNames, RegionCode, RegionNameResolver},
};
use smallvec::SmallVec;
use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};
use tracing::{debug, trace, warn};

/// Read-only `NormalizedKey -> CanonicalName` map.
///
/// Every canonical name that appears as a value is also a key mapping to
/// itself.
#[derive(Debug, Clone, Default)]
pub struct CanonTable {
    map: HashMap<String, String>,
    regions: Vec<RegionCode>,
}

impl CanonTable {
    /// Exact lookup of an already-normalized key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Normalizes `input` and looks it up. Unknown inputs come back as their
    /// normalized form.
    pub fn resolve(&self, input: &str) -> String {
        let key = KeyNormalizer.normalize(input);
        match self.map.get(key.as_ref()) {
            Some(canonical) => canonical.clone(),
            None => key.into_owned(),
        }
    }

    /// `true` when both inputs are non-empty and resolve to the same key.
    pub fn same_country(&self, a: &str, b: &str) -> bool {
        let a = self.resolve(a);
        !a.is_empty() && a == self.resolve(b)
    }

    /// Distinct canonical names, sorted.
    pub fn canonical_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .map
            .values()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort_unstable();
        names
    }

    /// Every key that resolves to the same canonical name as `name`, sorted.
    /// The canonical name itself is included.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let canonical = self.resolve(name);
        let mut keys: Vec<&str> = self
            .map
            .iter()
            .filter(|(_, v)| **v == canonical)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Region codes the resolver recognized while building, sorted.
    pub fn region_codes(&self) -> &[RegionCode] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Configures and builds a [`CanonTable`].
///
/// Defaults: bundled region names, French and Arabic display names as
/// aliases, built-in synonym and Arabic tables on.
pub struct CanonTableBuilder {
    resolver: Box<dyn RegionNameResolver>,
    alias_langs: SmallVec<[Lang; 4]>,
    builtin_synonyms: bool,
    builtin_arabic_names: bool,
    extra_aliases: AliasTable,
}

impl Default for CanonTableBuilder {
    fn default() -> Self {
        Self {
            resolver: Box::new(BundledRegionNames),
            alias_langs: SmallVec::from_slice(DEFAULT_ALIAS_LANGS),
            builtin_synonyms: true,
            builtin_arabic_names: true,
            extra_aliases: AliasTable::new(),
        }
    }
}

impl CanonTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver<R: RegionNameResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Locales whose display names are added as aliases. English is always
    /// the canonical locale and is ignored here.
    pub fn alias_langs(mut self, langs: &[Lang]) -> Self {
        self.alias_langs = langs
            .iter()
            .copied()
            .filter(|&l| l != CANONICAL_LANG)
            .collect();
        self
    }

    /// [`alias_langs`](Self::alias_langs) from a comma-separated list of
    /// ISO 639 codes, e.g. `"fr,ar"` read from a config file.
    pub fn alias_lang_codes(self, codes: &str) -> Result<Self, CanonError> {
        let langs = codes
            .split(',')
            .filter(|code| !code.trim().is_empty())
            .map(str::parse)
            .collect::<Result<SmallVec<[Lang; 4]>, _>>()?;
        Ok(self.alias_langs(&langs))
    }

    pub fn without_builtin_synonyms(mut self) -> Self {
        self.builtin_synonyms = false;
        self
    }

    pub fn without_builtin_arabic_names(mut self) -> Self {
        self.builtin_arabic_names = false;
        self
    }

    /// Applied after the built-in tables, so these win on collision.
    pub fn extra_aliases(mut self, table: AliasTable) -> Self {
        self.extra_aliases.extend(table);
        self
    }

    pub fn build(self) -> CanonTable {
        let mut map: HashMap<String, String> = HashMap::with_capacity(1024);
        let mut canonical: HashSet<String> = HashSet::with_capacity(256);
        let mut regions = Vec::with_capacity(256);
        let mut named: SmallVec<[usize; 4]> = SmallVec::from_elem(0, self.alias_langs.len());

        for code in RegionCode::all_candidates() {
            let Some(english) = self.display_name(code, CANONICAL_LANG) else {
                continue;
            };
            let canon = KeyNormalizer.normalize(&english).into_owned();
            if canon.is_empty() {
                continue;
            }
            regions.push(code);

            // A later region's canonical name always replaces an earlier
            // localized alias for the same key.
            map.insert(canon.clone(), canon.clone());
            canonical.insert(canon.clone());

            insert_alias(&mut map, &canonical, code.as_str().to_string(), &canon);
            for (idx, &lang) in self.alias_langs.iter().enumerate() {
                let Some(name) = self.display_name(code, lang) else {
                    continue;
                };
                let key = KeyNormalizer.normalize(&name).into_owned();
                if key.is_empty() || key == canon {
                    continue;
                }
                insert_alias(&mut map, &canonical, key, &canon);
                named[idx] += 1;
            }
        }

        for (lang, count) in self.alias_langs.iter().zip(&named) {
            debug!(lang = lang.name(), regions = count, "localized names added as aliases");
        }

        if regions.is_empty() {
            warn!("region name resolver recognized no region codes; canon table uses alias tables only");
        }

        let mut tables: SmallVec<[AliasTable; 3]> = SmallVec::new();
        if self.builtin_synonyms {
            tables.push(AliasTable::builtin_synonyms());
        }
        if self.builtin_arabic_names {
            tables.push(AliasTable::builtin_arabic_names());
        }
        tables.push(self.extra_aliases);

        for table in &tables {
            for (alias, target) in table.iter() {
                let key = KeyNormalizer.normalize(alias).into_owned();
                let target = KeyNormalizer.normalize(target).into_owned();
                if key.is_empty() || target.is_empty() {
                    continue;
                }
                if let Some(previous) = map.insert(key.clone(), target.clone())
                    && previous != target
                {
                    trace!(%key, %previous, %target, "alias overrides existing mapping");
                }
            }
        }

        collapse_chains(&mut map);

        debug!(
            regions = regions.len(),
            entries = map.len(),
            "built country canon table"
        );
        CanonTable { map, regions }
    }

    /// `None` when the resolver has no name or just echoes the code back.
    fn display_name(&self, code: RegionCode, lang: Lang) -> Option<String> {
        let name = self.resolver.display_name(code, lang)?;
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(code.as_str()) {
            return None;
        }
        Some(name.to_string())
    }
}

/// Localized names and codes never displace a canonical name.
fn insert_alias(
    map: &mut HashMap<String, String>,
    canonical: &HashSet<String>,
    key: String,
    target: &str,
) {
    if canonical.contains(&key) {
        trace!(%key, %target, "alias shadowed by canonical name");
        return;
    }
    map.insert(key, target.to_string());
}

/// Rewrites every value to the end of its alias chain so each value is a key
/// mapping to itself. Needed once overlays remap a key that other entries
/// already target. Targets with no entry of their own become reflexive, and a
/// cycle is pinned at the first name seen twice.
fn collapse_chains(map: &mut HashMap<String, String>) {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort_unstable();

    for key in keys {
        let Some(mut current) = map.get(&key).cloned() else {
            continue;
        };
        let mut seen: HashSet<String> = HashSet::new();
        loop {
            if !seen.insert(current.clone()) {
                trace!(%current, "alias cycle pinned to itself");
                map.insert(current.clone(), current.clone());
                break;
            }
            match map.get(&current) {
                Some(next) if *next != current => current = next.clone(),
                Some(_) => break,
                None => {
                    map.insert(current.clone(), current.clone());
                    break;
                }
            }
        }
        map.insert(key, current);
    }
}

static COUNTRY_CANON: LazyLock<CanonTable> = LazyLock::new(|| CanonTableBuilder::new().build());

/// The shared canon table, built from the bundled data on first call and
/// reused for the rest of the process. Concurrent first calls block until the
/// single construction finishes.
pub fn build_country_canon() -> &'static CanonTable {
    &COUNTRY_CANON
}

/// Canonical key for a raw country string.
///
/// `None` and `""` return `""` without building the table. Unknown inputs
/// return their normalized form, never the raw input.
pub fn canon_country<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        None | Some("") => String::new(),
        Some(text) => build_country_canon().resolve(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ARA, ENG, FRA};
    use crate::testing::canon_contract::assert_reflexive;
    use std::borrow::Cow;

    fn tiny_resolver(code: RegionCode, lang: Lang) -> Option<Cow<'static, str>> {
        let name = match (code.as_str(), lang.code()) {
            ("TN", "ENG") => "Tunisia",
            ("TN", "FRA") => "Tunisie",
            ("TN", "ARA") => "تونس",
            ("MA", "ENG") => "Morocco",
            ("MA", "FRA") => "Maroc",
            // echoes the code, like ICU does for unknown regions
            ("QQ", _) => "QQ",
            _ => return None,
        };
        Some(Cow::Borrowed(name))
    }

    fn tiny_table() -> CanonTable {
        CanonTableBuilder::new()
            .resolver(tiny_resolver)
            .without_builtin_synonyms()
            .without_builtin_arabic_names()
            .build()
    }

    #[test]
    fn region_discovery_skips_echoed_codes() {
        let table = tiny_table();
        let codes: Vec<&str> = table.region_codes().iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["MA", "TN"]);
        assert!(!table.contains_key("QQ"));
    }

    #[test]
    fn locale_names_map_to_english() {
        let table = tiny_table();
        assert_eq!(table.get("TN"), Some("TUNISIA"));
        assert_eq!(table.get("TUNISIA"), Some("TUNISIA"));
        assert_eq!(table.get("TUNISIE"), Some("TUNISIA"));
        assert_eq!(table.get("تونس"), Some("TUNISIA"));
        assert_eq!(table.get("MAROC"), Some("MOROCCO"));
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn partial_locale_coverage_is_fine() {
        // Morocco has no Arabic name in the tiny resolver.
        let table = tiny_table();
        assert_eq!(table.aliases_of("MA"), ["MA", "MAROC", "MOROCCO"]);
    }

    #[test]
    fn alias_langs_can_be_restricted() {
        let table = CanonTableBuilder::new()
            .resolver(tiny_resolver)
            .alias_langs(&[ENG, ARA])
            .without_builtin_synonyms()
            .without_builtin_arabic_names()
            .build();
        assert_eq!(table.get("تونس"), Some("TUNISIA"));
        assert_eq!(table.get("TUNISIE"), None);
    }

    #[test]
    fn alias_langs_from_config_codes() {
        let table = CanonTableBuilder::new()
            .resolver(tiny_resolver)
            .alias_lang_codes("fr, eng")
            .unwrap()
            .without_builtin_synonyms()
            .without_builtin_arabic_names()
            .build();
        assert_eq!(table.get("TUNISIE"), Some("TUNISIA"));
        assert_eq!(table.get("تونس"), None);

        let err = CanonTableBuilder::new().alias_lang_codes("fr,xx").err();
        assert_eq!(err, Some(CanonError::UnknownLang("xx".to_string())));
    }

    #[test]
    fn localized_alias_cannot_shadow_canonical_name() {
        // French "Niger" for Nigeria would collide with Niger's canonical name.
        let resolver = |code: RegionCode, lang: Lang| -> Option<Cow<'static, str>> {
            match (code.as_str(), lang) {
                ("NE", l) if l == ENG => Some(Cow::Borrowed("Niger")),
                ("NG", l) if l == ENG => Some(Cow::Borrowed("Nigeria")),
                ("NG", l) if l == FRA => Some(Cow::Borrowed("Niger")),
                _ => None,
            }
        };
        let table = CanonTableBuilder::new()
            .resolver(resolver)
            .without_builtin_synonyms()
            .without_builtin_arabic_names()
            .build();
        assert_eq!(table.get("NIGER"), Some("NIGER"));
        assert_eq!(table.get("NG"), Some("NIGERIA"));
    }

    #[test]
    fn later_canonical_name_replaces_earlier_alias() {
        // AA's French name equals ZZ's English name.
        let resolver = |code: RegionCode, lang: Lang| -> Option<Cow<'static, str>> {
            match (code.as_str(), lang) {
                ("AA", l) if l == ENG => Some(Cow::Borrowed("Alpha")),
                ("AA", l) if l == FRA => Some(Cow::Borrowed("Zulu")),
                ("ZZ", l) if l == ENG => Some(Cow::Borrowed("Zulu")),
                _ => None,
            }
        };
        let table = CanonTableBuilder::new()
            .resolver(resolver)
            .without_builtin_synonyms()
            .without_builtin_arabic_names()
            .build();
        assert_eq!(table.get("ZULU"), Some("ZULU"));
        assert_eq!(table.get("AA"), Some("ALPHA"));
    }

    #[test]
    fn extra_aliases_override_builtins() {
        let mut extra = AliasTable::new();
        extra.push("UK", "Ukraine");
        let table = CanonTableBuilder::new().extra_aliases(extra).build();
        assert_eq!(table.resolve("uk"), "UKRAINE");
        assert_eq!(table.resolve("Great Britain"), "UNITED KINGDOM");
    }

    #[test]
    fn alias_targets_missing_from_resolver_become_reflexive() {
        let mut extra = AliasTable::new();
        extra.push("Narnia Kingdom", "Narnia");
        let table = tiny_table_with(extra);
        assert_eq!(table.get("NARNIA KINGDOM"), Some("NARNIA"));
        assert_eq!(table.get("NARNIA"), Some("NARNIA"));
    }

    fn tiny_table_with(extra: AliasTable) -> CanonTable {
        CanonTableBuilder::new()
            .resolver(tiny_resolver)
            .without_builtin_synonyms()
            .without_builtin_arabic_names()
            .extra_aliases(extra)
            .build()
    }

    #[test]
    fn same_country_across_spellings() {
        let table = tiny_table();
        assert!(table.same_country("tn", "Tunisie"));
        assert!(table.same_country(" تونس ", "TUNISIA"));
        assert!(!table.same_country("TN", "MA"));
        assert!(!table.same_country("", ""));
    }

    #[test]
    fn canonical_names_are_sorted_and_distinct() {
        let table = tiny_table();
        assert_eq!(table.canonical_names(), ["MOROCCO", "TUNISIA"]);
    }

    #[test]
    fn remapping_a_canonical_name_carries_its_aliases_along() {
        let mut extra = AliasTable::new();
        extra.push("Congo", "Congo, Democratic Republic of");
        let table = CanonTableBuilder::new().extra_aliases(extra).build();

        let congo = table.resolve("CG");
        assert_eq!(congo, "CONGO DEMOCRATIC REPUBLIC OF");
        assert_eq!(table.resolve(&congo), congo);
        assert_eq!(table.resolve("Congo-Brazzaville"), congo);
        assert_reflexive(&table);
    }

    #[test]
    fn alias_target_given_as_code_follows_the_code() {
        let mut extra = AliasTable::new();
        extra.push("Tunisian Republic", "TN");
        let table = tiny_table_with(extra);

        assert_eq!(table.resolve("Tunisian Republic"), "TUNISIA");
        assert_eq!(table.get("TN"), Some("TUNISIA"));
        assert_reflexive(&table);
    }

    #[test]
    fn resolver_name_overridden_by_builtin_synonym() {
        // CLDR spells TR as "Türkiye"; the synonym table folds it into "Turkey".
        let cldr = |code: RegionCode, lang: Lang| -> Option<Cow<'static, str>> {
            if code.as_str() == "TR" && lang == ENG {
                return Some(Cow::Borrowed("Türkiye"));
            }
            BundledRegionNames.display_name(code, lang)
        };
        let table = CanonTableBuilder::new().resolver(cldr).build();

        assert_eq!(table.resolve("TR"), "TURKEY");
        assert_eq!(table.resolve("Türkiye"), "TURKEY");
        assert_eq!(table.resolve("Turquie"), "TURKEY");
        assert_eq!(table.resolve("TURKEY"), "TURKEY");
        assert_reflexive(&table);
    }

    #[test]
    fn alias_cycles_settle_on_one_name() {
        let mut extra = AliasTable::new();
        extra.push("Tunisia", "Morocco");
        extra.push("Morocco", "Tunisia");
        let table = tiny_table_with(extra);

        assert!(table.same_country("TN", "MA"));
        assert!(table.same_country("Tunisie", "Maroc"));
        assert_reflexive(&table);
    }

    #[test]
    fn tiny_tables_hold_the_table_contract() {
        assert_reflexive(&tiny_table());

        let mut extra = AliasTable::new();
        extra.push("Narnia Kingdom", "Narnia");
        assert_reflexive(&tiny_table_with(extra));
    }

    #[test]
    fn canon_country_empty_inputs() {
        assert_eq!(canon_country(""), "");
        assert_eq!(canon_country(None), "");
        assert_eq!(canon_country("   "), "");
    }
}
