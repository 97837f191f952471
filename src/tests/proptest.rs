mod prop_tests {
    use crate::{KeyNormalizer, build_country_canon, canon_country, normalize};
    use proptest::prelude::*;

    const LATIN: &str = "[a-zA-Zéèêëçàâôöïîüûñå'‘’ʼ`´^~.,()/\\-–— \t]{0,40}";
    const ARABIC: &str = "[ابتثجحخدذرسشصضطظعغفقكلمنهويءأإآؤئة ،؛؟]{0,30}";

    proptest! {
        #[test]
        fn normalize_idempotent_latin(s in LATIN) {
            let once = normalize(s.as_str());
            prop_assert_eq!(normalize(once.as_str()), once.clone());
            prop_assert!(KeyNormalizer.is_normalized(&once));
        }

        #[test]
        fn normalize_idempotent_arabic(s in ARABIC) {
            let once = normalize(s.as_str());
            prop_assert_eq!(normalize(once.as_str()), once);
        }

        #[test]
        fn normalized_keys_are_trimmed_and_single_spaced(s in LATIN) {
            let key = normalize(s.as_str());
            prop_assert_eq!(key.trim(), key.as_str());
            prop_assert!(!key.contains("  "));
            prop_assert!(!key.contains('\t'));
        }

        #[test]
        fn canon_country_is_stable(s in LATIN) {
            let once = canon_country(s.as_str());
            prop_assert_eq!(canon_country(once.as_str()), once);
        }

        #[test]
        fn canon_country_is_stable_arabic(s in ARABIC) {
            let once = canon_country(s.as_str());
            prop_assert_eq!(canon_country(once.as_str()), once);
        }

        #[test]
        fn canonical_names_are_fixed_points(idx in any::<prop::sample::Index>()) {
            let names = build_country_canon().canonical_names();
            let name = names[idx.index(names.len())];
            prop_assert_eq!(canon_country(name), name);
        }

        #[test]
        fn case_and_padding_do_not_matter(idx in any::<prop::sample::Index>(), pad in "[ \t]{0,3}") {
            let table = build_country_canon();
            let code = table.region_codes()[idx.index(table.region_codes().len())];
            let lower = format!("{pad}{}{pad}", code.as_str().to_ascii_lowercase());
            prop_assert_eq!(canon_country(lower.as_str()), canon_country(code.as_str()));
        }
    }
}
