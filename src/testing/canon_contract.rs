use crate::canon::CanonTable;

/// Asserts the canon table invariants on any built table:
///
/// 1. every value is itself a key mapping to itself
/// 2. resolving a value, or anything that resolves, is a fixed point
/// 3. every key is already in normalized form
pub fn assert_reflexive(table: &CanonTable) {
    for (key, value) in table.iter() {
        assert_eq!(
            table.get(value),
            Some(value),
            "value {value:?} (from key {key:?}) is not reflexive"
        );

        let once = table.resolve(key);
        assert_eq!(once, value, "key {key:?} does not resolve to its value");
        assert_eq!(table.resolve(&once), once, "resolve is unstable for {key:?}");

        assert_eq!(crate::normalize(key), key, "key {key:?} is not normalized");
    }
}
