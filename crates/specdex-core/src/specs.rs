//! Grouping of flat specification rows into `category → field → value`.

use crate::types::SpecificationRecord;
use std::collections::BTreeMap;

/// Field → value map for one category.
pub type SpecificationEntry = BTreeMap<String, String>;

/// Category → field → value. Ordered maps keep the serialized shape
/// independent of the order rows arrive in.
pub type GroupedSpecification = BTreeMap<String, SpecificationEntry>;

/// Group flat records by category.
///
/// Later records overwrite earlier ones with the same `(category, field)`.
#[must_use]
pub fn group_specifications<'a, I>(records: I) -> GroupedSpecification
where
    I: IntoIterator<Item = &'a SpecificationRecord>,
{
    let mut grouped = GroupedSpecification::new();
    for record in records {
        grouped
            .entry(record.category.clone())
            .or_default()
            .insert(record.field.clone(), record.value.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample() -> Vec<SpecificationRecord> {
        vec![
            SpecificationRecord::new("Network", "Technology", "GSM / HSPA / LTE / 5G"),
            SpecificationRecord::new("Display", "Type", "Super Retina XDR OLED"),
            SpecificationRecord::new("Display", "Size", "6.1 inches"),
            SpecificationRecord::new("Battery", "Type", "Li-Ion 3349 mAh"),
            SpecificationRecord::new("Misc", "Price", ""),
        ]
    }

    #[test]
    fn test_groups_by_category() {
        let grouped = group_specifications(&sample());

        assert_eq!(grouped.len(), 4);
        assert_eq!(grouped["Display"].len(), 2);
        assert_eq!(grouped["Display"]["Size"], "6.1 inches");
        assert_eq!(grouped["Battery"]["Type"], "Li-Ion 3349 mAh");
        assert_eq!(grouped["Misc"]["Price"], "");
    }

    #[test]
    fn test_top_level_keys_match_distinct_categories() {
        let records = sample();
        let grouped = group_specifications(&records);

        let expected: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
        let actual: BTreeSet<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let records = vec![
            SpecificationRecord::new("Memory", "Internal", "128GB"),
            SpecificationRecord::new("Memory", "Card slot", "No"),
            SpecificationRecord::new("Memory", "Internal", "256GB"),
            SpecificationRecord::new("Memory", "Internal", "512GB"),
        ];
        let grouped = group_specifications(&records);

        assert_eq!(grouped["Memory"]["Internal"], "512GB");
        assert_eq!(grouped["Memory"].len(), 2);
    }

    #[test]
    fn test_shape_independent_of_order_without_duplicates() {
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();

        assert_eq!(
            group_specifications(&records),
            group_specifications(&reversed)
        );
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_specifications(&Vec::<SpecificationRecord>::new());
        assert!(grouped.is_empty());
    }
}
