//! Library Search
//!
//! Case-insensitive token search over the catalog, grouped by brand for
//! the sidebar dropdowns.

use crate::models::CatalogItem;

/// Filter `items` by a whitespace-tokenized query (every token must appear
/// as a substring of `"brand name"`) and group the matches by brand.
///
/// Groups keep first-seen order; an empty query returns the full catalog
/// grouped. Items without a brand collect under "Other".
pub fn group_by_brand<'a>(
    items: &'a [CatalogItem],
    query: &str,
) -> Vec<(String, Vec<&'a CatalogItem>)> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut groups: Vec<(String, Vec<&CatalogItem>)> = Vec::new();
    for item in items {
        if !terms.is_empty() {
            let haystack = format!("{} {}", item.brand, item.name).to_lowercase();
            if !terms.iter().all(|t| haystack.contains(t)) {
                continue;
            }
        }

        let key = if item.brand.is_empty() {
            "Other".to_string()
        } else {
            item.brand.clone()
        };
        match groups.iter_mut().find(|(brand, _)| *brand == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(brand: &str, name: &str) -> CatalogItem {
        CatalogItem {
            brand: brand.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn all_tokens_must_match() {
        let items = vec![
            item("BrownSound", "Fuzz Master"),
            item("Clean", "Boost"),
        ];

        let groups = group_by_brand(&items, "fuzz bro");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "BrownSound");
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[0].1[0].name, "Fuzz Master");

        assert!(group_by_brand(&items, "fuzz boost").is_empty());
    }

    #[test]
    fn empty_query_returns_full_grouped_catalog() {
        let items = vec![
            item("Boss", "DS-1"),
            item("Ibanez", "TS9"),
            item("Boss", "CE-2"),
        ];

        let groups = group_by_brand(&items, "");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Boss");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Ibanez");
    }

    #[test]
    fn search_is_case_insensitive_across_brand_and_name() {
        let items = vec![item("Electro-Harmonix", "Big Muff Pi")];
        assert_eq!(group_by_brand(&items, "MUFF electro").len(), 1);
    }

    #[test]
    fn missing_brand_groups_under_other() {
        let items = vec![item("", "Mystery Box")];
        let groups = group_by_brand(&items, "");
        assert_eq!(groups[0].0, "Other");
    }
}
