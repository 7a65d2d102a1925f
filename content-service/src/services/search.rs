use crate::services::singleton::ContentDocument;
use serde::{Deserialize, Serialize};

pub const MAX_SEARCH_RESULTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub label: String,
    pub href: String,
}

/// Normalizes a raw query; `None` means there is nothing to search for.
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let query = raw.unwrap_or_default().trim().to_lowercase();
    (!query.is_empty()).then_some(query)
}

/// Case-insensitive substring match of `query` (already normalized) against
/// collection names, capped at [`MAX_SEARCH_RESULTS`].
pub fn match_collections(query: &str, collections: &[ContentDocument]) -> Vec<SearchResult> {
    collections
        .iter()
        .filter_map(|item| {
            let name = item.get("name")?.as_str()?;
            if !name.to_lowercase().contains(query) {
                return None;
            }
            let slug = item.get("slug").and_then(|s| s.as_str()).unwrap_or_default();
            Some(SearchResult {
                label: name.to_string(),
                href: format!("/collections/{}", slug),
            })
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(name: &str, slug: &str) -> ContentDocument {
        match json!({ "name": name, "slug": slug }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_blank_queries_are_ignored() {
        assert_eq!(normalize_query(None), None);
        assert_eq!(normalize_query(Some("")), None);
        assert_eq!(normalize_query(Some("   ")), None);
        assert_eq!(normalize_query(Some("  BaGs ")), Some("bags".to_string()));
    }

    #[test]
    fn test_case_insensitive_match() {
        let items = vec![collection("Bags", "bags"), collection("Home", "home")];
        let results = match_collections("bags", &items);

        assert_eq!(
            results,
            vec![SearchResult {
                label: "Bags".to_string(),
                href: "/collections/bags".to_string(),
            }]
        );
    }

    #[test]
    fn test_substring_match() {
        let items = vec![
            collection("Eco Collection", "eco"),
            collection("Blu Collection", "blu"),
            collection("Kitchen", "kitchen"),
        ];
        let labels: Vec<_> = match_collections("collection", &items)
            .into_iter()
            .map(|r| r.label)
            .collect();

        assert_eq!(labels, vec!["Eco Collection", "Blu Collection"]);
    }

    #[test]
    fn test_results_capped() {
        let items: Vec<_> = (0..10)
            .map(|i| collection(&format!("Tote {}", i), &format!("tote-{}", i)))
            .collect();
        assert_eq!(match_collections("tote", &items).len(), MAX_SEARCH_RESULTS);
    }

    #[test]
    fn test_items_without_name_are_skipped() {
        let mut nameless = collection("x", "x");
        nameless.remove("name");
        assert!(match_collections("x", &[nameless]).is_empty());
    }
}
