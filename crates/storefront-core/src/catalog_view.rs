//! Catalog view logic: search, category filter and sort over a fetched list.
//!
//! The list page recomputes this view from scratch whenever the search
//! string, the selected category, the sort key or the source list changes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Label for records with an empty category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Sort order for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Name, A to Z.
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceLow => "Price (Low to High)",
            SortKey::PriceHigh => "Price (High to Low)",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            _ => Err(()),
        }
    }
}

/// Case-insensitive first, byte order as the tie-break so the result is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The three independent inputs of the list view.
///
/// Deserializes from the list page query string; every field is optional and
/// an unknown sort key falls back to [`SortKey::Name`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub search: String,
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_sort_key")]
    pub sort: SortKey,
}

fn lenient_sort_key<'de, D>(deserializer: D) -> Result<SortKey, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

impl CatalogQuery {
    /// The selected category, `"all"` when none is selected.
    pub fn selected_category(&self) -> &str {
        match self.category.as_deref() {
            None | Some("") => ALL_CATEGORIES,
            Some(c) => c,
        }
    }

    /// Filter and sort `items` into a new list. The source is left untouched.
    pub fn apply(&self, items: &[Product]) -> Vec<Product> {
        let needle = self.search.to_lowercase();
        let category = self.selected_category();

        let mut view: Vec<Product> = items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .filter(|item| category == ALL_CATEGORIES || item.category == category)
            .cloned()
            .collect();

        // stable, so equal keys keep insertion order
        view.sort_by(|a, b| self.sort.compare(a, b));
        view
    }
}

/// `"all"` followed by each distinct category in first-seen order.
pub fn categories(items: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        let category = if item.category.is_empty() {
            UNCATEGORIZED
        } else {
            item.category.as_str()
        };
        if !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

/// Capitalize the first character for display, e.g. `electronics` → `Electronics`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_products;

    fn names(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let query = CatalogQuery {
            search: "lap".into(),
            ..Default::default()
        };
        let items: Vec<Product> = seed_products()
            .into_iter()
            .filter(|p| p.name == "Laptop" || p.name == "Webcam")
            .collect();
        assert_eq!(names(&query.apply(&items)), vec!["Laptop"]);
    }

    #[test]
    fn search_matches_description() {
        let query = CatalogQuery {
            search: "ERGONOMIC".into(),
            ..Default::default()
        };
        let view = query.apply(&seed_products());
        assert_eq!(names(&view), vec!["Monitor Stand", "Wireless Mouse"]);
    }

    #[test]
    fn category_filter_excludes_other_categories() {
        let query = CatalogQuery {
            category: Some("accessories".into()),
            ..Default::default()
        };
        let view = query.apply(&seed_products());
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|p| p.category == "accessories"));
    }

    #[test]
    fn all_category_keeps_everything() {
        let query = CatalogQuery {
            category: Some("all".into()),
            ..Default::default()
        };
        assert_eq!(query.apply(&seed_products()).len(), 6);
    }

    #[test]
    fn sort_by_name_ascending() {
        let view = CatalogQuery::default().apply(&seed_products());
        assert_eq!(
            names(&view),
            vec![
                "Laptop",
                "Mechanical Keyboard",
                "Monitor Stand",
                "USB-C Cable",
                "Webcam",
                "Wireless Mouse"
            ]
        );
    }

    #[test]
    fn sort_price_low_is_non_decreasing() {
        let query = CatalogQuery {
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        let view = query.apply(&seed_products());
        assert!(view.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn sort_price_high_is_non_increasing() {
        let query = CatalogQuery {
            sort: SortKey::PriceHigh,
            ..Default::default()
        };
        let view = query.apply(&seed_products());
        assert!(view.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(view[0].name, "Laptop");
    }

    #[test]
    fn apply_leaves_source_untouched() {
        let items = seed_products();
        let query = CatalogQuery {
            sort: SortKey::PriceHigh,
            search: "a".into(),
            ..Default::default()
        };
        let _ = query.apply(&items);
        assert_eq!(items, seed_products());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(
            categories(&seed_products()),
            vec!["all", "electronics", "accessories"]
        );
    }

    #[test]
    fn empty_category_reads_as_uncategorized() {
        let mut items = seed_products();
        items[0].category.clear();
        assert!(categories(&items).contains(&UNCATEGORIZED.to_string()));
    }

    #[test]
    fn query_string_with_unknown_sort_falls_back_to_name() {
        let query: CatalogQuery =
            serde_json::from_str(r#"{"search": "x", "sort": "random"}"#).unwrap();
        assert_eq!(query.sort, SortKey::Name);
        assert_eq!(query.selected_category(), ALL_CATEGORIES);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("electronics"), "Electronics");
        assert_eq!(capitalize(""), "");
    }
}
