//! Product catalog filtering for the shopping view.
//!
//! Filtering is category-only. The board's style tags are shown next to
//! the results but never narrow them; that gap is intentional, documented
//! behavior carried over from the observed system.

use crate::catalog::Product;

/// Category id that leaves the catalog unfiltered.
pub const ALL_CATEGORIES: &str = "all";

/// Narrow the catalog by category. `"all"` returns everything; any
/// other id keeps only exact matches. Catalog order is preserved.
pub fn by_category<'a>(products: &'a [Product], category_id: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category_id == ALL_CATEGORIES || p.category == category_id)
        .collect()
}

/// Distinct category ids in catalog order, with product counts.
/// Used for the filter row ("Fitness (3)", ...).
pub fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for p in products {
        match counts.iter_mut().find(|(c, _)| c == &p.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((p.category.clone(), 1)),
        }
    }
    counts
}

/// Rounded percent saved versus the original price. `None` when the
/// product is not discounted.
pub fn discount_percent(product: &Product) -> Option<u32> {
    let original = product.original_price?;
    if original <= 0.0 {
        return None;
    }
    Some(((original - product.price) / original * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product_catalog;

    #[test]
    fn test_all_returns_catalog_unchanged() {
        let products = product_catalog();
        let filtered = by_category(&products, ALL_CATEGORIES);
        assert_eq!(filtered.len(), products.len());
        for (got, want) in filtered.iter().zip(products.iter()) {
            assert_eq!(got.id, want.id, "order must be preserved");
        }
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let products = product_catalog();
        let fitness = by_category(&products, "fitness");
        assert!(!fitness.is_empty());
        assert!(fitness.iter().all(|p| p.category == "fitness"));

        let ids: Vec<u32> = fitness.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = products
            .iter()
            .filter(|p| p.category == "fitness")
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let products = product_catalog();
        assert!(by_category(&products, "gadgets").is_empty());
    }

    #[test]
    fn test_category_counts_sum_to_catalog() {
        let products = product_catalog();
        let counts = category_counts(&products);
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, products.len());
        assert_eq!(counts[0].0, "fitness", "catalog order");
    }

    #[test]
    fn test_discount_percent_rounding() {
        let products = product_catalog();
        let tracker = products.iter().find(|p| p.id == 1).unwrap();
        // (159.99 - 129.99) / 159.99 * 100 = 18.75... → 19
        assert_eq!(discount_percent(tracker), Some(19));

        let mat = products.iter().find(|p| p.id == 2).unwrap();
        // (65 - 48) / 65 * 100 = 26.15... → 26
        assert_eq!(discount_percent(mat), Some(26));
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let products = product_catalog();
        let backpack = products.iter().find(|p| p.id == 3).unwrap();
        assert_eq!(discount_percent(backpack), None);
    }

    #[test]
    fn test_zero_original_price_ignored() {
        let mut p = product_catalog().remove(0);
        p.original_price = Some(0.0);
        assert_eq!(discount_percent(&p), None);
    }
}
