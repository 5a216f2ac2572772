use std::collections::HashMap;

use crate::model::catalog::ProductCatalog;
use crate::model::entry::ConsumptionTotals;

// Pure function over the catalog and a product-key -> daily count mapping.
// Products missing from the map count as zero; keys the catalog doesn't know
// contribute nothing. Non-negativity is enforced by the count type.
pub fn calculate_totals(
    catalog: &ProductCatalog,
    counts: &HashMap<String, u32>,
) -> ConsumptionTotals {
    let per_day: f64 = catalog
        .products()
        .iter()
        .map(|product| {
            let count = counts.get(product.key).copied().unwrap_or(0);
            f64::from(count) * f64::from(product.grams)
        })
        .sum();

    ConsumptionTotals::from_per_day(per_day)
}
