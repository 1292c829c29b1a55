//! The composed product preparation pipeline.

use storefront_catalog::EnrichedProduct;

use crate::filter::{self, FilterConfig};
use crate::sort::{self, SortConfig};

/// Filter then sort the enriched products for display.
///
/// Pure over its inputs; an empty result is the "no results" condition for
/// the presentation layer.
pub fn prepare(
    products: &[EnrichedProduct],
    filter_config: &FilterConfig,
    sort_config: &SortConfig,
) -> Vec<EnrichedProduct> {
    let mut prepared = filter::apply(products, filter_config);
    sort::apply_in_place(&mut prepared, sort_config);

    tracing::debug!(
        input = products.len(),
        output = prepared.len(),
        "prepared product view"
    );

    prepared
}
