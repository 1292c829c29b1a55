use anyhow::Context;

use storefront_app::{data, table};
use storefront_catalog::Dataset;
use storefront_view::{FilterConfig, SortConfig, SortKey, prepare};

/// Render the product table.
///
/// Usage: `storefront [search] [sort-column]`. The dataset comes from the
/// embedded seed, or from a JSON file named by `STOREFRONT_DATA`. A user
/// filter can be applied with `STOREFRONT_USER=<id>`.
fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let dataset = match std::env::var("STOREFRONT_DATA") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read dataset file {path}"))?;
            Dataset::from_json_str(&json)
                .with_context(|| format!("failed to parse dataset file {path}"))?
        }
        Err(_) => data::seed(),
    };

    let products = dataset
        .enrich()
        .context("dataset failed integrity checks")?;

    let mut filter = FilterConfig::new();
    let mut sort = SortConfig::unsorted();

    let mut args = std::env::args().skip(1);
    if let Some(search) = args.next() {
        filter.search = search;
    }
    if let Some(label) = args.next() {
        sort.toggle(SortKey::from_label(&label));
    }
    if let Ok(raw) = std::env::var("STOREFRONT_USER") {
        let user = raw.parse().context("invalid STOREFRONT_USER")?;
        filter.select_user(Some(user));
    }

    let prepared = prepare(&products, &filter, &sort);
    tracing::info!(rows = prepared.len(), "rendering product table");

    print!("{}", table::render(&prepared));
    Ok(())
}
