//! Sort stage: key selection, direction, and the column-toggle cycle.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use storefront_catalog::EnrichedProduct;

/// Sortable columns of the product table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Name,
    Category,
    User,
}

impl SortKey {
    /// Map a column label to its sort key.
    ///
    /// Unrecognized labels (including the table's "Product" header) fall
    /// back to [`SortKey::Id`], never an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "category" => Self::Category,
            "user" => Self::User,
            _ => Self::Id,
        }
    }

    /// Ascending comparison of two rows under this key.
    fn compare(self, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => collate(&a.name, &b.name),
            Self::Category => collate(&a.category.title, &b.category.title),
            Self::User => collate(&a.user.name, &b.user.name),
        }
    }
}

/// Case-insensitive Unicode ordering of two strings.
fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort direction. `None` leaves the ascending comparator order untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

/// The chosen sort key and direction.
///
/// `key = None` means unsorted: the stage returns its input order untouched
/// rather than imposing a default.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn ascending(key: SortKey) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Descending,
        }
    }

    /// Advance the three-way column toggle.
    ///
    /// Toggling the current column cycles unsorted → ascending → descending
    /// → unsorted; toggling a different column starts ascending on it.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key != Some(key) {
            *self = Self::ascending(key);
            return;
        }

        *self = match self.direction {
            SortDirection::None => Self::ascending(key),
            SortDirection::Ascending => Self::descending(key),
            SortDirection::Descending => Self::unsorted(),
        };
    }
}

/// Reorder a product slice in place per the config.
///
/// The sort is stable. Descending reverses the fully-sorted ascending
/// sequence as a separate step, so equal keys keep their ascending relative
/// order and then come out reversed with everything else.
pub fn apply_in_place(products: &mut [EnrichedProduct], config: &SortConfig) {
    let Some(key) = config.key else {
        return;
    };

    products.sort_by(|a, b| key.compare(a, b));

    if config.direction == SortDirection::Descending {
        products.reverse();
    }
}

/// Copying variant of [`apply_in_place`].
pub fn apply(products: &[EnrichedProduct], config: &SortConfig) -> Vec<EnrichedProduct> {
    let mut sorted = products.to_vec();
    apply_in_place(&mut sorted, config);
    sorted
}
