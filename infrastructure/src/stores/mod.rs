//! In-memory data stores.
//!
//! Each store is loaded once from a JSON file and never written back;
//! after load the snapshots are shared as `Arc<Vec<_>>` so concurrent
//! resolver calls read them without synchronization.

mod loader;

pub use loader::{load_records, read_records};

use clerk_domain::{FaqRecord, OrderRecord, ProductRecord};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The three read-only store snapshots, loaded eagerly at process start.
///
/// Construction never fails: an unavailable or malformed source degrades
/// to an empty store (with a warning) so the assistant answers "nothing
/// found" instead of refusing to start.
#[derive(Debug, Clone)]
pub struct DataStores {
    pub catalog: Arc<Vec<ProductRecord>>,
    pub orders: Arc<Vec<OrderRecord>>,
    pub faqs: Arc<Vec<FaqRecord>>,
}

impl DataStores {
    /// Load all three stores from their JSON sources.
    pub fn load(catalog: &Path, orders: &Path, faqs: &Path) -> Self {
        let stores = Self {
            catalog: Arc::new(load_records(catalog)),
            orders: Arc::new(load_records(orders)),
            faqs: Arc::new(load_records(faqs)),
        };
        info!(
            products = stores.catalog.len(),
            orders = stores.orders.len(),
            faqs = stores.faqs.len(),
            "Data stores loaded"
        );
        stores
    }

    /// Build stores directly from records (tests, embedding)
    pub fn from_records(
        catalog: Vec<ProductRecord>,
        orders: Vec<OrderRecord>,
        faqs: Vec<FaqRecord>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            orders: Arc::new(orders),
            faqs: Arc::new(faqs),
        }
    }
}
