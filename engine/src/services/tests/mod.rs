//! Service-specific tests
//!
//! Each service has its own test file; shared builders live in `common`.

mod scheduler;

pub mod common {
    use std::sync::Arc;

    use crate::core::earnings::FixedEarnings;
    use crate::core::identity::RandomIdentity;
    use crate::services::lifecycle::Lifecycle;
    use crate::services::memory_store::MemoryStore;
    use crate::traits::{EarningsSource, PerformerStore};

    /// Lifecycle over a fresh memory store with pinned earnings
    pub fn fixed_lifecycle(gross: i64) -> (Lifecycle, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let lifecycle = lifecycle_over(store.clone(), Arc::new(FixedEarnings(gross)));
        (lifecycle, store)
    }

    pub fn lifecycle_over(store: Arc<dyn PerformerStore>, earnings: Arc<dyn EarningsSource>) -> Lifecycle {
        Lifecycle::new(store, earnings, Arc::new(RandomIdentity))
    }
}
