use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::Result;
use crate::export::range::DateRange;

pub mod file;
pub mod memory;
pub mod models;

pub use models::{
    AgencyChannelVisit, AgencySubmission, OnboardingStatus, PartnerSubmission, PartnerVisit,
};

/// Append-only store holding one collection per record kind. Records are
/// created once at ingestion and never mutated or deleted afterwards.
#[async_trait]
pub trait VisitStore: Send + Sync {
    async fn insert_partner(&self, record: PartnerVisit) -> Result<()>;
    async fn insert_agency(&self, record: AgencyChannelVisit) -> Result<()>;

    /// All partner visits whose visiting time falls inside `range`
    /// (inclusive), in insertion order. An unbounded range returns the
    /// whole collection. Zero matches is an empty Vec, not an error.
    async fn partners(&self, range: DateRange) -> Result<Vec<PartnerVisit>>;

    /// Agency counterpart, filtered on the record's `dateTime`.
    async fn agency_visits(&self, range: DateRange) -> Result<Vec<AgencyChannelVisit>>;

    async fn backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &Config) -> Result<Arc<dyn VisitStore>> {
        let boxed: Box<dyn VisitStore> = match config.storage_backend.as_str() {
            "memory" => Box::new(memory::MemoryStore::new()),
            "file" => Box::new(file::FileStore::new(&config.data_dir)?),
            other => {
                return Err(crate::errors::VisitError::storage_backend_not_found(
                    format!("Unknown storage backend: '{}'", other),
                ));
            }
        };

        Ok(Arc::from(boxed))
    }
}
