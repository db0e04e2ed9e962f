use std::sync::RwLock;

use async_trait::async_trait;

use super::{AgencyChannelVisit, PartnerVisit, VisitStore};
use crate::errors::Result;
use crate::export::range::DateRange;

/// In-process backend for development and tests. Same semantics as the
/// file backend, minus persistence.
#[derive(Default)]
pub struct MemoryStore {
    partners: RwLock<Vec<PartnerVisit>>,
    agency: RwLock<Vec<AgencyChannelVisit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl VisitStore for MemoryStore {
    async fn insert_partner(&self, record: PartnerVisit) -> Result<()> {
        self.partners.write().unwrap().push(record);
        Ok(())
    }

    async fn insert_agency(&self, record: AgencyChannelVisit) -> Result<()> {
        self.agency.write().unwrap().push(record);
        Ok(())
    }

    async fn partners(&self, range: DateRange) -> Result<Vec<PartnerVisit>> {
        Ok(self
            .partners
            .read()
            .unwrap()
            .iter()
            .filter(|p| range.contains(p.visiting_date_time))
            .cloned()
            .collect())
    }

    async fn agency_visits(&self, range: DateRange) -> Result<Vec<AgencyChannelVisit>> {
        Ok(self
            .agency
            .read()
            .unwrap()
            .iter()
            .filter(|a| range.contains(a.date_time))
            .cloned()
            .collect())
    }

    async fn backend_name(&self) -> String {
        "memory".to_string()
    }
}
