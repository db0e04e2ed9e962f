use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};

use super::{AgencyChannelVisit, PartnerVisit, VisitStore};
use crate::errors::{Result, VisitError};
use crate::export::range::DateRange;

const PARTNERS_FILE: &str = "partners.json";
const AGENCY_FILE: &str = "agency_channel.json";

/// JSON-document-file backend: one file per collection, loaded into an
/// in-memory cache at startup and rewritten in full on each insert.
pub struct FileStore {
    partners_path: PathBuf,
    agency_path: PathBuf,
    partners: RwLock<Vec<PartnerVisit>>,
    agency: RwLock<Vec<AgencyChannelVisit>>,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let partners_path = data_dir.join(PARTNERS_FILE);
        let agency_path = data_dir.join(AGENCY_FILE);

        let partners: Vec<PartnerVisit> = load_collection(&partners_path)?;
        let agency: Vec<AgencyChannelVisit> = load_collection(&agency_path)?;

        info!(
            "FileStore ready: {} partner visits, {} agency visits ({})",
            partners.len(),
            agency.len(),
            data_dir.display()
        );

        Ok(FileStore {
            partners_path,
            agency_path,
            partners: RwLock::new(partners),
            agency: RwLock::new(agency),
        })
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Vec<T>>(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                error!("Failed to parse {}: {}", path.display(), e);
                Err(VisitError::serialization(format!(
                    "Failed to parse {}: {}",
                    path.display(),
                    e
                )))
            }
        },
        Err(_) => {
            // First run: seed an empty collection file.
            fs::write(path, "[]").map_err(|e| {
                VisitError::file_operation(format!(
                    "Failed to create {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Vec::new())
        }
    }
}

fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

#[async_trait]
impl VisitStore for FileStore {
    async fn insert_partner(&self, record: PartnerVisit) -> Result<()> {
        let mut guard = self.partners.write().unwrap();
        guard.push(record);
        save_collection(&self.partners_path, &guard)
    }

    async fn insert_agency(&self, record: AgencyChannelVisit) -> Result<()> {
        let mut guard = self.agency.write().unwrap();
        guard.push(record);
        save_collection(&self.agency_path, &guard)
    }

    async fn partners(&self, range: DateRange) -> Result<Vec<PartnerVisit>> {
        let guard = self.partners.read().unwrap();
        Ok(guard
            .iter()
            .filter(|p| range.contains(p.visiting_date_time))
            .cloned()
            .collect())
    }

    async fn agency_visits(&self, range: DateRange) -> Result<Vec<AgencyChannelVisit>> {
        let guard = self.agency.read().unwrap();
        Ok(guard
            .iter()
            .filter(|a| range.contains(a.date_time))
            .cloned()
            .collect())
    }

    async fn backend_name(&self) -> String {
        "file".to_string()
    }
}
