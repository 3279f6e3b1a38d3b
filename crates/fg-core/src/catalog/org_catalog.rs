//! Static, ordered list of organisations read from a JSON file.
//!
//! Lookups are 1-based: `name(1)` is the first entry in the file.

use crate::{CoreError, OrgEntry, Result as CoreErrorResult};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;

const INLINE_ORIGIN: &str = "inline catalog";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgCatalog {
    entries: Vec<OrgEntry>,
}

impl OrgCatalog {
    pub fn new(entries: Vec<OrgEntry>) -> Self {
        Self { entries }
    }

    /// Read a catalog from a JSON array of `{"name", "description"}` objects.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreErrorResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| CoreError::CatalogIo {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&contents, &path.display().to_string())
    }

    pub fn from_json_str(json: &str) -> CoreErrorResult<Self> {
        Self::parse(json, INLINE_ORIGIN)
    }

    fn parse(json: &str, origin: &str) -> CoreErrorResult<Self> {
        let entries: Vec<OrgEntry> =
            serde_json::from_str(json).map_err(|e| CoreError::CatalogParse {
                origin: origin.to_string(),
                source: e,
            })?;

        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the organisation at 1-based `org_id`
    #[track_caller]
    pub fn name(&self, org_id: i64) -> CoreErrorResult<&str> {
        self.entry(org_id).map(|entry| entry.name.as_str())
    }

    /// Description of the organisation at 1-based `org_id`
    #[track_caller]
    pub fn description(&self, org_id: i64) -> CoreErrorResult<&str> {
        self.entry(org_id).map(|entry| entry.description.as_str())
    }

    #[track_caller]
    pub fn entry(&self, org_id: i64) -> CoreErrorResult<&OrgEntry> {
        let index = self.validate_org_id(org_id)?;
        Ok(&self.entries[index])
    }

    /// Map a 1-based org id onto a vector index, or explain the valid range.
    #[track_caller]
    fn validate_org_id(&self, org_id: i64) -> CoreErrorResult<usize> {
        if org_id < 1 {
            return Err(CoreError::NonPositiveOrgId {
                org_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match usize::try_from(org_id) {
            Ok(position) if position <= self.entries.len() => Ok(position - 1),
            _ => Err(CoreError::OrgIdOutOfRange {
                org_id,
                size: self.entries.len(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
