use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Org ids must be positive integers")]
    NonPositiveOrgId { org_id: i64, location: ErrorLocation },

    #[error("There are only {size} organisations so pass an org_id between 1 and {size}")]
    OrgIdOutOfRange {
        org_id: i64,
        size: usize,
        location: ErrorLocation,
    },

    #[error("IO error reading catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog parse error in {origin}: {source}")]
    CatalogParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
