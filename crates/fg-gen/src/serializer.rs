//! Fixture output. The record list is serialized in a single pass, so
//! `fields` come out as nested objects and string values keep their
//! escaping intact.

use crate::{GenError, GenErrorResult};

use fg_core::FixtureRecord;

use std::path::Path;

use log::info;

pub fn to_json(records: &[FixtureRecord], pretty: bool) -> GenErrorResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };

    rendered.map_err(|e| GenError::Serialize { source: e })
}

/// Write the fixture array to `path`, creating missing parent directories.
pub fn write_fixtures<P: AsRef<Path>>(
    path: P,
    records: &[FixtureRecord],
    pretty: bool,
) -> GenErrorResult<()> {
    let path = path.as_ref();
    let json = to_json(records, pretty)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GenError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, json).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Wrote {} fixtures to {}", records.len(), path.display());
    Ok(())
}
