use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::model::item::{Item, ListName};
use crate::model::wishlist::Wishlist;
use crate::ops::normalize::normalize;

/// Error type for dump file I/O
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no \"wishlist\" field in file")]
    MissingWishlist,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Parse an uploaded dump and normalize each list it carries.
///
/// The whole import fails when the text is not JSON or the top-level
/// `wishlist` field is missing; nothing is applied in that case. A list
/// entry that is not an array is treated as absent. Item-level defects are
/// never errors; normalization repairs or drops them.
pub fn parse_dump(text: &str) -> Result<Vec<(ListName, Vec<Item>)>, DumpError> {
    let root: Value = serde_json::from_str(text)?;
    let wishlist = root.get("wishlist").ok_or(DumpError::MissingWishlist)?;

    let mut lists = Vec::new();
    for name in ListName::ALL {
        if let Some(raw) = wishlist.get(name.as_str()).and_then(Value::as_array) {
            lists.push((name, normalize(raw)));
        }
    }
    Ok(lists)
}

/// Parse a dump and replace exactly the lists it carries.
pub fn apply_dump(wishlist: &mut Wishlist, text: &str) -> Result<(), DumpError> {
    for (name, items) in parse_dump(text)? {
        wishlist.replace_list(name, items);
    }
    Ok(())
}

/// Read a dump file into a fresh store.
pub fn read_dump(path: &Path) -> Result<Wishlist, DumpError> {
    let text = fs::read_to_string(path).map_err(|e| DumpError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut wishlist = Wishlist::new();
    apply_dump(&mut wishlist, &text)?;
    Ok(wishlist)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Serializable copy of the three lists in dump-file shape. Item keys are
/// session-local and skipped by serialization, so they never reach the file.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub wishlist: SnapshotLists,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotLists {
    pub open: Vec<Item>,
    pub purchased: Vec<Item>,
    pub rejected: Vec<Item>,
}

/// Deep-copy the store's lists into an exportable snapshot.
pub fn export_snapshot(wishlist: &Wishlist) -> Snapshot {
    Snapshot {
        wishlist: SnapshotLists {
            open: wishlist.open.clone(),
            purchased: wishlist.purchased.clone(),
            rejected: wishlist.rejected.clone(),
        },
    }
}

/// File name for an export taken at the given time. Numeric components are
/// unpadded: `wishlist-dump-2021-3-5-7-9-4.json`.
pub fn dump_file_name(at: DateTime<Local>) -> String {
    format!("wishlist-dump-{}.json", at.format("%Y-%-m-%-d-%-H-%-M-%-S"))
}

/// Serialize the store and write it to `path` atomically.
pub fn write_dump(path: &Path, wishlist: &Wishlist) -> Result<(), DumpError> {
    let content = serde_json::to_string_pretty(&export_snapshot(wishlist))?;
    atomic_write(path, content.as_bytes())?;
    Ok(())
}

/// Write a timestamped export of the store into `dir`. Returns the path.
pub fn export_dump(dir: &Path, wishlist: &Wishlist) -> Result<PathBuf, DumpError> {
    let path = dir.join(dump_file_name(Local::now()));
    write_dump(&path, wishlist)?;
    Ok(path)
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
