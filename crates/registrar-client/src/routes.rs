//! Per-resource REST paths.
//!
//! Paths are relative to the API base URL and keep the trailing slashes
//! the server expects (`colleges/` for the collection, `colleges/{id}` for
//! an item).

use registrar_core::RecordId;

/// The three paths a registry screen talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    /// `GET` target for the full collection
    pub list: &'static str,
    /// `POST` target for new records
    pub create: &'static str,
    /// Prefix of the item path; the id is appended after a `/`
    pub item_prefix: &'static str,
}

impl Routes {
    /// List and create share `collection`; items live under `item_prefix`.
    pub const fn uniform(collection: &'static str, item_prefix: &'static str) -> Self {
        Self {
            list: collection,
            create: collection,
            item_prefix,
        }
    }

    /// `PUT`/`DELETE` target for one record.
    pub fn item(&self, id: RecordId) -> String {
        format!("{}/{}", self.item_prefix.trim_end_matches('/'), id)
    }
}
