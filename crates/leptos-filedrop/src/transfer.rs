//! Transfer Payload
//!
//! Abstraction over the data attached to a drag event, and the
//! shared "does this drag carry files" predicate.

use std::collections::BTreeMap;

use crate::config::DropEffect;

/// Kind string browsers advertise for file entries
pub const FILES_KIND: &str = "Files";

/// Available data kinds of a transfer payload.
///
/// Modern engines expose an ordered list. The legacy engine exposes a
/// key-indexed mapping whose iteration order is not meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferKinds {
    Ordered(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl TransferKinds {
    /// Whether any entry is the file kind
    pub fn contains_files(&self) -> bool {
        match self {
            TransferKinds::Ordered(kinds) => kinds.iter().any(|k| k == FILES_KIND),
            TransferKinds::Keyed(kinds) => kinds.values().any(|k| k == FILES_KIND),
        }
    }
}

/// Returns `true` if the payload advertises a file entry.
/// No payload at all counts as no files.
pub fn has_files(kinds: Option<&TransferKinds>) -> bool {
    kinds.is_some_and(TransferKinds::contains_files)
}

/// A drag-style event as seen by the trackers
pub trait DragPayload {
    /// File collection attached on drop
    type Files;

    /// Available kinds, `None` when the event has no transfer object
    fn kinds(&self) -> Option<TransferKinds>;

    /// Write the drop-effect hint to the transfer object, if there is one
    fn set_drop_effect(&self, effect: DropEffect);

    /// Dropped files, `None` when the event has no transfer object
    fn files(&self) -> Option<Self::Files>;

    fn has_files(&self) -> bool {
        has_files(self.kinds().as_ref())
    }
}
