//! Keyed slice registry.
//!
//! A slice is the portion of shared state owned by one widget family: an
//! ordered collection of per-widget records keyed by the widget identifier.
//! Collections are immutable values with shared structure, so a transition
//! that changes nothing hands back the very same collection and consumers
//! can detect change with [`SliceCollection::ptr_eq`].

mod collection;
mod record;

pub use collection::SliceCollection;
pub use record::SliceRecord;
