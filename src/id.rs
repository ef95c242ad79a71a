//! Identifier helpers for widgets mounted without an explicit id.

use uuid::Uuid;

/// Generate a process-unique widget id such as `input-3f2b…`.
pub fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Id of the pagination slice paired with a per-page selector.
pub fn pagination_id_for(per_page_id: &str) -> String {
    format!("pagination-{}", per_page_id)
}
