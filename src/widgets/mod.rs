//! Widget families.
//!
//! Each family follows the same layout:
//! - `state.rs` - Per-widget record and the slice type
//! - `intent.rs` - Closed set of actions with their action creators
//! - `reducer.rs` - Slice transitions (pure, no side effects)
//! - `binding.rs` - Selector, mount/unmount actions and user handlers

pub mod action_bar;
pub mod date_picker;
pub mod dropdown;
pub mod filter;
pub mod input;
pub mod list_box;
pub mod loading;
pub mod pagination;
pub mod per_page;
pub mod table_header;
pub mod table_row;
