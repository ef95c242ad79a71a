//! Configuration for the store and the default widget props.

mod loader;
mod types;

pub use loader::ConfigError;
pub(crate) use types::choice_at;
pub use types::{Config, PerPageConfig, SelectConfig, StoreConfig};
