use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub per_page: PerPageConfig,
    #[serde(default)]
    pub select: SelectConfig,
}

/// Store behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Emit a trace event for every dispatched action (default: true).
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,
}

/// Defaults for per-page selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerPageConfig {
    /// Page sizes offered to the user (default: 10, 20, 50, 100).
    #[serde(default = "default_per_page_choices")]
    pub choices: Vec<u32>,
    /// Index into `choices` selected on mount (default: 0).
    #[serde(default)]
    pub initial_position: usize,
}

/// Defaults for select widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectConfig {
    /// Text shown while nothing is selected (default: "Select an option").
    #[serde(default = "default_select_placeholder")]
    pub placeholder: String,
}

fn default_log_actions() -> bool {
    true
}

fn default_per_page_choices() -> Vec<u32> {
    vec![10, 20, 50, 100]
}

fn default_select_placeholder() -> String {
    "Select an option".to_string()
}

/// Page size at `position` in `choices`, if in range.
pub(crate) fn choice_at(choices: &[u32], position: usize) -> Option<u32> {
    choices.get(position).copied()
}

impl PerPageConfig {
    /// Page size selected on mount, if `initial_position` is in range.
    pub fn initial_per_page(&self) -> Option<u32> {
        choice_at(&self.choices, self.initial_position)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_actions: default_log_actions(),
        }
    }
}

impl Default for PerPageConfig {
    fn default() -> Self {
        Self {
            choices: default_per_page_choices(),
            initial_position: 0,
        }
    }
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: default_select_placeholder(),
        }
    }
}
