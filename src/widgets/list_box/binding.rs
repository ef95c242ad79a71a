use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::config::SelectConfig;
use crate::store::AppState;
use crate::widgets::dropdown::DropdownIntent;

use super::intent::ListBoxIntent;

/// Option offered by a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub value: String,
    /// Shown instead of `value` when set.
    pub display_value: Option<String>,
    /// Selected when the select mounts.
    pub selected: bool,
}

impl SelectItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_value: None,
            selected: false,
        }
    }

    pub fn with_display_value(mut self, display_value: impl Into<String>) -> Self {
        self.display_value = Some(display_value.into());
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn display(&self) -> &str {
        self.display_value.as_deref().unwrap_or(&self.value)
    }
}

/// Select allowing one value, backed by a list box and a dropdown sharing its id.
///
/// Hook `on_change` to be told about the newly selected value.
pub struct SingleSelect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelectProps {
    pub id: String,
    pub items: Vec<SelectItem>,
    pub placeholder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelectView {
    /// First selected value, `None` while nothing is selected.
    pub selected: Option<String>,
}

impl SingleSelectProps {
    pub fn new(id: impl Into<String>, items: Vec<SelectItem>) -> Self {
        Self::from_config(id, items, &SelectConfig::default())
    }

    pub fn from_config(id: impl Into<String>, items: Vec<SelectItem>, config: &SelectConfig) -> Self {
        Self {
            id: id.into(),
            items,
            placeholder: config.placeholder.clone(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl WidgetBinding for SingleSelect {
    type OwnProps = SingleSelectProps;
    type StateProps = SingleSelectView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        SingleSelectView {
            selected: state
                .list_boxes
                .find(&props.id)
                .and_then(|list_box| list_box.selected.first().cloned()),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        let selected = props
            .items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.value.clone())
            .collect();

        vec![
            ListBoxIntent::add(&props.id, selected, false).into(),
            DropdownIntent::add(&props.id).into(),
        ]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![
            ListBoxIntent::remove(&props.id).into(),
            DropdownIntent::remove(&props.id).into(),
        ]
    }
}

impl Connected<SingleSelect> {
    /// Select `value` and close the dropdown.
    pub fn select(&self, value: impl Into<String>) {
        let id = &self.props().id;
        self.dispatch_all([
            Action::from(ListBoxIntent::select(id, value)),
            Action::from(DropdownIntent::close(id)),
        ]);
    }

    /// Text of the toggle button: the selected item, else the placeholder.
    pub fn display_text(&self) -> &str {
        let props = self.props();
        self.view()
            .selected
            .as_deref()
            .and_then(|selected| props.items.iter().find(|item| item.value == selected))
            .map(SelectItem::display)
            .unwrap_or(props.placeholder.as_str())
    }
}
