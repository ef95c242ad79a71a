use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;

use super::intent::FilterIntent;

/// Case-insensitive substring match of `filter` against any of `values`.
pub fn default_match_filter(filter: &str, values: &[&str]) -> bool {
    let filter = filter.to_lowercase();
    values
        .iter()
        .any(|value| value.to_lowercase().contains(&filter))
}

/// Text box holding a filter.
pub struct FilterBox;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBoxProps {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBoxView {
    /// Empty while unregistered.
    pub filter_text: String,
}

impl FilterBoxProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl WidgetBinding for FilterBox {
    type OwnProps = FilterBoxProps;
    type StateProps = FilterBoxView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        FilterBoxView {
            filter_text: state
                .filters
                .find(&props.id)
                .map(|filter| filter.filter_text.clone())
                .unwrap_or_default(),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![FilterIntent::add(&props.id).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![FilterIntent::remove(&props.id).into()]
    }
}

impl Connected<FilterBox> {
    pub fn change(&self, filter_text: impl Into<String>) {
        self.dispatch(FilterIntent::change(&self.props().id, filter_text));
    }
}

/// Table reading the filter box sharing its id.
///
/// The filter box registers the filter; the table only reads it.
pub struct TableWithFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWithFilterProps {
    pub id: String,
    /// Data is filtered by the server, pass it through untouched.
    pub is_server: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableWithFilterView {
    /// `None` while the filter box is not mounted.
    pub filter: Option<String>,
}

impl TableWithFilterProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_server: false,
        }
    }

    pub fn server_side(mut self) -> Self {
        self.is_server = true;
        self
    }
}

impl WidgetBinding for TableWithFilter {
    type OwnProps = TableWithFilterProps;
    type StateProps = TableWithFilterView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        TableWithFilterView {
            filter: state
                .filters
                .find(&props.id)
                .map(|filter| filter.filter_text.clone()),
        }
    }

    fn mount_actions(_props: &Self::OwnProps) -> Vec<Action> {
        Vec::new()
    }

    fn unmount_actions(_props: &Self::OwnProps) -> Vec<Action> {
        Vec::new()
    }
}

impl Connected<TableWithFilter> {
    /// Rows of `data` matching the current filter.
    ///
    /// Server-side tables and empty filters return every row.
    pub fn matching<'a, T, F>(&self, data: &'a [T], matches: F) -> Vec<&'a T>
    where
        F: Fn(&str, &T) -> bool,
    {
        match self.view().filter.as_deref() {
            Some(filter) if !filter.is_empty() && !self.props().is_server => {
                data.iter().filter(|datum| matches(filter, datum)).collect()
            }
            _ => data.iter().collect(),
        }
    }
}
