use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;

use super::intent::TableHeaderIntent;

/// Clickable header cell sorting its table.
pub struct TableHeaderCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeaderCellProps {
    pub id: String,
    pub table_id: String,
    pub is_default_sort: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableHeaderCellView {
    pub sort: SortDirection,
}

impl TableHeaderCellProps {
    pub fn new(id: impl Into<String>, table_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            table_id: table_id.into(),
            is_default_sort: false,
        }
    }

    pub fn default_sort(mut self) -> Self {
        self.is_default_sort = true;
        self
    }
}

impl From<Option<bool>> for SortDirection {
    fn from(is_asc: Option<bool>) -> Self {
        match is_asc {
            None => Self::Unsorted,
            Some(true) => Self::Ascending,
            Some(false) => Self::Descending,
        }
    }
}

impl WidgetBinding for TableHeaderCell {
    type OwnProps = TableHeaderCellProps;
    type StateProps = TableHeaderCellView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        TableHeaderCellView {
            sort: state
                .table_headers
                .find(&props.id)
                .and_then(|header| header.is_asc)
                .into(),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![TableHeaderIntent::add(&props.id, &props.table_id, props.is_default_sort).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![TableHeaderIntent::remove(&props.id).into()]
    }
}

impl Connected<TableHeaderCell> {
    pub fn sort(&self) {
        self.dispatch(TableHeaderIntent::sort(&self.props().id));
    }
}
