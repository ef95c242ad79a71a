use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;
use crate::widgets::action_bar::{ActionBarIntent, ActionOption};

use super::intent::TableRowIntent;

/// Row of a table, optionally selectable and collapsible.
pub struct TableRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapsibleRow {
    pub expand_on_mount: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRowProps {
    pub id: String,
    pub table_id: String,
    /// Actions pushed to the table's action bar when the row is selected.
    pub actions: Vec<ActionOption>,
    pub is_multiselect: bool,
    pub collapsible: Option<CollapsibleRow>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableRowView {
    pub selected: bool,
    pub opened: bool,
}

impl TableRowProps {
    pub fn new(id: impl Into<String>, table_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            table_id: table_id.into(),
            actions: Vec::new(),
            is_multiselect: false,
            collapsible: None,
            disabled: false,
        }
    }

    pub fn with_actions(mut self, actions: Vec<ActionOption>) -> Self {
        self.actions = actions;
        self
    }

    pub fn multiselect(mut self) -> Self {
        self.is_multiselect = true;
        self
    }

    pub fn collapsible(mut self, expand_on_mount: bool) -> Self {
        self.collapsible = Some(CollapsibleRow { expand_on_mount });
        self
    }

    fn expands_on_mount(&self) -> bool {
        self.collapsible.is_some_and(|c| c.expand_on_mount)
    }
}

impl WidgetBinding for TableRow {
    type OwnProps = TableRowProps;
    type StateProps = TableRowView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        state
            .table_rows
            .find(&props.id)
            .map(|row| TableRowView {
                selected: row.selected,
                opened: row.opened,
            })
            .unwrap_or_default()
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        let mut actions = vec![TableRowIntent::add(&props.id, &props.table_id).into()];
        if props.expands_on_mount() {
            actions.push(TableRowIntent::toggle_collapsible(&props.id, Some(true)).into());
        }
        actions
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![TableRowIntent::remove(&props.id).into()]
    }

    /// A row that becomes collapsible after mount still honours
    /// `expand_on_mount`.
    fn update_actions(previous: &Self::OwnProps, next: &Self::OwnProps) -> Vec<Action> {
        if previous.collapsible.is_none() && next.expands_on_mount() {
            vec![TableRowIntent::toggle_collapsible(&next.id, Some(true)).into()]
        } else {
            Vec::new()
        }
    }
}

impl Connected<TableRow> {
    /// Row clicked; `multi_key` is the platform multi-select modifier.
    ///
    /// Rows with actions publish them to the table's action bar before being
    /// selected. Collapsible rows flip their detail row.
    pub fn click(&self, multi_key: bool) {
        let props = self.props();
        let mut actions: Vec<Action> = Vec::new();

        if !props.actions.is_empty() {
            let is_multi = multi_key && props.is_multiselect;
            actions.push(ActionBarIntent::add_actions(&props.table_id, props.actions.clone()).into());
            actions.push(TableRowIntent::select(&props.id, is_multi).into());
        }
        if props.collapsible.is_some() {
            actions.push(TableRowIntent::toggle_collapsible(&props.id, None).into());
        }

        self.dispatch_all(actions);
    }

    /// Actions the owner should trigger on double click.
    pub fn double_click_actions(&self) -> impl Iterator<Item = &ActionOption> + '_ {
        self.props()
            .actions
            .iter()
            .filter(|action| action.call_on_double_click)
    }
}
