use crate::mvi::Reducer;

use super::intent::TableRowIntent;
use super::state::{TableRowSlice, TableRowState};

pub struct TableRowReducer;

impl Reducer for TableRowReducer {
    type State = TableRowSlice;
    type Intent = TableRowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableRowIntent::Add { id, table_id } => state.insert(TableRowState {
                id,
                table_id,
                selected: false,
                opened: false,
            }),
            TableRowIntent::Remove { id } => state.remove(&id),
            TableRowIntent::Select { id, is_multi: true } => state.update(&id, |row| TableRowState {
                selected: !row.selected,
                ..row.clone()
            }),
            TableRowIntent::Select {
                id,
                is_multi: false,
            } => {
                let Some(table_id) = state.find(&id).map(|row| row.table_id.clone()) else {
                    return state;
                };
                state.update_where(|row| {
                    (row.table_id == table_id).then(|| TableRowState {
                        selected: row.id == id,
                        ..row.clone()
                    })
                })
            }
            TableRowIntent::DeselectAll { table_id } => state.update_where(|row| {
                (row.table_id == table_id).then(|| TableRowState {
                    selected: false,
                    ..row.clone()
                })
            }),
            TableRowIntent::ToggleCollapsible { id, opened } => state.update(&id, |row| TableRowState {
                opened: opened.unwrap_or(!row.opened),
                ..row.clone()
            }),
        }
    }
}
