use crate::mvi::Reducer;

use super::intent::TableHeaderIntent;
use super::state::{TableHeaderSlice, TableHeaderState};

pub struct TableHeaderReducer;

impl Reducer for TableHeaderReducer {
    type State = TableHeaderSlice;
    type Intent = TableHeaderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableHeaderIntent::Add {
                id,
                table_id,
                is_default,
            } => state.insert(TableHeaderState {
                id,
                table_id,
                is_asc: is_default.then_some(true),
            }),
            TableHeaderIntent::Remove { id } => state.remove(&id),
            TableHeaderIntent::Sort { id } => {
                let Some(table_id) = state.find(&id).map(|header| header.table_id.clone()) else {
                    return state;
                };
                state.update_where(|header| {
                    if header.id == id {
                        // Unsorted columns start ascending.
                        Some(TableHeaderState {
                            is_asc: Some(!header.is_asc.unwrap_or(false)),
                            ..header.clone()
                        })
                    } else if header.table_id == table_id {
                        Some(TableHeaderState {
                            is_asc: None,
                            ..header.clone()
                        })
                    } else {
                        None
                    }
                })
            }
        }
    }
}
