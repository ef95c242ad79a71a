use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;

use super::intent::LoadingIntent;

/// Loading spinner/overlay.
pub struct Loading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingProps {
    pub id: String,
    /// Whether the indicator starts switched on.
    pub initially_on: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingView {
    pub is_on: bool,
}

impl LoadingProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            initially_on: false,
        }
    }
}

impl WidgetBinding for Loading {
    type OwnProps = LoadingProps;
    type StateProps = LoadingView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        LoadingView {
            is_on: state.loadings.find(&props.id).is_some_and(|l| l.is_on),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![LoadingIntent::add(&props.id, props.initially_on).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![LoadingIntent::remove(&props.id).into()]
    }
}

impl Connected<Loading> {
    /// Data arrived: switch the indicator off.
    pub fn done(&self) {
        self.dispatch(LoadingIntent::turn_off(vec![self.props().id.clone()]));
    }
}
