use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::id::unique_id;
use crate::store::AppState;

use super::intent::InputIntent;

/// Predicate deciding whether an input value is valid.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Validator {
    pub fn new(check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(check))
    }

    pub fn check(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator")
    }
}

pub struct Input;

#[derive(Debug, Clone)]
pub struct InputProps {
    pub id: String,
    pub default_value: String,
    pub validator: Option<Validator>,
    pub validate_on_mount: bool,
    pub validate_on_change: bool,
    pub disabled_on_mount: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub valid: bool,
    pub disabled: bool,
}

impl Default for InputView {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
            disabled: false,
        }
    }
}

impl InputProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_value: String::new(),
            validator: None,
            validate_on_mount: false,
            validate_on_change: false,
            disabled_on_mount: false,
        }
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Validate through `validator` on mount and on every change.
    pub fn validated(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self.validate_on_mount = true;
        self.validate_on_change = true;
        self
    }

    pub fn disabled_on_mount(mut self) -> Self {
        self.disabled_on_mount = true;
        self
    }

    /// Validity of `value`. Without a validator, or when `enabled` is false,
    /// every value is valid.
    fn validity(&self, value: &str, enabled: bool) -> bool {
        match &self.validator {
            Some(validator) if enabled => validator.check(value),
            _ => true,
        }
    }
}

impl Default for InputProps {
    /// Props under a freshly generated `input-…` id.
    fn default() -> Self {
        Self::new(unique_id("input"))
    }
}

impl WidgetBinding for Input {
    type OwnProps = InputProps;
    type StateProps = InputView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        state
            .inputs
            .find(&props.id)
            .map(|input| InputView {
                value: input.value.clone(),
                valid: input.valid,
                disabled: input.disabled,
            })
            .unwrap_or_default()
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        let valid = props.validity(&props.default_value, props.validate_on_mount);
        vec![InputIntent::add(&props.id, &props.default_value, valid, props.disabled_on_mount).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![InputIntent::remove(&props.id).into()]
    }
}

impl Connected<Input> {
    pub fn change(&self, value: impl Into<String>) {
        let props = self.props();
        let value = value.into();
        let valid = props.validity(&value, props.validate_on_change);
        self.dispatch(InputIntent::change(&props.id, value, valid));
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.dispatch(InputIntent::set_disabled(&self.props().id, disabled));
    }
}
