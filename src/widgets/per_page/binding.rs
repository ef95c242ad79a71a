use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::config::{choice_at, PerPageConfig};
use crate::id::pagination_id_for;
use crate::store::AppState;
use crate::widgets::loading::LoadingIntent;
use crate::widgets::pagination::PaginationIntent;

use super::intent::PerPageIntent;

/// Page-size selector paired with the pagination `pagination-{id}`.
pub struct NavigationPerPage;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPerPageProps {
    pub id: String,
    pub choices: Vec<u32>,
    /// Index into `choices` registered on mount.
    pub initial_position: usize,
    pub loading_ids: Vec<String>,
    /// Page currently shown by the paired pagination, if known.
    pub current_page: Option<u32>,
    /// Page size currently applied, if known.
    pub current_per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPerPageView {
    pub current_per_page: Option<u32>,
}

impl NavigationPerPageProps {
    pub fn from_config(id: impl Into<String>, config: &PerPageConfig) -> Self {
        Self {
            id: id.into(),
            choices: config.choices.clone(),
            initial_position: config.initial_position,
            loading_ids: Vec::new(),
            current_page: None,
            current_per_page: None,
        }
    }

    pub fn with_loading_ids(mut self, loading_ids: Vec<String>) -> Self {
        self.loading_ids = loading_ids;
        self
    }

    /// Page size registered on mount, if `initial_position` is in range.
    pub fn initial_per_page(&self) -> Option<u32> {
        choice_at(&self.choices, self.initial_position)
    }

    pub fn with_position(mut self, current_page: u32, current_per_page: u32) -> Self {
        self.current_page = Some(current_page);
        self.current_per_page = Some(current_per_page);
        self
    }

    /// Page that keeps the first visible item in view once the page size
    /// becomes `per_page`: `floor(current_page * current_per_page / per_page)`.
    pub fn page_after_resize(&self, per_page: u32) -> u32 {
        match (self.current_page, self.current_per_page) {
            (Some(page), Some(current)) if page > 0 && current > 0 && per_page > 0 => {
                let first_item = u64::from(page) * u64::from(current);
                u32::try_from(first_item / u64::from(per_page)).unwrap_or(u32::MAX)
            }
            _ => 0,
        }
    }

    /// Actions issued when the user picks `per_page`, in dispatch order.
    pub fn resize_actions(&self, per_page: u32) -> Vec<Action> {
        vec![
            LoadingIntent::turn_on(self.loading_ids.clone()).into(),
            PerPageIntent::change(&self.id, per_page).into(),
            PaginationIntent::change_page(pagination_id_for(&self.id), self.page_after_resize(per_page)).into(),
        ]
    }
}

impl WidgetBinding for NavigationPerPage {
    type OwnProps = NavigationPerPageProps;
    type StateProps = NavigationPerPageView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        NavigationPerPageView {
            current_per_page: state.per_pages.find(&props.id).map(|p| p.per_page),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        props
            .initial_per_page()
            .map(|per_page| PerPageIntent::add(&props.id, per_page).into())
            .into_iter()
            .collect()
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![PerPageIntent::remove(&props.id).into()]
    }
}

impl Connected<NavigationPerPage> {
    /// User picked a page size: turn on loading, change the page size, and
    /// move the paired pagination so the same items stay in view.
    pub fn click_per_page(&self, per_page: u32) {
        self.dispatch_all(self.props().resize_actions(per_page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NavigationPerPageProps {
        NavigationPerPageProps::from_config("x", &PerPageConfig::default())
    }

    #[test]
    fn page_after_resize_keeps_first_item_visible() {
        let props = props().with_position(2, 10);
        assert_eq!(props.page_after_resize(20), 1);
        assert_eq!(props.page_after_resize(5), 4);
    }

    #[test]
    fn page_after_resize_without_position_is_zero() {
        assert_eq!(props().page_after_resize(20), 0);
        assert_eq!(props().with_position(0, 10).page_after_resize(20), 0);
    }

    #[test]
    fn page_after_resize_to_zero_is_zero() {
        assert_eq!(props().with_position(3, 10).page_after_resize(0), 0);
    }

    #[test]
    fn mount_registers_initial_choice() {
        let mut props = props();
        props.initial_position = 1;
        assert_eq!(
            NavigationPerPage::mount_actions(&props),
            vec![PerPageIntent::add("x", 20).into()]
        );
    }

    #[test]
    fn mount_with_out_of_range_position_registers_nothing() {
        let mut props = props();
        props.initial_position = 10;
        assert!(NavigationPerPage::mount_actions(&props).is_empty());
    }

    #[test]
    fn initial_per_page_agrees_with_config() {
        let config = PerPageConfig {
            choices: vec![25, 50],
            initial_position: 1,
        };
        let props = NavigationPerPageProps::from_config("x", &config);
        assert_eq!(props.initial_per_page(), config.initial_per_page());
        assert_eq!(props.initial_per_page(), Some(50));
    }
}
