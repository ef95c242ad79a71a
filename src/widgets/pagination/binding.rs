use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;
use crate::widgets::loading::LoadingIntent;

use super::intent::PaginationIntent;

/// Page navigation bar.
pub struct NavigationPagination;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPaginationProps {
    pub id: String,
    /// Page count computed by the owner from item count and page size.
    pub total_pages: u32,
    /// Loading indicators turned on whenever the page changes.
    pub loading_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationPaginationView {
    /// Current page, 0 while unregistered.
    pub current_page: u32,
}

impl NavigationPaginationProps {
    pub fn new(id: impl Into<String>, total_pages: u32) -> Self {
        Self {
            id: id.into(),
            total_pages,
            loading_ids: Vec::new(),
        }
    }

    pub fn with_loading_ids(mut self, loading_ids: Vec<String>) -> Self {
        self.loading_ids = loading_ids;
        self
    }

    fn last_page(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }
}

impl WidgetBinding for NavigationPagination {
    type OwnProps = NavigationPaginationProps;
    type StateProps = NavigationPaginationView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        NavigationPaginationView {
            current_page: state
                .paginations
                .find(&props.id)
                .map_or(0, |pagination| pagination.page_nb),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![PaginationIntent::add(&props.id).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![PaginationIntent::remove(&props.id).into()]
    }
}

impl Connected<NavigationPagination> {
    /// Go to `page_nb`, clamped to the last page.
    pub fn change_page(&self, page_nb: u32) {
        let props = self.props();
        self.dispatch_all([
            Action::from(LoadingIntent::turn_on(props.loading_ids.clone())),
            Action::from(PaginationIntent::change_page(&props.id, page_nb.min(props.last_page()))),
        ]);
    }

    pub fn next_page(&self) {
        let current = self.current_page();
        if current < self.props().last_page() {
            self.change_page(current + 1);
        }
    }

    pub fn previous_page(&self) {
        let current = self.current_page();
        if current > 0 {
            self.change_page(current - 1);
        }
    }

    fn current_page(&self) -> u32 {
        self.store()
            .select(|state| NavigationPagination::select(state, self.props()))
            .current_page
    }
}
