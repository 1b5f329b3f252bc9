//! Class catalog browsing page

use std::time::Duration;

use common::envelope::PageMeta;
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};

use crate::gateway::classes::ClassGateway;
use crate::models::ClassSummary;

/// Controller of the class catalog, the one paginated list in the client
///
/// Pagination is server-side per page; the search term and category filter
/// narrow down the page currently loaded.
pub struct ClassBrowsePage<G: ClassGateway> {
    gateway: G,
    pub list: ListState<ClassSummary>,
    pub meta: Option<PageMeta>,
    pub page: u32,
    pub notices: Notices,
    pub search_term: String,
    pub category: Option<String>,
    pub loading: bool,
}

impl<G: ClassGateway> ClassBrowsePage<G> {
    pub fn new(gateway: G, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            list: ListState::new(),
            meta: None,
            page: 1,
            notices: Notices::new(notification_ttl),
            search_term: String::new(),
            category: None,
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let ticket = self.list.begin_load();
        match self.gateway.list(self.page).await {
            Ok((items, meta)) => {
                if self.list.complete_load(ticket, items) {
                    self.meta = meta;
                }
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
        self.loading = false;
    }

    /// Classes on the current page matching the search term and category
    pub fn visible(&self) -> Vec<&ClassSummary> {
        let category = self.category.as_deref();
        self.list.view(&self.search_term, |class| {
            category.is_none_or(|c| class.category.eq_ignore_ascii_case(c))
        })
    }

    pub fn total_pages(&self) -> u32 {
        self.meta.as_ref().map(|m| m.total_pages).unwrap_or(1)
    }

    pub async fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
            self.refresh().await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.refresh().await;
        }
    }
}
