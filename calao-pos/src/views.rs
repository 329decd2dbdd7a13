//! Order collection and filtering views
//!
//! Read-side projections over the fetched order list. The source list
//! is never mutated; every dashboard derives its own filtered, sorted,
//! paginated subset plus the summary counts for its status tabs.

use chrono::{DateTime, Local, NaiveDate, Utc};

use shared::models::{Order, OrderStatus};

/// Fixed page size across dashboards
pub const PAGE_SIZE: usize = 10;

/// Date scoping relative to local midnight: "today" is
/// `[midnight, midnight + 1 day)`, "yesterday" the same window shifted
/// back one day, "past" strictly before today's midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateScope {
    #[default]
    All,
    Today,
    Yesterday,
    Past,
}

fn local_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

impl DateScope {
    fn matches(self, created_at: Option<DateTime<Utc>>, today: NaiveDate) -> bool {
        let Some(created_at) = created_at else {
            // Undated orders only show up unscoped
            return self == DateScope::All;
        };
        let date = local_date(created_at);
        match self {
            DateScope::All => true,
            DateScope::Today => date == today,
            DateScope::Yesterday => today.pred_opt().is_some_and(|y| date == y),
            DateScope::Past => date < today,
        }
    }
}

/// History views sort most recent first; kitchen queues oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    RecentFirst,
    OldestFirst,
}

/// Filter inputs of one dashboard view
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub scope: DateScope,
    /// `None` means "TOUTES"
    pub status: Option<OrderStatus>,
    pub search: String,
    /// Restrict to orders created by this user id
    pub owner: Option<String>,
}

impl OrderFilter {
    fn matches(&self, order: &Order, today: NaiveDate) -> bool {
        self.scope.matches(order.created_at, today)
            && self.status.is_none_or(|s| order.status == s)
            && self
                .owner
                .as_deref()
                .is_none_or(|owner| order.belongs_to(owner))
            && matches_search(order, &self.search)
    }
}

/// Case-insensitive substring match over order number, stringified
/// table number, item names and the serveur display name.
fn matches_search(order: &Order, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    order.order_number.to_lowercase().contains(&term)
        || order
            .table_number
            .is_some_and(|t| t.to_string().contains(&term))
        || order
            .items
            .iter()
            .any(|i| i.display_name().to_lowercase().contains(&term))
        || order
            .server
            .as_ref()
            .is_some_and(|s| s.name.to_lowercase().contains(&term))
}

/// One dashboard's projection of the order list
#[derive(Debug)]
pub struct OrderListView {
    orders: Vec<Order>,
    filter: OrderFilter,
    sort: SortOrder,
    /// 1-based current page
    page: usize,
}

impl Default for OrderListView {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderListView {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            filter: OrderFilter::default(),
            sort: SortOrder::default(),
            page: 1,
        }
    }

    pub fn with_filter(filter: OrderFilter) -> Self {
        Self {
            filter,
            ..Self::new()
        }
    }

    /// Replace the source list after a refresh; the current page is
    /// kept, clamped to the new page count.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.clamp_page();
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    // Any filter change resets pagination to the first page.

    pub fn set_scope(&mut self, scope: DateScope) {
        self.filter.scope = scope;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<OrderStatus>) {
        self.filter.status = status;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.filter.owner = owner;
        self.page = 1;
    }

    /// The filtered, sorted projection for a given "today"
    pub fn filtered_at(&self, today: NaiveDate) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| self.filter.matches(o, today))
            .collect();
        let key = |o: &Order| o.last_modified().unwrap_or(DateTime::<Utc>::MIN_UTC);
        match self.sort {
            SortOrder::RecentFirst => orders.sort_by(|a, b| key(b).cmp(&key(a))),
            SortOrder::OldestFirst => orders.sort_by(|a, b| key(a).cmp(&key(b))),
        }
        orders
    }

    pub fn filtered(&self) -> Vec<&Order> {
        self.filtered_at(Local::now().date_naive())
    }

    pub fn total_pages_at(&self, today: NaiveDate) -> usize {
        self.filtered_at(today).len().div_ceil(PAGE_SIZE)
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages_at(Local::now().date_naive())
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages().max(1);
        self.page = self.page.clamp(1, total);
    }

    /// The slice of the projection shown on the current page
    pub fn page_items_at(&self, today: NaiveDate) -> Vec<&Order> {
        self.filtered_at(today)
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn page_items(&self) -> Vec<&Order> {
        self.page_items_at(Local::now().date_naive())
    }

    /// Live count for one status tab: the same scoped set this view
    /// shows, with the status filter overridden — so the count always
    /// agrees with what clicking the tab would display.
    pub fn status_count_at(&self, status: OrderStatus, today: NaiveDate) -> usize {
        let mut filter = self.filter.clone();
        filter.status = Some(status);
        self.orders
            .iter()
            .filter(|o| filter.matches(o, today))
            .count()
    }

    pub fn status_count(&self, status: OrderStatus) -> usize {
        self.status_count_at(status, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::testutil::{order, order_at, with_server, with_table};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        // Local offset matters for the midnight boundary; build from the
        // local calendar so tests hold in any timezone.
        Local
            .with_ymd_and_hms(2026, 8, day, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn five_today_three_yesterday() -> Vec<Order> {
        let mut orders = Vec::new();
        for i in 0..5 {
            orders.push(order_at(
                &format!("t-{i}"),
                OrderStatus::EnAttente,
                at(6, 8 + i),
            ));
        }
        for i in 0..3 {
            orders.push(order_at(
                &format!("y-{i}"),
                OrderStatus::Termine,
                at(5, 10 + i),
            ));
        }
        orders
    }

    #[test]
    fn date_scoping_splits_today_and_yesterday() {
        let mut view = OrderListView::new();
        view.set_orders(five_today_three_yesterday());

        view.set_scope(DateScope::Today);
        assert_eq!(view.filtered_at(today()).len(), 5);

        view.set_scope(DateScope::Yesterday);
        assert_eq!(view.filtered_at(today()).len(), 3);

        view.set_scope(DateScope::Past);
        assert_eq!(view.filtered_at(today()).len(), 3);

        view.set_scope(DateScope::All);
        assert_eq!(view.filtered_at(today()).len(), 8);
    }

    #[test]
    fn status_filter_is_exact_and_none_means_toutes() {
        let statuses = [
            OrderStatus::EnAttente,
            OrderStatus::EnPreparation,
            OrderStatus::Pret,
            OrderStatus::Termine,
            OrderStatus::Annule,
        ];
        let orders: Vec<Order> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| order(&format!("o-{i}"), *s))
            .collect();

        let mut view = OrderListView::new();
        view.set_orders(orders);

        for status in statuses {
            view.set_status(Some(status));
            let filtered = view.filtered_at(today());
            assert_eq!(filtered.len(), 1, "status {status:?}");
            assert_eq!(filtered[0].status, status);
        }

        view.set_status(None);
        assert_eq!(view.filtered_at(today()).len(), 5);
    }

    #[test]
    fn search_matches_table_and_order_number() {
        let mut o1 = with_table(order("a", OrderStatus::EnAttente), 12);
        o1.order_number = "0034".to_string();
        let mut o2 = order("b", OrderStatus::EnAttente);
        o2.order_number = "1247".to_string();
        let o3 = with_table(order("c", OrderStatus::EnAttente), 3);

        let mut view = OrderListView::new();
        view.set_orders(vec![o1, o2, o3]);
        view.set_search("12");

        let matched: Vec<&str> = view
            .filtered_at(today())
            .iter()
            .filter_map(|o| o.id.as_deref())
            .collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.contains(&"a"));
        assert!(matched.contains(&"b"));
    }

    #[test]
    fn search_matches_item_and_server_names_case_insensitively() {
        let o1 = with_server(order("a", OrderStatus::EnAttente), "u-1", "Awa");
        let o2 = order("b", OrderStatus::EnAttente); // items contain "Attiéké poisson"

        let mut view = OrderListView::new();
        view.set_orders(vec![o1, o2]);

        view.set_search("awa");
        assert_eq!(view.filtered_at(today()).len(), 1);

        view.set_search("POISSON");
        assert_eq!(view.filtered_at(today()).len(), 2);
    }

    #[test]
    fn ownership_scoping_checks_the_server_id() {
        let o1 = with_server(order("a", OrderStatus::EnAttente), "u-1", "Awa");
        let o2 = with_server(order("b", OrderStatus::EnAttente), "u-2", "Moussa");
        let o3 = order("c", OrderStatus::EnAttente);

        let mut view = OrderListView::new();
        view.set_orders(vec![o1, o2, o3]);
        view.set_owner(Some("u-1".to_string()));

        let filtered = view.filtered_at(today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_deref(), Some("a"));
    }

    #[test]
    fn pagination_pages_by_ten_and_resets_on_filter_change() {
        let orders: Vec<Order> = (0..25)
            .map(|i| order(&format!("o-{i}"), OrderStatus::EnAttente))
            .collect();
        let mut view = OrderListView::new();
        view.set_orders(orders);

        assert_eq!(view.total_pages_at(today()), 3);
        assert_eq!(view.page_items_at(today()).len(), 10);

        view.set_page(3);
        assert_eq!(view.page_items_at(today()).len(), 5);

        view.next_page(); // clamped
        assert_eq!(view.page(), 3);

        view.set_search("anything");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn history_sorts_most_recent_first_with_created_fallback() {
        let mut o1 = order_at("old", OrderStatus::Termine, at(4, 10));
        o1.updated_at = Some(at(6, 9));
        let o2 = order_at("mid", OrderStatus::Termine, at(5, 10));
        let o3 = order_at("new", OrderStatus::Termine, at(6, 10));

        let mut view = OrderListView::new();
        view.set_orders(vec![o2, o1, o3]);

        let ids: Vec<&str> = view
            .filtered_at(today())
            .iter()
            .filter_map(|o| o.id.as_deref())
            .collect();
        // "old" was modified today at 09:00, after "mid" but before "new"
        assert_eq!(ids, vec!["new", "old", "mid"]);
    }

    #[test]
    fn status_counts_agree_with_tab_contents() {
        let mut orders = five_today_three_yesterday();
        orders.push(order_at("t-p", OrderStatus::Pret, at(6, 13)));

        let mut view = OrderListView::new();
        view.set_orders(orders);
        view.set_scope(DateScope::Today);

        assert_eq!(view.status_count_at(OrderStatus::EnAttente, today()), 5);
        assert_eq!(view.status_count_at(OrderStatus::Pret, today()), 1);
        assert_eq!(view.status_count_at(OrderStatus::Termine, today()), 0);

        view.set_status(Some(OrderStatus::EnAttente));
        assert_eq!(
            view.filtered_at(today()).len(),
            view.status_count_at(OrderStatus::EnAttente, today())
        );
    }
}
