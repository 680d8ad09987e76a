//! State behind the sales list: filters, sort, page and the last loaded page.
//!
//! The controller never touches the DOM or the network. Mutations return what
//! the view has to do next:
//! - a [`Pending`] token for debounced input, to be handed back to
//!   [`SalesController::settle`] once its delay has elapsed;
//! - a [`FetchTicket`] when the resolved request changed and must be loaded,
//!   whose outcome goes back through [`SalesController::apply_response`].
//!
//! Each ticket carries a sequence number. Only the response to the most
//! recently issued ticket is applied; slower responses to superseded requests
//! are dropped.

use super::api::FetchError;
use crate::shared::components::pagination_controls::page_window;
use crate::shared::debounce::Debouncer;
use chrono::NaiveDate;
use contracts::domain::a001_sales_record::filter::format_age_range;
use contracts::domain::a001_sales_record::{
    MultiField, PageTotals, SalesFilter, SalesPage, SalesQuery, SalesRecordDto, SortDirection,
    SortField, SortSpec, PAGE_SIZE,
};
use std::collections::BTreeSet;

/// Quiet period for the free-text search box.
pub const QUERY_DEBOUNCE_MS: u32 = 500;
/// Quiet period for the structured filters.
pub const FILTER_DEBOUNCE_MS: u32 = 300;
/// Page-number buttons shown in the footer.
pub const PAGE_WINDOW_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceChannel {
    Query,
    Filters,
}

/// A debounced change waiting for its quiet period to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub channel: DebounceChannel,
    pub generation: u64,
    pub delay_ms: u32,
}

/// One edit to the filter bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Values(MultiField, BTreeSet<String>),
    MinAge(Option<u32>),
    MaxAge(Option<u32>),
    AgeRange(Option<u32>, Option<u32>),
    Date(Option<NaiveDate>),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
}

/// A request the view must send, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: SalesQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    Failed,
    /// A newer request was issued in the meantime; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct SalesController {
    // What the user has typed / picked
    query: String,
    filters: SalesFilter,

    // What the current request is built from
    settled_query: String,
    settled_filters: SalesFilter,
    sort: SortSpec,
    page: u32,

    query_debounce: Debouncer,
    filter_debounce: Debouncer,

    result: SalesPage,
    loading: bool,
    error: Option<String>,
    open_dropdown: Option<MultiField>,

    last_issued: Option<SalesQuery>,
    seq: u64,
}

impl Default for SalesController {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesController {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            filters: SalesFilter::default(),
            settled_query: String::new(),
            settled_filters: SalesFilter::default(),
            sort: SortSpec::default(),
            page: 0,
            query_debounce: Debouncer::new(QUERY_DEBOUNCE_MS),
            filter_debounce: Debouncer::new(FILTER_DEBOUNCE_MS),
            result: SalesPage::default(),
            loading: false,
            error: None,
            open_dropdown: None,
            last_issued: None,
            seq: 0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &SalesFilter {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.result.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.result.total_elements
    }

    pub fn rows(&self) -> &[SalesRecordDto] {
        &self.result.content
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open_dropdown(&self) -> Option<MultiField> {
        self.open_dropdown
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.result.total_pages
    }

    /// Age bounds as `min-max`, after clamping. Shown in the age input once
    /// editing is done.
    pub fn age_range_text(&self) -> String {
        format_age_range(self.filters.min_age, self.filters.max_age)
    }

    /// Totals of the rows on the current page.
    pub fn totals(&self) -> PageTotals {
        self.result.totals()
    }

    pub fn page_window(&self) -> Vec<usize> {
        page_window(
            self.page as usize,
            self.result.total_pages as usize,
            PAGE_WINDOW_SIZE,
        )
    }

    /// The request for the current settled state.
    pub fn build_request(&self) -> SalesQuery {
        SalesQuery {
            query: self.settled_query.clone(),
            filters: self.settled_filters.clone(),
            sort: self.sort,
            page: self.page,
            page_size: PAGE_SIZE,
        }
    }

    // ------------------------------------------------------------------
    // Debounced input
    // ------------------------------------------------------------------

    pub fn set_query(&mut self, text: impl Into<String>) -> Pending {
        self.query = text.into();
        self.page = 0;
        Pending {
            channel: DebounceChannel::Query,
            generation: self.query_debounce.touch(),
            delay_ms: self.query_debounce.delay_ms(),
        }
    }

    pub fn set_filter(&mut self, update: FilterUpdate) -> Pending {
        match update {
            FilterUpdate::Values(field, values) => *self.filters.values_mut(field) = values,
            FilterUpdate::MinAge(v) => self.filters.set_min_age(v),
            FilterUpdate::MaxAge(v) => self.filters.set_max_age(v),
            FilterUpdate::AgeRange(min, max) => self.filters.set_age_range(min, max),
            FilterUpdate::Date(d) => self.filters.date = d,
            FilterUpdate::StartDate(d) => self.filters.start_date = d,
            FilterUpdate::EndDate(d) => self.filters.end_date = d,
        }
        self.touch_filters()
    }

    /// Checkbox semantics: adds the value or removes it if already selected.
    pub fn toggle_filter_value(&mut self, field: MultiField, value: &str) -> Pending {
        self.filters.toggle(field, value);
        self.touch_filters()
    }

    fn touch_filters(&mut self) -> Pending {
        self.page = 0;
        Pending {
            channel: DebounceChannel::Filters,
            generation: self.filter_debounce.touch(),
            delay_ms: self.filter_debounce.delay_ms(),
        }
    }

    /// Ends a quiet period. Tokens superseded by later input do nothing.
    pub fn settle(&mut self, pending: Pending) -> Option<FetchTicket> {
        match pending.channel {
            DebounceChannel::Query => {
                if !self.query_debounce.is_current(pending.generation) {
                    return None;
                }
                self.settled_query = self.query.clone();
            }
            DebounceChannel::Filters => {
                if !self.filter_debounce.is_current(pending.generation) {
                    return None;
                }
                self.settled_filters = self.filters.clone();
            }
        }
        self.issue(false)
    }

    // ------------------------------------------------------------------
    // Immediate changes
    // ------------------------------------------------------------------

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) -> Option<FetchTicket> {
        self.sort = SortSpec::new(field, direction);
        self.page = 0;
        self.issue(false)
    }

    /// Clears search and filters and drops any pending debounced input.
    pub fn reset_filters(&mut self) -> Option<FetchTicket> {
        self.query_debounce.cancel();
        self.filter_debounce.cancel();
        self.query.clear();
        self.settled_query.clear();
        self.filters = SalesFilter::default();
        self.settled_filters = SalesFilter::default();
        self.open_dropdown = None;
        self.page = 0;
        self.issue(false)
    }

    /// Moves to page `n`. Pages outside `0..total_pages` are ignored.
    pub fn go_to_page(&mut self, n: u32) -> Option<FetchTicket> {
        if n >= self.result.total_pages {
            log::warn!(
                "Ignoring page {} outside 0..{}",
                n,
                self.result.total_pages
            );
            return None;
        }
        if n == self.page {
            return None;
        }
        self.page = n;
        self.issue(false)
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.has_next() {
            return None;
        }
        self.go_to_page(self.page + 1)
    }

    /// Steps back one page. If the last result has fewer pages than the
    /// current index, lands on its last page instead.
    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        if !self.has_prev() {
            return None;
        }
        let last = self.result.total_pages.saturating_sub(1);
        self.page = (self.page - 1).min(last);
        self.issue(false)
    }

    /// First load of the page.
    pub fn load(&mut self) -> Option<FetchTicket> {
        self.issue(true)
    }

    /// Re-sends the current request even if it was already loaded.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue_ticket()
    }

    // ------------------------------------------------------------------
    // Dropdowns
    // ------------------------------------------------------------------

    pub fn toggle_dropdown(&mut self, field: MultiField) {
        self.open_dropdown = if self.open_dropdown == Some(field) {
            None
        } else {
            Some(field)
        };
    }

    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    // ------------------------------------------------------------------
    // Requests and responses
    // ------------------------------------------------------------------

    fn issue(&mut self, force: bool) -> Option<FetchTicket> {
        if !force && self.last_issued.as_ref() == Some(&self.build_request()) {
            return None;
        }
        Some(self.issue_ticket())
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        let request = self.build_request();
        self.seq += 1;
        self.loading = true;
        self.last_issued = Some(request.clone());
        log::debug!(
            "Issuing sales request #{} (page {}, sort {})",
            self.seq,
            request.page,
            request.sort.option_value()
        );
        FetchTicket {
            seq: self.seq,
            request,
        }
    }

    /// Applies the outcome of ticket `seq`.
    ///
    /// On success the page is replaced as a whole and the error cleared. On
    /// failure the previous rows stay on screen and the error is set; the
    /// same request may then be issued again.
    pub fn apply_response(
        &mut self,
        seq: u64,
        result: Result<SalesPage, FetchError>,
    ) -> ResponseOutcome {
        if seq != self.seq {
            log::debug!("Discarding response #{} (latest is #{})", seq, self.seq);
            return ResponseOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.result = page;
                self.error = None;
                ResponseOutcome::Applied
            }
            Err(e) => {
                log::warn!("Failed to fetch sales: {}", e);
                self.error = Some(e.user_message());
                self.last_issued = None;
                ResponseOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_record::filter::parse_age_range;

    fn record(tx: &str) -> SalesRecordDto {
        SalesRecordDto {
            transaction_id: Some(tx.to_string()),
            quantity: Some(1),
            total_amount: Some(10.0),
            final_amount: Some(8.0),
            ..Default::default()
        }
    }

    fn page_of(txs: &[&str], total_pages: u32) -> SalesPage {
        SalesPage {
            content: txs.iter().map(|tx| record(tx)).collect(),
            total_pages,
            total_elements: u64::from(total_pages) * 10,
        }
    }

    fn loaded(total_pages: u32) -> SalesController {
        let mut ctrl = SalesController::new();
        let ticket = ctrl.load().unwrap();
        ctrl.apply_response(ticket.seq, Ok(page_of(&["T-1", "T-2"], total_pages)));
        ctrl
    }

    fn on_page(n: u32, total_pages: u32) -> SalesController {
        let mut ctrl = loaded(total_pages);
        let ticket = ctrl.go_to_page(n).unwrap();
        ctrl.apply_response(ticket.seq, Ok(page_of(&["T-3"], total_pages)));
        assert_eq!(ctrl.page(), n);
        ctrl
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_initial_state() {
        let ctrl = SalesController::new();
        let request = ctrl.build_request();
        assert_eq!(request, SalesQuery::default());
        assert!(ctrl.rows().is_empty());
        assert!(!ctrl.is_loading());
        assert!(ctrl.page_window().is_empty());
    }

    #[test]
    fn test_load_sets_loading() {
        let mut ctrl = SalesController::new();
        let ticket = ctrl.load().unwrap();
        assert!(ctrl.is_loading());
        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.request.page_size, PAGE_SIZE);

        ctrl.apply_response(ticket.seq, Ok(page_of(&["T-1"], 1)));
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.rows().len(), 1);
    }

    #[test]
    fn test_mutations_reset_page() {
        let mut ctrl = on_page(3, 10);
        ctrl.set_query("asha");
        assert_eq!(ctrl.page(), 0);

        let mut ctrl = on_page(3, 10);
        ctrl.set_filter(FilterUpdate::MinAge(Some(30)));
        assert_eq!(ctrl.page(), 0);

        let mut ctrl = on_page(3, 10);
        ctrl.toggle_filter_value(MultiField::Gender, "Male");
        assert_eq!(ctrl.page(), 0);

        let mut ctrl = on_page(3, 10);
        let ticket = ctrl.set_sort(SortField::Quantity, SortDirection::Desc).unwrap();
        assert_eq!(ctrl.page(), 0);
        assert_eq!(ticket.request.page, 0);

        let mut ctrl = on_page(3, 10);
        ctrl.reset_filters();
        assert_eq!(ctrl.page(), 0);
    }

    #[test]
    fn test_navigation_keeps_other_state() {
        let mut ctrl = loaded(10);
        let pending = ctrl.set_query("asha");
        ctrl.settle(pending).unwrap();

        let ticket = ctrl.next_page().unwrap();
        assert_eq!(ticket.request.page, 1);
        assert_eq!(ticket.request.query, "asha");
    }

    #[test]
    fn test_query_debounce_last_input_wins() {
        let mut ctrl = loaded(5);
        let first = ctrl.set_query("as");
        let second = ctrl.set_query("asha");
        assert_eq!(second.delay_ms, QUERY_DEBOUNCE_MS);

        assert_eq!(ctrl.settle(first), None);
        assert_eq!(ctrl.build_request().query, "");

        let ticket = ctrl.settle(second).unwrap();
        assert_eq!(ticket.request.query, "asha");

        // Already issued
        assert_eq!(ctrl.settle(second), None);
    }

    #[test]
    fn test_query_and_filters_settle_independently() {
        let mut ctrl = loaded(5);
        let query = ctrl.set_query("ravi");
        let filters = ctrl.toggle_filter_value(MultiField::CustomerRegion, "North");
        assert_eq!(filters.delay_ms, FILTER_DEBOUNCE_MS);

        let ticket = ctrl.settle(filters).unwrap();
        assert!(ticket.request.filters.customer_region.contains("North"));
        assert_eq!(ticket.request.query, "");

        let ticket = ctrl.settle(query).unwrap();
        assert_eq!(ticket.request.query, "ravi");
        assert!(ticket.request.filters.customer_region.contains("North"));
    }

    #[test]
    fn test_filter_burst_restarts_debounce() {
        let mut ctrl = loaded(5);
        let a = ctrl.toggle_filter_value(MultiField::PaymentMethod, "UPI");
        let b = ctrl.set_filter(FilterUpdate::AgeRange(Some(25), Some(40)));
        let c = ctrl.set_filter(FilterUpdate::Date(Some(date("2023-02-01"))));

        assert_eq!(ctrl.settle(a), None);
        assert_eq!(ctrl.settle(b), None);
        let ticket = ctrl.settle(c).unwrap();

        let filters = &ticket.request.filters;
        assert!(filters.payment_method.contains("UPI"));
        assert_eq!((filters.min_age, filters.max_age), (Some(25), Some(40)));
        assert_eq!(filters.date, Some(date("2023-02-01")));
    }

    #[test]
    fn test_settling_back_to_issued_state_does_not_refetch() {
        let mut ctrl = loaded(5);
        ctrl.toggle_filter_value(MultiField::Gender, "Other");
        let pending = ctrl.toggle_filter_value(MultiField::Gender, "Other");
        assert_eq!(ctrl.settle(pending), None);
    }

    #[test]
    fn test_set_filter_values_replaces_set() {
        let mut ctrl = SalesController::new();
        ctrl.toggle_filter_value(MultiField::Tags, "old");
        let tags: BTreeSet<String> = ["new".to_string(), "fresh".to_string()].into();
        let pending = ctrl.set_filter(FilterUpdate::Values(MultiField::Tags, tags.clone()));
        let ticket = ctrl.settle(pending).unwrap();
        assert_eq!(ticket.request.filters.tags, tags);
    }

    #[test]
    fn test_age_bounds_are_corrected() {
        let mut ctrl = SalesController::new();
        ctrl.set_filter(FilterUpdate::MaxAge(Some(30)));
        ctrl.set_filter(FilterUpdate::MinAge(Some(50)));
        assert_eq!(ctrl.filters().min_age, Some(30));

        ctrl.set_filter(FilterUpdate::StartDate(Some(date("2023-01-01"))));
        ctrl.set_filter(FilterUpdate::EndDate(Some(date("2023-01-31"))));
        assert_eq!(
            ctrl.filters().date_range(),
            (Some(date("2023-01-01")), Some(date("2023-01-31")))
        );
    }

    #[test]
    fn test_age_range_text_shows_clamped_bounds() {
        let mut ctrl = loaded(5);
        assert_eq!(ctrl.age_range_text(), "");

        let (min, max) = parse_age_range("5-200");
        let pending = ctrl.set_filter(FilterUpdate::AgeRange(min, max));
        assert_eq!(ctrl.age_range_text(), "18-100");

        let ticket = ctrl.settle(pending).unwrap();
        assert_eq!(ticket.request.filters.min_age, Some(18));
        assert_eq!(ticket.request.filters.max_age, Some(100));

        ctrl.set_filter(FilterUpdate::AgeRange(None, Some(40)));
        assert_eq!(ctrl.age_range_text(), "-40");
    }

    #[test]
    fn test_sort_is_immediate() {
        let mut ctrl = loaded(5);
        let ticket = ctrl
            .set_sort(SortField::CustomerName, SortDirection::Asc)
            .unwrap();
        assert_eq!(
            ticket.request.sort,
            SortSpec::new(SortField::CustomerName, SortDirection::Asc)
        );
        // Same sort again changes nothing
        let again = ctrl.set_sort(SortField::CustomerName, SortDirection::Asc);
        assert_eq!(again, None);
    }

    #[test]
    fn test_reset_cancels_pending_input() {
        let mut ctrl = loaded(5);
        let pending_query = ctrl.set_query("neha");
        let pending_filter = ctrl.toggle_filter_value(MultiField::Gender, "Female");
        ctrl.toggle_dropdown(MultiField::Gender);

        ctrl.reset_filters();
        assert_eq!(ctrl.query(), "");
        assert_eq!(ctrl.filters(), &SalesFilter::default());
        assert_eq!(ctrl.open_dropdown(), None);
        assert_eq!(ctrl.settle(pending_query), None);
        assert_eq!(ctrl.settle(pending_filter), None);
    }

    #[test]
    fn test_reset_after_settled_filters_fetches() {
        let mut ctrl = loaded(5);
        let pending = ctrl.toggle_filter_value(MultiField::ProductCategory, "Beauty");
        let ticket = ctrl.settle(pending).unwrap();
        ctrl.apply_response(ticket.seq, Ok(page_of(&["T-9"], 1)));

        let ticket = ctrl.reset_filters().unwrap();
        assert_eq!(ticket.request, SalesQuery::default());
    }

    #[test]
    fn test_next_page_at_last_page_is_noop() {
        let mut ctrl = on_page(2, 3);
        assert!(!ctrl.has_next());
        assert_eq!(ctrl.next_page(), None);
        assert_eq!(ctrl.page(), 2);
    }

    #[test]
    fn test_prev_page_at_first_page_is_noop() {
        let mut ctrl = loaded(3);
        assert!(!ctrl.has_prev());
        assert_eq!(ctrl.prev_page(), None);
        assert_eq!(ctrl.page(), 0);

        let mut ctrl = on_page(1, 3);
        let ticket = ctrl.prev_page().unwrap();
        assert_eq!(ticket.request.page, 0);
    }

    #[test]
    fn test_prev_page_after_result_shrank() {
        let mut ctrl = on_page(5, 10);
        let ticket = ctrl.refresh();
        ctrl.apply_response(ticket.seq, Ok(page_of(&["T-4"], 3)));
        assert_eq!(ctrl.page(), 5);
        assert!(ctrl.has_prev());
        assert!(!ctrl.has_next());

        let ticket = ctrl.prev_page().unwrap();
        assert_eq!(ctrl.page(), 2);
        assert_eq!(ticket.request.page, 2);
        ctrl.apply_response(ticket.seq, Ok(page_of(&["T-5"], 3)));
        assert_eq!(ctrl.page_window(), vec![0, 1, 2]);

        // No pages left at all: back to the first page
        let mut ctrl = on_page(4, 10);
        let ticket = ctrl.refresh();
        ctrl.apply_response(ticket.seq, Ok(SalesPage::default()));
        let ticket = ctrl.prev_page().unwrap();
        assert_eq!(ticket.request.page, 0);
        assert_eq!(ctrl.prev_page(), None);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_ignored() {
        let mut ctrl = loaded(3);
        assert_eq!(ctrl.go_to_page(3), None);
        assert_eq!(ctrl.go_to_page(99), None);
        assert_eq!(ctrl.page(), 0);

        let mut empty = SalesController::new();
        assert_eq!(empty.go_to_page(0), None);
        assert_eq!(empty.next_page(), None);
    }

    #[test]
    fn test_failure_keeps_rows() {
        let mut ctrl = loaded(4);
        let ticket = ctrl.go_to_page(1).unwrap();
        let outcome = ctrl.apply_response(ticket.seq, Err(FetchError::Status(500)));

        assert_eq!(outcome, ResponseOutcome::Failed);
        assert!(!ctrl.is_loading());
        assert_eq!(
            ctrl.error(),
            Some("Failed to load data: server responded with HTTP 500")
        );
        let txs: Vec<_> = ctrl
            .rows()
            .iter()
            .filter_map(|r| r.transaction_id.as_deref())
            .collect();
        assert_eq!(txs, vec!["T-1", "T-2"]);
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let mut ctrl = loaded(4);
        let ticket = ctrl.refresh();
        ctrl.apply_response(ticket.seq, Err(FetchError::Timeout));
        assert!(ctrl.error().is_some());

        let ticket = ctrl.refresh();
        let outcome = ctrl.apply_response(ticket.seq, Ok(page_of(&["T-7"], 2)));
        assert_eq!(outcome, ResponseOutcome::Applied);
        assert_eq!(ctrl.error(), None);
        assert_eq!(ctrl.rows().len(), 1);
        assert_eq!(ctrl.total_pages(), 2);
    }

    #[test]
    fn test_failure_allows_same_request_again() {
        let mut ctrl = loaded(4);
        let pending = ctrl.set_query("x");
        let ticket = ctrl.settle(pending).unwrap();
        ctrl.apply_response(
            ticket.seq,
            Err(FetchError::Network("connection refused".into())),
        );

        let pending = ctrl.set_query("x");
        let retry = ctrl.settle(pending).unwrap();
        assert_eq!(retry.request, ticket.request);
        assert!(retry.seq > ticket.seq);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctrl = loaded(10);
        let slow = ctrl.go_to_page(1).unwrap();
        let fast = ctrl.go_to_page(2).unwrap();

        assert_eq!(
            ctrl.apply_response(fast.seq, Ok(page_of(&["P3"], 10))),
            ResponseOutcome::Applied
        );
        assert_eq!(
            ctrl.apply_response(slow.seq, Ok(page_of(&["P2"], 10))),
            ResponseOutcome::Stale
        );
        assert_eq!(ctrl.rows()[0].transaction_id.as_deref(), Some("P3"));
    }

    #[test]
    fn test_stale_failure_does_not_touch_state() {
        let mut ctrl = loaded(10);
        let old = ctrl.go_to_page(1).unwrap();
        let _new = ctrl.go_to_page(2).unwrap();

        let outcome = ctrl.apply_response(old.seq, Err(FetchError::Status(503)));
        assert_eq!(outcome, ResponseOutcome::Stale);
        assert_eq!(ctrl.error(), None);
        assert!(ctrl.is_loading());
    }

    #[test]
    fn test_refresh_always_issues() {
        let mut ctrl = loaded(2);
        let a = ctrl.refresh();
        let b = ctrl.refresh();
        assert_eq!(a.request, b.request);
        assert_eq!(b.seq, a.seq + 1);
    }

    #[test]
    fn test_totals_cover_current_page() {
        let ctrl = loaded(50);
        let totals = ctrl.totals();
        assert_eq!(totals.total_units, 2);
        assert_eq!(totals.total_amount, 20.0);
        assert_eq!(totals.total_discount, 4.0);
    }

    #[test]
    fn test_page_window_follows_page() {
        let ctrl = on_page(7, 20);
        assert_eq!(ctrl.page_window(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut ctrl = SalesController::new();
        ctrl.toggle_dropdown(MultiField::Gender);
        assert_eq!(ctrl.open_dropdown(), Some(MultiField::Gender));

        ctrl.toggle_dropdown(MultiField::CustomerRegion);
        assert_eq!(ctrl.open_dropdown(), Some(MultiField::CustomerRegion));

        ctrl.toggle_dropdown(MultiField::CustomerRegion);
        assert_eq!(ctrl.open_dropdown(), None);

        ctrl.toggle_dropdown(MultiField::PaymentMethod);
        ctrl.close_dropdown();
        assert_eq!(ctrl.open_dropdown(), None);
    }
}
