use crate::domain::a001_sales_record::api;
use crate::domain::a001_sales_record::controller::{FetchTicket, Pending, SalesController};
use crate::shared::config::ApiConfig;
use crate::shared::debounce::after_delay;
use leptos::prelude::*;

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<SalesController> {
    RwSignal::new(SalesController::new())
}

/// Applies an immediate change and loads the page if the request changed.
pub fn apply(
    state: RwSignal<SalesController>,
    config: StoredValue<ApiConfig>,
    change: impl FnOnce(&mut SalesController) -> Option<FetchTicket>,
) {
    if let Some(ticket) = state.try_update(change).flatten() {
        run_fetch(state, config, ticket);
    }
}

/// Applies a debounced change and arms its timer.
pub fn apply_debounced(
    state: RwSignal<SalesController>,
    config: StoredValue<ApiConfig>,
    change: impl FnOnce(&mut SalesController) -> Pending,
) {
    let Some(pending) = state.try_update(change) else {
        return;
    };
    after_delay(pending.delay_ms, move || {
        // None once the page is gone or the token went stale
        if let Some(ticket) = state.try_update(|c| c.settle(pending)).flatten() {
            run_fetch(state, config, ticket);
        }
    });
}

pub fn run_fetch(
    state: RwSignal<SalesController>,
    config: StoredValue<ApiConfig>,
    ticket: FetchTicket,
) {
    leptos::task::spawn_local(async move {
        let Some(config) = config.try_get_value() else {
            return;
        };
        let result = api::fetch_sales(&config, &ticket.request).await;
        state.try_update(|c| c.apply_response(ticket.seq, result));
    });
}
