mod state;

use crate::domain::a001_sales_record::controller::{FilterUpdate, SalesController};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::multi_select::MultiSelectDropdown;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::ApiConfig;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_amount, format_optional, format_optional_money};
use chrono::NaiveDate;
use contracts::domain::a001_sales_record::filter::{parse_age_range, parse_tags};
use contracts::domain::a001_sales_record::query::SORT_OPTIONS;
use contracts::domain::a001_sales_record::{MultiField, SalesRecordDto, SortSpec};
use leptos::prelude::*;
use state::{apply, apply_debounced, create_state};
use thaw::*;
use wasm_bindgen::JsCast;

/// Dropdown filters, in display order. Tags have their own text input.
const DROPDOWN_FIELDS: [MultiField; 4] = [
    MultiField::CustomerRegion,
    MultiField::Gender,
    MultiField::ProductCategory,
    MultiField::PaymentMethod,
];

#[component]
pub fn SalesList() -> impl IntoView {
    let state = create_state();
    let config = StoredValue::new(ApiConfig::load());
    let (is_loaded, set_is_loaded) = signal(false);
    let is_filter_expanded = RwSignal::new(true);

    // Free-text inputs keep what the user typed; the controller gets the parsed value
    let age_text = RwSignal::new(String::new());
    let tags_text = RwSignal::new(String::new());

    // Initial load
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            apply(state, config, |c| c.load());
        }
    });

    // Close the open dropdown on clicks outside of it
    let _ = window_event_listener(leptos::ev::mousedown, move |ev: leptos::ev::MouseEvent| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".filter-dropdown").ok().flatten())
            .is_some();
        if inside {
            return;
        }
        let is_open = state
            .try_with_untracked(|c| c.open_dropdown().is_some())
            .unwrap_or(false);
        if is_open {
            state.update(|c| c.close_dropdown());
        }
    });

    let is_loading = Signal::derive(move || state.with(|c| c.is_loading()));

    let active_filters_count = Signal::derive(move || {
        state.with(|c| c.filters().active_count() + usize::from(!c.query().trim().is_empty()))
    });

    let reset = Callback::new(move |_: ()| {
        age_text.set(String::new());
        tags_text.set(String::new());
        apply(state, config, |c| c.reset_filters());
    });

    let refresh = move || apply(state, config, |c| Some(c.refresh()));

    let filter_content = move || {
        view! {
            {DROPDOWN_FIELDS
                .into_iter()
                .map(|field| {
                    view! {
                        <MultiSelectDropdown
                            field=field
                            selected=Signal::derive(move || state.with(|c| c.filters().values(field).clone()))
                            is_open=Signal::derive(move || state.with(|c| c.open_dropdown() == Some(field)))
                            on_toggle_open=Callback::new(move |_: ()| state.update(|c| c.toggle_dropdown(field)))
                            on_toggle_value=Callback::new(move |value: String| {
                                apply_debounced(state, config, move |c| c.toggle_filter_value(field, &value));
                            })
                        />
                    }
                })
                .collect_view()}

            <div class="filter-group">
                <div class="filter-label">"Age Range"</div>
                <input
                    type="text"
                    placeholder="min-max"
                    prop:value=move || age_text.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let (min, max) = parse_age_range(&text);
                        age_text.set(text);
                        apply_debounced(state, config, move |c| {
                            c.set_filter(FilterUpdate::AgeRange(min, max))
                        });
                    }
                    on:change=move |_| {
                        // Show the bounds actually sent once editing is done
                        age_text.set(state.with_untracked(|c| c.age_range_text()));
                    }
                />
            </div>

            <div class="filter-group">
                <div class="filter-label">{MultiField::Tags.label()}</div>
                <input
                    type="text"
                    placeholder=MultiField::Tags.placeholder()
                    prop:value=move || tags_text.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let tags = parse_tags(&text);
                        tags_text.set(text);
                        apply_debounced(state, config, move |c| {
                            c.set_filter(FilterUpdate::Values(MultiField::Tags, tags))
                        });
                    }
                />
            </div>

            <div class="filter-group">
                <div class="filter-label">"Date"</div>
                <DateInput
                    value=Signal::derive(move || state.with(|c| c.filters().date))
                    on_change=Callback::new(move |d: Option<NaiveDate>| {
                        apply_debounced(state, config, move |c| c.set_filter(FilterUpdate::Date(d)));
                    })
                    title="Single day"
                />
            </div>

            <div class="filter-group">
                <div class="filter-label">"Date Range"</div>
                <div class="date-range">
                    <DateInput
                        value=Signal::derive(move || state.with(|c| c.filters().start_date))
                        on_change=Callback::new(move |d: Option<NaiveDate>| {
                            apply_debounced(state, config, move |c| c.set_filter(FilterUpdate::StartDate(d)));
                        })
                        title="From"
                    />
                    <DateInput
                        value=Signal::derive(move || state.with(|c| c.filters().end_date))
                        on_change=Callback::new(move |d: Option<NaiveDate>| {
                            apply_debounced(state, config, move |c| c.set_filter(FilterUpdate::EndDate(d)));
                        })
                        title="To"
                    />
                </div>
            </div>

            <div class="filter-group">
                <div class="filter-label">"Sort by"</div>
                <select
                    prop:value=move || state.with(|c| c.sort().option_value())
                    on:change=move |ev| {
                        if let Some(spec) = SortSpec::from_option_value(&event_target_value(&ev)) {
                            apply(state, config, move |c| c.set_sort(spec.field, spec.direction));
                        }
                    }
                >
                    {SORT_OPTIONS
                        .into_iter()
                        .map(|(spec, label)| {
                            view! { <option value=spec.option_value()>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div class="page sales-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales Management System"</h1>
                </div>
                <div class="page__header-right">
                    <div class="search-input">
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Name, Phone no."
                            prop:value=move || state.with(|c| c.query().to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                apply_debounced(state, config, move |c| c.set_query(text));
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| refresh()
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    on_reset=reset
                >
                    {filter_content()}
                </FilterPanel>

                <section class="summary-row">
                    <StatCard
                        label="Total units sold"
                        icon_name="units"
                        value=Signal::derive(move || state.with(|c| c.totals().total_units.to_string()))
                    />
                    <StatCard
                        label="Total Amount"
                        icon_name="amount"
                        value=Signal::derive(move || state.with(|c| format_amount(c.totals().total_amount)))
                    />
                    <StatCard
                        label="Total Discount"
                        icon_name="discount"
                        value=Signal::derive(move || state.with(|c| format_amount(c.totals().total_discount)))
                    />
                </section>

                <section class="table-section">
                    {move || state.with(|c| c.error().map(|e| view! { <p class="error">{e.to_string()}</p> }))}
                    <Show when=move || is_loading.get()>
                        <p class="loading">"Loading..."</p>
                    </Show>
                    <Show
                        when=move || state.with(|c| !c.rows().is_empty())
                        fallback=move || {
                            state.with(|c| {
                                (!c.is_loading() && c.error().is_none()).then(|| {
                                    view! { <p>"No results match the current search and filters."</p> }
                                })
                            })
                        }
                    >
                        {sales_table(Signal::derive(move || state.with(|c| c.rows().to_vec())))}
                    </Show>
                </section>

                <footer class="pagination-footer">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|c| c.page() as usize))
                        total_pages=Signal::derive(move || state.with(|c| c.total_pages() as usize))
                        window=Signal::derive(move || state.with(SalesController::page_window))
                        on_page_change=Callback::new(move |page: usize| {
                            apply(state, config, move |c| c.go_to_page(page as u32));
                        })
                        on_prev=Callback::new(move |_: ()| apply(state, config, |c| c.prev_page()))
                        on_next=Callback::new(move |_: ()| apply(state, config, |c| c.next_page()))
                    />
                    <span class="pagination-info">
                        {move || state.with(|c| format!("{} records", c.total_elements()))}
                    </span>
                </footer>
            </div>
        </div>
    }
}

fn sales_table(rows: Signal<Vec<SalesRecordDto>>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="data-table sales-table">
                <thead>
                    <tr>
                        <th>"Transaction ID"</th>
                        <th>"Date"</th>
                        <th>"Customer ID"</th>
                        <th>"Customer Name"</th>
                        <th>"Phone Number"</th>
                        <th>"Gender"</th>
                        <th>"Age"</th>
                        <th>"Customer Region"</th>
                        <th>"Product Category"</th>
                        <th>"Quantity"</th>
                        <th>"Price / Unit"</th>
                        <th>"Final Amount"</th>
                        <th>"Payment Method"</th>
                        <th>"Order Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        // Position breaks ties between rows without an id
                        each=move || rows.get().into_iter().enumerate()
                        key=|(index, row)| (row.row_key(), *index)
                        children=move |(_, row)| {
                            view! {
                                <tr>
                                    <td>{format_optional(row.transaction_id)}</td>
                                    <td>{format_optional(row.date)}</td>
                                    <td>{format_optional(row.customer_id)}</td>
                                    <td>{format_optional(row.customer_name)}</td>
                                    <td>{format_optional(row.phone_number)}</td>
                                    <td>{format_optional(row.gender)}</td>
                                    <td>{format_optional(row.age)}</td>
                                    <td>{format_optional(row.customer_region)}</td>
                                    <td>{format_optional(row.product_category)}</td>
                                    <td class="cell-number">{format_optional(row.quantity)}</td>
                                    <td class="cell-number">{format_optional_money(row.price_per_unit)}</td>
                                    <td class="cell-number">{format_optional_money(row.final_amount)}</td>
                                    <td>{format_optional(row.payment_method)}</td>
                                    <td>{format_optional(row.order_status)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
