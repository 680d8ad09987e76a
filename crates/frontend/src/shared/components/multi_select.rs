use crate::shared::icons::icon;
use contracts::domain::a001_sales_record::MultiField;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Text on the dropdown toggle: the selected values, or the placeholder.
pub fn dropdown_label(selected: &BTreeSet<String>, placeholder: &str) -> String {
    if selected.is_empty() {
        placeholder.to_string()
    } else {
        selected.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Checkbox dropdown over the fixed options of a [`MultiField`].
///
/// Open/closed state is owned by the caller so that only one dropdown is open
/// at a time. The wrapper carries `filter-dropdown`, which the page uses to
/// detect clicks outside.
#[component]
pub fn MultiSelectDropdown(
    field: MultiField,
    /// Currently selected values
    #[prop(into)]
    selected: Signal<BTreeSet<String>>,
    #[prop(into)]
    is_open: Signal<bool>,
    /// Toggle button clicked
    on_toggle_open: Callback<()>,
    /// Checkbox for a value clicked
    on_toggle_value: Callback<String>,
) -> impl IntoView {
    let placeholder = field.placeholder();

    view! {
        <div class="filter-group">
            <div class="filter-label">{field.label()}</div>
            <div class="filter-dropdown">
                <button
                    type="button"
                    class="dropdown-toggle"
                    on:click=move |_| on_toggle_open.run(())
                >
                    <span>{move || selected.with(|s| dropdown_label(s, placeholder))}</span>
                    <span class="dropdown-arrow">{icon("chevron-down")}</span>
                </button>
                <Show when=move || is_open.get()>
                    <div class="dropdown-menu">
                        {field
                            .options()
                            .iter()
                            .map(|option| {
                                let option = *option;
                                view! {
                                    <label class="dropdown-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.with(|s| s.contains(option))
                                            on:change=move |_| on_toggle_value.run(option.to_string())
                                        />
                                        {option}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
