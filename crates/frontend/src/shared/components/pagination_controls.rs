use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page indices for the numbered buttons.
///
/// Up to `window` consecutive pages around `current`, starting `window / 2`
/// before it. Near the end the window slides left so it still ends on the
/// last page. Empty when there are no pages.
pub fn page_window(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 || window == 0 {
        return Vec::new();
    }
    let last = total_pages - 1;
    let mut start = current.min(last).saturating_sub(window / 2);
    let mut end = start + window - 1;
    if end >= last {
        end = last;
        start = (end + 1).saturating_sub(window);
    }
    (start..=end).collect()
}

/// PaginationControls component - Previous / numbered window / Next
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Page indices to render as buttons
    #[prop(into)]
    window: Signal<Vec<usize>>,

    /// Callback when a numbered page is clicked
    on_page_change: Callback<usize>,

    /// Callback for the Previous button
    on_prev: Callback<()>,

    /// Callback for the Next button
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() == 0
                title="Previous"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            <div class="page-numbers">
                <For
                    each=move || window.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "page-btn page-btn--active"
                                    } else {
                                        "page-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page + 1}
                            </button>
                        }
                    }
                />
            </div>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Next"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
