use crate::shared::icons::icon;
use leptos::prelude::*;

/// Номера страниц для кнопок, `1..=total_pages`
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}

pub fn prev_disabled(current_page: usize) -> bool {
    current_page <= 1
}

pub fn next_disabled(current_page: usize, total_pages: usize) -> bool {
    current_page >= total_pages
}

/// PaginationControls - prev, one button per page number, next
///
/// Pages are 1-based and the controls are shown even for a single page.
/// Out-of-range pages cannot be requested: prev is disabled on page 1, next
/// on the last page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || prev_disabled(current_page.get())
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                page_numbers(total_pages.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || next_disabled(current_page.get(), total_pages.get())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
