use crate::domain::a001_sales_record::ui::list::SalesList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesList />
    }
}
