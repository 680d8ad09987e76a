use chrono::NaiveDate;
use leptos::prelude::*;

/// Parses the value of an `<input type="date">`; an empty or invalid value is `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_date_input(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// DateInput component with native date picker
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Callback when the date changes or is cleared
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional)] title: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            title=title
            prop:value=move || format_date_input(value.get())
            on:input=move |ev| {
                on_change.run(parse_date_input(&event_target_value(&ev)));
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2023-09-30"), NaiveDate::from_ymd_opt(2023, 9, 30));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("30.09.2023"), None);
    }

    #[test]
    fn test_format_date_input() {
        assert_eq!(format_date_input(NaiveDate::from_ymd_opt(2023, 1, 5)), "2023-01-05");
        assert_eq!(format_date_input(None), "");
    }
}
