//! 曜日・食堂のセレクタ

use leptos::prelude::*;
use mess_menu_common::{Day, Location};

#[component]
pub fn DaySelect<F>(selected: Day, on_change: F) -> impl IntoView
where
    F: Fn(Day) + 'static + Clone + Send,
{
    view! {
        <select
            id="day-select"
            class="selector"
            on:change=move |ev| {
                if let Ok(day) = event_target_value(&ev).parse::<Day>() {
                    on_change(day);
                }
            }
        >
            {Day::ALL
                .iter()
                .map(|&day| {
                    view! {
                        <option value=day.as_str() selected={day == selected}>
                            {day.title()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn LocationSelect<F>(selected: Option<Location>, on_change: F) -> impl IntoView
where
    F: Fn(Option<Location>) + 'static + Clone + Send,
{
    view! {
        <select
            id="location-select"
            class="selector"
            on:change=move |ev| on_change(parse_location(&event_target_value(&ev)))
        >
            <option value="" selected={selected.is_none()}>"Select Mess"</option>
            {Location::ALL
                .iter()
                .map(|&location| {
                    view! {
                        <option value=location.as_str() selected={Some(location) == selected}>
                            {location.title()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// 空文字列（"Select Mess"）は未選択
fn parse_location(value: &str) -> Option<Location> {
    value.parse().ok()
}
