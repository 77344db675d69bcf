//! メインアプリケーションコンポーネント
//!
//! 表示状態は ViewModel 1つにまとめ、遷移関数経由でのみ更新する。
//! 描画は `ViewModel::screen()` の結果をそのままコンポーネントに割り当てる。

use crate::api::fetch;
use crate::clock;
use crate::components::{
    header::Header,
    meal_card::MealCards,
    selectors::{DaySelect, LocationSelect},
    status::{ErrorScreen, LoadingScreen},
};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mess_menu_common::{Day, Location, Screen, ViewModel};
use std::time::Duration;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let today = clock::today();
    let view_model = RwSignal::new(ViewModel::new(today, clock::now()));

    // マウント時に1回だけ読み込む
    spawn_local(async move {
        match fetch::load_menus(today).await {
            Ok(menus) => view_model.update(|vm| {
                vm.finish_load(menus);
            }),
            Err(message) => {
                error!("Error fetching menu data: {}", message);
                view_model.update(|vm| {
                    vm.fail(message);
                });
            }
        }
    });

    // 時計（アンマウント時に解除）
    match set_interval_with_handle(
        move || view_model.update(|vm| vm.tick(clock::now())),
        Duration::from_millis(clock::CLOCK_PERIOD_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => error!("failed to start clock: {:?}", e),
    }

    let on_day_change = move |day: Day| view_model.update(|vm| vm.select_day(day));
    let on_location_change =
        move |location: Option<Location>| view_model.update(|vm| vm.select_location(location));

    view! {
        {move || match view_model.with(ViewModel::screen) {
            Screen::Loading => view! { <LoadingScreen /> }.into_any(),
            Screen::Failed { message } => view! { <ErrorScreen message=message /> }.into_any(),
            Screen::Ready { clock, day, location, cards } => view! {
                <div class="app">
                    <div class="container">
                        <Header clock=clock />

                        <div class="selectors">
                            <DaySelect selected=day on_change=on_day_change />
                            <LocationSelect selected=location on_change=on_location_change />
                        </div>

                        {location.map(|location| view! { <MealCards location=location cards=cards /> })}
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}
