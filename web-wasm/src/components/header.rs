//! ヘッダーコンポーネント（タイトルと時計）

use leptos::prelude::*;

#[component]
pub fn Header(clock: String) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"IIIT-H Mess Menu"</h1>
            <p class="clock">{clock}</p>
        </header>
    }
}
