//! 読み込み中・エラー画面

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="screen screen-loading">
            <div class="panel">
                <div class="spinner"></div>
                <p class="status-text">"Loading menu data..."</p>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorScreen(message: String) -> impl IntoView {
    view! {
        <div class="screen screen-error">
            <div class="panel">
                <p class="status-text error-text">{format!("Error: {}", message)}</p>
            </div>
        </div>
    }
}
