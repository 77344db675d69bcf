//! `/data/<location>.xlsx` の取得とパース
//!
//! 4食堂を並行に取得し、食堂ごとの失敗は番兵値に置き換える。
//! 各取得はタイムアウト付きで、時間切れも失敗として扱う。
//! 全体の失敗は `window` が取れない場合だけ。

use futures::future::{join_all, select, Either};
use gloo::timers::future::TimeoutFuture;
use leptos::logging::{error, log};
use mess_menu_common::{decode_first_sheet, parse_worksheet, Day, DayMenu, Location, MenuCollection};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

/// メニューファイルの拡張子
pub const EXTENSION: &str = "xlsx";

/// 1食堂あたりのタイムアウト
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// URLのバイト列を取得（2xx以外はエラー）
async fn fetch_bytes(window: &Window, url: &str) -> Result<Vec<u8>, String> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("HTTP error {}", resp.status()));
    }

    let buffer = JsFuture::from(resp.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// 1食堂分を取得してパース
async fn load_location(window: &Window, location: Location) -> Result<DayMenu, String> {
    let url = location.resource_path(EXTENSION);

    let bytes = match select(
        Box::pin(fetch_bytes(window, &url)),
        TimeoutFuture::new(FETCH_TIMEOUT_MS),
    )
    .await
    {
        Either::Left((result, _)) => result?,
        Either::Right(_) => return Err(format!("timed out after {} ms", FETCH_TIMEOUT_MS)),
    };

    let sheet = decode_first_sheet(&bytes).map_err(|e| e.to_string())?;
    Ok(parse_worksheet(&sheet))
}

/// 全食堂を読み込む
///
/// # Returns
/// * `Ok(MenuCollection)` - 全食堂分（失敗した食堂は番兵値）
/// * `Err` - `window` が取れず取得を始められない
pub async fn load_menus(today: Day) -> Result<MenuCollection, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let window = &window;
    let results = join_all(
        Location::ALL
            .iter()
            .map(|&location| async move { (location, load_location(window, location).await) }),
    )
    .await;

    let menus: MenuCollection = results
        .into_iter()
        .map(|(location, result)| match result {
            Ok(menu) => (location, menu),
            Err(e) => {
                error!("Error loading {} menu: {}", location, e);
                (location, DayMenu::unavailable(today))
            }
        })
        .collect();

    log!("loaded {} menus", menus.len());
    Ok(menus)
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
