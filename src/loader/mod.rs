//! メニュー読み込み
//!
//! 4食堂のファイルを並行に取得し、デコード・パースしてMenuCollectionにまとめる。
//! 1食堂の失敗（HTTPエラー・通信エラー・デコード失敗・タイムアウト）は
//! その食堂だけ番兵値に置き換え、他の食堂には影響させない。

mod source;
mod types;

pub use source::{AnySource, DirSource, HttpSource, MenuSource};
pub use types::{LoadError, LoadOutcome};

use crate::error::Result;
use futures::future::join_all;
use mess_menu_common::{decode_first_sheet, parse_worksheet, Day, DayMenu, Location, MenuCollection};
use std::time::Duration;

/// 1食堂あたりの既定タイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 1食堂分を取得してパース
pub async fn load_location<S: MenuSource>(
    source: &S,
    location: Location,
    timeout: Duration,
) -> std::result::Result<DayMenu, LoadError> {
    let bytes = tokio::time::timeout(timeout, source.fetch(location))
        .await
        .map_err(|_| LoadError::Timeout(timeout))??;

    let sheet = decode_first_sheet(&bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    tracing::debug!(
        %location,
        sheet = sheet.name(),
        rows = sheet.height(),
        "decoded worksheet"
    );
    Ok(parse_worksheet(&sheet))
}

/// 全食堂を並行に読み込む
///
/// 全ての取得が終わる（またはタイムアウトする）まで待つ。
/// 失敗した食堂は `DayMenu::unavailable(today)` に置き換える。
///
/// 結果は常に全食堂分そろう（一部が番兵値でも成功）。
pub async fn load_menus<S: MenuSource>(source: &S, today: Day, timeout: Duration) -> LoadOutcome {
    let results = join_all(Location::ALL.iter().map(|&location| async move {
        tracing::debug!(%location, from = %source.describe(location), "fetching menu");
        (location, load_location(source, location, timeout).await)
    }))
    .await;

    let mut failures = Vec::new();
    let menus: MenuCollection = results
        .into_iter()
        .map(|(location, result)| match result {
            Ok(menu) => (location, menu),
            Err(e) => {
                tracing::warn!(%location, error = %e, "Error loading menu");
                failures.push((location, e));
                (location, DayMenu::unavailable(today))
            }
        })
        .collect();

    tracing::info!(failed = failures.len(), "menus loaded");
    LoadOutcome { menus, failures }
}

/// 設定文字列から取得元を作って読み込む
///
/// 取得元が作れない場合だけ `Err`（全体の失敗）になる。
pub async fn load_from_spec(
    spec: &str,
    extension: &str,
    today: Day,
    timeout: Duration,
) -> Result<LoadOutcome> {
    let source = AnySource::from_spec(spec, extension)?;
    Ok(load_menus(&source, today, timeout).await)
}
