//! ブラウザの時計（js_sys::Date）

use mess_menu_common::{ClockTime, Day};

/// 時計の更新間隔
pub const CLOCK_PERIOD_MS: u64 = 60_000;

pub fn now() -> ClockTime {
    let date = js_sys::Date::new_0();
    ClockTime::new(date.get_hours() as u8, date.get_minutes() as u8)
}

/// 今日の曜日（Date.getDay(): 0 = 日曜）
pub fn today() -> Day {
    Day::from_index(js_sys::Date::new_0().get_day()).unwrap_or(Day::Sunday)
}
