//! システム時計
//!
//! 表示用の時刻（60秒ごとに更新）と、起動時の曜日を扱う。
//! 時計タスクは ClockGuard が所有し、ガードの破棄で必ず停止する。

use chrono::{Datelike, Local, Timelike, Weekday};
use mess_menu_common::{ClockTime, Day};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// 時計の更新間隔
pub const CLOCK_PERIOD: Duration = Duration::from_secs(60);

pub fn now() -> ClockTime {
    let time = Local::now();
    ClockTime::new(time.hour() as u8, time.minute() as u8)
}

pub fn today() -> Day {
    day_of(Local::now().weekday())
}

pub fn day_of(weekday: Weekday) -> Day {
    match weekday {
        Weekday::Sun => Day::Sunday,
        Weekday::Mon => Day::Monday,
        Weekday::Tue => Day::Tuesday,
        Weekday::Wed => Day::Wednesday,
        Weekday::Thu => Day::Thursday,
        Weekday::Fri => Day::Friday,
        Weekday::Sat => Day::Saturday,
    }
}

/// 時計タスクの所有者（Dropでタスクを中断）
pub struct ClockGuard {
    handle: JoinHandle<()>,
}

impl ClockGuard {
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ClockGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// 時計タスクを開始
///
/// `period` ごとに現在時刻を送る。受信側は `changed()` で更新を待つ。
pub fn start_clock(period: Duration) -> (ClockGuard, watch::Receiver<ClockTime>) {
    let (tx, rx) = watch::channel(now());
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // 初回のtickは即時に完了する
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(now()).is_err() {
                break;
            }
        }
    });
    (ClockGuard { handle }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_weekday() {
        assert_eq!(day_of(Weekday::Sun), Day::Sunday);
        assert_eq!(day_of(Weekday::Wed), Day::Wednesday);
        for weekday in [Weekday::Mon, Weekday::Thu, Weekday::Sat] {
            assert_eq!(
                day_of(weekday).index(),
                weekday.num_days_from_sunday()
            );
        }
    }

    #[tokio::test]
    async fn test_clock_ticks() {
        let (guard, mut rx) = start_clock(Duration::from_millis(10));

        let changed = tokio::time::timeout(Duration::from_secs(2), rx.changed()).await;
        assert!(matches!(changed, Ok(Ok(()))));
        assert!(guard.is_running());
    }

    #[tokio::test]
    async fn test_clock_stops_when_guard_dropped() {
        let (guard, mut rx) = start_clock(Duration::from_millis(10));
        drop(guard);

        // 送信側が破棄されるまで残りの更新を読み捨てる
        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(drained.is_ok());
    }
}
