use mess_menu_common::{Location, MenuCollection};
use std::time::Duration;
use thiserror::Error;

/// 1食堂分の読み込み失敗
///
/// 他の食堂には影響せず、その食堂は番兵値に置き換えられる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("HTTP error {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),
}

/// 読み込み結果
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub menus: MenuCollection,
    /// 番兵値に置き換えた食堂と原因
    pub failures: Vec<(Location, LoadError)>,
}

impl LoadOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failure(&self, location: Location) -> Option<&LoadError> {
        self.failures
            .iter()
            .find(|(failed, _)| *failed == location)
            .map(|(_, error)| error)
    }
}
