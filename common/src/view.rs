//! 表示状態（ステートマシン）
//!
//! 選択状態と読み込み状態を1つの構造体で持ち、遷移関数でのみ更新する。
//! 描画は `ViewModel::screen()` の純粋な射影として扱う。
//!
//! ```text
//! Loading ──finish_load──▶ Ready
//!    └──────fail─────────▶ Failed
//! ```
//! Ready / Failed はどちらも終端状態。

use crate::selection::{current_menu_items, MealCard};
use crate::types::{Day, Location, MenuCollection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 表示用の時刻（時:分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// ユーザーの選択状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub day: Day,
    /// 未選択は None
    pub location: Option<Location>,
}

/// 読み込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready(MenuCollection),
    Failed(String),
}

/// 描画内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Screen {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        clock: String,
        day: Day,
        location: Option<Location>,
        /// 食堂未選択なら空
        cards: Vec<MealCard>,
    },
}

/// 画面1つ分の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    selection: Selection,
    status: LoadStatus,
    clock: ClockTime,
}

impl ViewModel {
    /// マウント時の初期状態（Loading、曜日は今日、食堂は未選択）
    pub fn new(today: Day, clock: ClockTime) -> Self {
        Self {
            selection: Selection {
                day: today,
                location: None,
            },
            status: LoadStatus::Loading,
            clock,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn clock(&self) -> ClockTime {
        self.clock
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn select_day(&mut self, day: Day) {
        self.selection.day = day;
    }

    pub fn select_location(&mut self, location: Option<Location>) {
        self.selection.location = location;
    }

    pub fn tick(&mut self, clock: ClockTime) {
        self.clock = clock;
    }

    /// Loading → Ready
    ///
    /// Loading 以外からは遷移しない（戻り値 false）。
    pub fn finish_load(&mut self, menus: MenuCollection) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.status = LoadStatus::Ready(menus);
        true
    }

    /// Loading → Failed
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.status = LoadStatus::Failed(message.into());
        true
    }

    /// 現在の状態から描画内容を作る
    ///
    /// 読み込み中は選択状態にかかわらず Loading。
    pub fn screen(&self) -> Screen {
        match &self.status {
            LoadStatus::Loading => Screen::Loading,
            LoadStatus::Failed(message) => Screen::Failed {
                message: message.clone(),
            },
            LoadStatus::Ready(menus) => {
                let Selection { day, location } = self.selection;
                let cards = location
                    .and_then(|location| menus.get(location))
                    .map(|menu| current_menu_items(menu, day))
                    .unwrap_or_default();
                Screen::Ready {
                    clock: self.clock.to_string(),
                    day,
                    location,
                    cards,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DayMenu, Meal, MENU_NOT_AVAILABLE};

    fn collection() -> MenuCollection {
        Location::ALL
            .iter()
            .map(|&location| {
                let mut menu = DayMenu::new();
                menu.push_item(Meal::Breakfast, Day::Monday, format!("{} idli", location));
                (location, menu)
            })
            .collect()
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(ClockTime::new(7, 5).to_string(), "07:05");
        assert_eq!(ClockTime::new(23, 59).to_string(), "23:59");
    }

    #[test]
    fn test_loading_ignores_selection() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::new(8, 0));
        vm.select_location(Some(Location::North));
        vm.select_day(Day::Friday);

        assert_eq!(vm.screen(), Screen::Loading);
    }

    #[test]
    fn test_ready_without_location_has_no_cards() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::new(8, 0));
        assert!(vm.finish_load(collection()));

        match vm.screen() {
            Screen::Ready { cards, location, .. } => {
                assert!(cards.is_empty());
                assert_eq!(location, None);
            }
            other => panic!("Expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_ready_with_location_renders_four_cards() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::new(8, 30));
        vm.finish_load(collection());
        vm.select_location(Some(Location::Kadamba));

        let Screen::Ready { clock, day, cards, .. } = vm.screen() else {
            panic!("Expected Ready");
        };
        assert_eq!(clock, "08:30");
        assert_eq!(day, Day::Monday);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].items, ["kadamba idli"]);
        assert_eq!(cards[1].items, [MENU_NOT_AVAILABLE]);
    }

    #[test]
    fn test_select_day_changes_listing() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::default());
        vm.finish_load(collection());
        vm.select_location(Some(Location::South));
        vm.select_day(Day::Tuesday);

        let Screen::Ready { cards, .. } = vm.screen() else {
            panic!("Expected Ready");
        };
        assert!(cards.iter().all(|card| card.items == [MENU_NOT_AVAILABLE]));
    }

    #[test]
    fn test_tick_only_changes_clock() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::new(9, 0));
        vm.finish_load(collection());
        vm.select_location(Some(Location::North));
        let before = vm.screen();

        vm.tick(ClockTime::new(9, 1));
        let after = vm.screen();

        match (before, after) {
            (Screen::Ready { cards: a, clock: ca, .. }, Screen::Ready { cards: b, clock: cb, .. }) => {
                assert_eq!(a, b);
                assert_eq!(ca, "09:00");
                assert_eq!(cb, "09:01");
            }
            _ => panic!("Expected Ready"),
        }
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::default());
        assert!(vm.fail("network down"));
        assert!(!vm.finish_load(collection()));
        assert!(!vm.fail("again"));

        assert_eq!(
            vm.screen(),
            Screen::Failed {
                message: "network down".into()
            }
        );
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut vm = ViewModel::new(Day::Monday, ClockTime::default());
        vm.finish_load(collection());
        assert!(!vm.fail("late error"));
        assert!(!vm.finish_load(MenuCollection::default()));
        assert!(matches!(vm.status(), LoadStatus::Ready(menus) if menus.len() == 4));
    }

    #[test]
    fn test_screen_json_shape() {
        let mut vm = ViewModel::new(Day::Sunday, ClockTime::new(12, 0));
        vm.finish_load(collection());
        vm.select_location(Some(Location::Yuktahaar));

        let json = serde_json::to_value(vm.screen()).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["day"], "sunday");
        assert_eq!(json["location"], "yuktahaar");
        assert_eq!(json["cards"][0]["meal"], "breakfast");
    }
}
