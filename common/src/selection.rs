//! 表示用の品目選択
//!
//! 選択中の曜日で各食事区分の品目を引く。該当がなければ番兵値を返す。

use crate::types::{Day, DayMenu, Meal, MENU_NOT_AVAILABLE};
use serde::{Deserialize, Serialize};

/// カード1枚分（食事区分と品目）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCard {
    pub meal: Meal,
    pub items: Vec<String>,
}

impl MealCard {
    /// カードの見出し（"Breakfast"）
    pub fn title(&self) -> &'static str {
        self.meal.title()
    }

    /// カードのタグ（"BREAKFAST"）
    pub fn tag(&self) -> String {
        self.meal.as_str().to_uppercase()
    }
}

/// 1食事区分・1曜日の品目を取得
///
/// 曜日のエントリがなければ `["Menu not available"]`。
pub fn lookup_items(menu: &DayMenu, meal: Meal, day: Day) -> Vec<String> {
    menu.get(meal, day)
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| vec![MENU_NOT_AVAILABLE.to_string()])
}

/// 選択中の曜日の4区分を表示順で返す
pub fn current_menu_items(menu: &DayMenu, day: Day) -> Vec<MealCard> {
    Meal::ALL
        .iter()
        .map(|&meal| MealCard {
            meal,
            items: lookup_items(menu, meal, day),
        })
        .collect()
}
