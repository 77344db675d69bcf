//! メニューの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Meal / Day / Location: 固定の閉じた集合
//! - DayMenu: 食事 → 曜日 → 品目リスト
//! - MenuCollection: 食堂 → DayMenu

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 読み込み失敗・ルックアップ失敗時に表示する品目
pub const MENU_NOT_AVAILABLE: &str = "Menu not available";

/// 食事区分（表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Snacks, Meal::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Snacks => "snacks",
            Meal::Dinner => "dinner",
        }
    }

    /// 表示用の名前（先頭大文字）
    pub fn title(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Snacks => "Snacks",
            Meal::Dinner => "Dinner",
        }
    }

    /// セルのラベルから食事区分を判定
    ///
    /// 大文字小文字・前後の空白・末尾の `(7:30-9:30)` のような時間帯表記を無視する。
    pub fn from_label(label: &str) -> Option<Meal> {
        match normalize_label(label).as_str() {
            "breakfast" => Some(Meal::Breakfast),
            "lunch" => Some(Meal::Lunch),
            "snacks" | "snack" | "evening snacks" | "high tea" => Some(Meal::Snacks),
            "dinner" | "supper" => Some(Meal::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Meal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Meal::from_label(s).ok_or_else(|| {
            format!("Unknown meal: {}. Use breakfast, lunch, snacks, or dinner", s)
        })
    }
}

/// 曜日（日曜始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// 0 = 日曜 … 6 = 土曜
    pub fn from_index(index: u32) -> Option<Day> {
        Day::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// 小文字の曜日名（DayMenuのキー）
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// セルのラベルから曜日を判定
    ///
    /// フルネームと3文字以上の略称（`Mon`, `Tues`, `THU.`）を受け付ける。
    /// `Monday (12/05)` のように後ろに続く語は無視する。
    pub fn from_label(label: &str) -> Option<Day> {
        let normalized = normalize_label(label);
        let word = normalized.split_whitespace().next()?;
        let word = word.trim_end_matches(['.', ':']);
        if word.len() < 3 {
            return None;
        }
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.as_str().starts_with(word))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Day::from_label(s).ok_or_else(|| format!("Unknown day: {}. Use sunday..saturday", s))
    }
}

/// 食堂（固定の4か所）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Yuktahaar,
    Kadamba,
    North,
    South,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Yuktahaar,
        Location::Kadamba,
        Location::North,
        Location::South,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Yuktahaar => "yuktahaar",
            Location::Kadamba => "kadamba",
            Location::North => "north",
            Location::South => "south",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Location::Yuktahaar => "Yuktahaar",
            Location::Kadamba => "Kadamba",
            Location::North => "North",
            Location::South => "South",
        }
    }

    /// `yuktahaar.xlsx` 形式のファイル名
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.as_str(), extension.trim_start_matches('.'))
    }

    /// `/data/<location>.<ext>` 形式のリソースパス
    pub fn resource_path(&self, extension: &str) -> String {
        format!("/data/{}", self.file_name(extension))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Location::ALL
            .iter()
            .copied()
            .find(|location| location.as_str() == normalized)
            .ok_or_else(|| {
                format!("Unknown mess: {}. Use yuktahaar, kadamba, north, or south", s)
            })
    }
}

type MealTable = BTreeMap<Meal, BTreeMap<Day, Vec<String>>>;

/// 1食堂分の週間メニュー
///
/// 全ての食事区分のキーは常に存在する。曜日のエントリは品目がある場合のみ存在し、
/// 空のリストで埋めることはしない（呼び出し側が明示的に設定した場合を除く）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MealTable", into = "MealTable")]
pub struct DayMenu {
    meals: MealTable,
}

impl DayMenu {
    pub fn new() -> Self {
        Self {
            meals: Meal::ALL.iter().map(|&meal| (meal, BTreeMap::new())).collect(),
        }
    }

    /// 読み込み失敗時の番兵値
    ///
    /// 全ての食事区分で `day` のエントリが `["Menu not available"]` になる。
    pub fn unavailable(day: Day) -> Self {
        let mut menu = Self::new();
        for meal in Meal::ALL {
            menu.set_items(meal, day, vec![MENU_NOT_AVAILABLE.to_string()]);
        }
        menu
    }

    pub fn get(&self, meal: Meal, day: Day) -> Option<&[String]> {
        self.meals
            .get(&meal)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
    }

    /// 食事区分ごとの曜日マップ
    pub fn days(&self, meal: Meal) -> impl Iterator<Item = (Day, &[String])> {
        self.meals
            .get(&meal)
            .into_iter()
            .flat_map(|days| days.iter().map(|(day, items)| (*day, items.as_slice())))
    }

    /// 品目を末尾に追加
    pub fn push_item(&mut self, meal: Meal, day: Day, item: String) {
        self.meals
            .entry(meal)
            .or_default()
            .entry(day)
            .or_default()
            .push(item);
    }

    /// エントリを丸ごと置き換え
    pub fn set_items(&mut self, meal: Meal, day: Day, items: Vec<String>) {
        self.meals.entry(meal).or_default().insert(day, items);
    }

    /// どの食事区分にも曜日エントリがない
    pub fn is_empty(&self) -> bool {
        self.meals.values().all(BTreeMap::is_empty)
    }

    /// いずれかのエントリが番兵値
    pub fn contains_sentinel(&self) -> bool {
        self.meals
            .values()
            .flat_map(BTreeMap::values)
            .any(|items| is_sentinel(items))
    }

    /// 全エントリが番兵値（読み込み失敗した食堂）
    pub fn is_unavailable(&self) -> bool {
        !self.is_empty()
            && self
                .meals
                .values()
                .flat_map(BTreeMap::values)
                .all(|items| is_sentinel(items))
    }
}

impl Default for DayMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MealTable> for DayMenu {
    fn from(table: MealTable) -> Self {
        let mut menu = Self::new();
        for (meal, days) in table {
            for (day, items) in days {
                menu.set_items(meal, day, items);
            }
        }
        menu
    }
}

impl From<DayMenu> for MealTable {
    fn from(menu: DayMenu) -> Self {
        menu.meals
    }
}

fn is_sentinel(items: &[String]) -> bool {
    matches!(items, [only] if only == MENU_NOT_AVAILABLE)
}

/// 全食堂のメニュー
///
/// 読み込みごとに丸ごと作り直し、部分的な更新はしない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCollection {
    menus: BTreeMap<Location, DayMenu>,
}

impl MenuCollection {
    pub fn get(&self, location: Location) -> Option<&DayMenu> {
        self.menus.get(&location)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// 4か所すべてのメニューが揃っている
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn missing(&self) -> Vec<Location> {
        Location::ALL
            .iter()
            .copied()
            .filter(|location| !self.menus.contains_key(location))
            .collect()
    }

    pub fn has_sentinel(&self) -> bool {
        self.menus.values().any(DayMenu::contains_sentinel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, &DayMenu)> {
        self.menus.iter().map(|(location, menu)| (*location, menu))
    }
}

impl FromIterator<(Location, DayMenu)> for MenuCollection {
    fn from_iter<I: IntoIterator<Item = (Location, DayMenu)>>(iter: I) -> Self {
        Self {
            menus: iter.into_iter().collect(),
        }
    }
}

/// 小文字化・前後空白除去・括弧以降の除去
fn normalize_label(label: &str) -> String {
    let head = label.split('(').next().unwrap_or_default();
    head.trim().trim_end_matches(':').trim().to_lowercase()
}
