//! ワークシートパーサー
//!
//! メニュー表のセルグリッドを DayMenu（食事 → 曜日 → 品目リスト）に変換する。
//!
//! 対応レイアウト:
//! 1. 曜日列型: ヘッダー行に曜日、その左の列に食事区分のラベル。
//!    食事区分のラベル行から次のラベル行までがその食事の品目。
//! 2. 食事列型: ヘッダー行に食事区分、その左の列に曜日のラベル。
//!
//! どちらも1セルに改行・カンマ区切りで複数品目を書ける。

use crate::error::{Error, Result};
use crate::types::{Day, DayMenu, Meal};
use crate::worksheet::Worksheet;

/// ヘッダー行の検出結果
#[derive(Debug)]
enum Header {
    DayColumns(HeaderLayout<Day>),
    MealColumns(HeaderLayout<Meal>),
}

#[derive(Debug)]
struct HeaderLayout<K> {
    row: usize,
    label_col: usize,
    columns: Vec<(usize, K)>,
}

/// ワークシートを DayMenu に変換
///
/// レイアウトが認識できない場合もエラーにはせず、空の DayMenu を返す。
/// 空白セルは「品目なし」として扱う。
///
/// # Examples
/// ```
/// use mess_menu_common::{parse_worksheet, Day, Meal, Worksheet};
///
/// let sheet = Worksheet::from_rows([
///     vec!["", "Monday", "Tuesday"],
///     vec!["Breakfast", "Idli, Sambar", "Poha"],
/// ]);
/// let menu = parse_worksheet(&sheet);
/// assert_eq!(menu.get(Meal::Breakfast, Day::Monday).unwrap(), ["Idli", "Sambar"]);
/// ```
pub fn parse_worksheet(sheet: &Worksheet) -> DayMenu {
    match parse_worksheet_strict(sheet) {
        Ok(menu) => menu,
        Err(e) => {
            log::debug!("worksheet '{}' degraded to empty menu: {}", sheet.name(), e);
            DayMenu::new()
        }
    }
}

/// ワークシートを DayMenu に変換（厳格版）
///
/// # Returns
/// * `Ok(DayMenu)` - パース成功（品目が1つもない場合も含む）
/// * `Err(Error::MalformedLayout)` - ヘッダー行またはラベル列が見つからない
pub fn parse_worksheet_strict(sheet: &Worksheet) -> Result<DayMenu> {
    let header = find_header(sheet)?;

    let mut menu = DayMenu::new();
    match header {
        Header::DayColumns(layout) => {
            collect_sections(sheet, &layout, Meal::from_label, |meal, day, item| {
                menu.push_item(meal, day, item)
            });
        }
        Header::MealColumns(layout) => {
            collect_sections(sheet, &layout, Day::from_label, |day, meal, item| {
                menu.push_item(meal, day, item)
            });
        }
    }
    Ok(menu)
}

/// 1セルのテキストを品目に分割
///
/// 改行・カンマで区切り、前後の空白を除去して空の品目を捨てる。
pub fn split_items(cell: &str) -> impl Iterator<Item = String> + '_ {
    cell.split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
}

fn find_header(sheet: &Worksheet) -> Result<Header> {
    let no_label_column = |index: usize| {
        Error::MalformedLayout(format!(
            "no label column left of header row {} in sheet '{}'",
            index + 1,
            sheet.name()
        ))
    };

    for (index, row) in sheet.rows().enumerate() {
        if let Some(layout) = header_in_row(index, row, Day::from_label) {
            return layout
                .map(Header::DayColumns)
                .ok_or_else(|| no_label_column(index));
        }
        if let Some(layout) = header_in_row(index, row, Meal::from_label) {
            return layout
                .map(Header::MealColumns)
                .ok_or_else(|| no_label_column(index));
        }
    }

    Err(Error::MalformedLayout(format!(
        "no weekday or meal header row in sheet '{}'",
        sheet.name()
    )))
}

/// 行がヘッダー行かを判定
///
/// ラベルが2つ以上、または1つでも左にラベル列を取れる位置（2列目以降）にあればヘッダー行。
/// 角のセルは空欄でもよい。1列目だけがラベルの行はデータ行（もう一方のレイアウトのラベル列）とみなす。
///
/// 戻り値: `None` = ヘッダー行ではない、`Some(None)` = ヘッダー行だがラベル列がない
fn header_in_row<K: Copy>(
    index: usize,
    row: &[String],
    classify: fn(&str) -> Option<K>,
) -> Option<Option<HeaderLayout<K>>> {
    let columns: Vec<(usize, K)> = row
        .iter()
        .enumerate()
        .filter_map(|(col, cell)| classify(cell).map(|key| (col, key)))
        .collect();
    let (first_col, _) = *columns.first()?;

    if columns.len() < 2 && first_col == 0 {
        return None;
    }

    Some(first_col.checked_sub(1).map(|label_col| HeaderLayout {
        row: index,
        label_col,
        columns,
    }))
}

/// ヘッダー行より下の行を走査し、ラベル列の区切りごとに品目を集める
///
/// ラベル列が区切りキーなら新しい区切りを開始し、それ以外の行は直前の区切りに続く。
/// 最初の区切りより前の行は無視する。
fn collect_sections<S, K, F>(
    sheet: &Worksheet,
    layout: &HeaderLayout<K>,
    section_of: fn(&str) -> Option<S>,
    mut emit: F,
) where
    S: Copy,
    K: Copy,
    F: FnMut(S, K, String),
{
    let mut current: Option<S> = None;
    for row in (layout.row + 1)..sheet.height() {
        if let Some(section) = section_of(sheet.cell(row, layout.label_col)) {
            current = Some(section);
        }
        let Some(section) = current else {
            continue;
        };
        for &(col, key) in &layout.columns {
            for item in split_items(sheet.cell(row, col)) {
                emit(section, key, item);
            }
        }
    }
}
