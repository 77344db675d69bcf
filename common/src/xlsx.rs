//! スプレッドシートのデコード
//!
//! calamineでバイト列から先頭シートを読み込み、Worksheetに変換する。
//! 形式（xlsx / xls / xlsb / ods）は内容から自動判定される。

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// バイト列から先頭ワークシートをデコード
///
/// # Returns
/// * `Ok(Worksheet)` - 先頭シートのセルグリッド
/// * `Err(Error::Decode)` - 形式不明・破損・シートなし
pub fn decode_first_sheet(bytes: &[u8]) -> Result<Worksheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| Error::Decode(e.to_string()))?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::Decode("workbook has no worksheets".into()))?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| Error::Decode(format!("sheet '{}': {}", name, e)))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    let (row, col) = range.start().unwrap_or((0, 0));

    Ok(Worksheet::new(name, rows).with_origin(row, col))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // 数式エラー（#N/A 等）は空セル扱い
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_worksheet;
    use crate::types::{Day, Meal};
    use rust_xlsxwriter::Workbook;

    fn workbook_bytes(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Week").unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_decode_first_sheet() {
        let bytes = workbook_bytes(&[
            &["", "Monday", "Tuesday"],
            &["Breakfast", "Idli", "Poha"],
        ]);

        let sheet = decode_first_sheet(&bytes).unwrap();
        assert_eq!(sheet.name(), "Week");
        assert_eq!(sheet.cell(0, 1), "Monday");
        assert_eq!(sheet.cell(1, 0), "Breakfast");
        assert_eq!(sheet.cell(0, 0), "");
    }

    #[test]
    fn test_decode_then_parse() {
        let bytes = workbook_bytes(&[
            &["Menu"],
            &["", "Sunday", "Monday"],
            &["Dinner", "Paneer\nRoti", "Dal"],
        ]);

        let sheet = decode_first_sheet(&bytes).unwrap();
        let menu = parse_worksheet(&sheet);
        assert_eq!(menu.get(Meal::Dinner, Day::Sunday).unwrap(), ["Paneer", "Roti"]);
        assert_eq!(menu.get(Meal::Dinner, Day::Monday).unwrap(), ["Dal"]);
    }

    #[test]
    fn test_decode_origin_offset() {
        let bytes = workbook_bytes(&[&[], &["", "", "Lunch"]]);

        let sheet = decode_first_sheet(&bytes).unwrap();
        assert_eq!(sheet.origin(), (1, 2));
        assert_eq!(sheet.cell_at("C2"), Some("Lunch"));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_first_sheet(b"this is not a spreadsheet");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
