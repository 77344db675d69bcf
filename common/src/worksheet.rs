//! ワークシート（セルのテキストグリッド）
//!
//! スプレッドシートのデコード結果をパーサーに渡すための中間表現。
//! セル値はすべて文字列化済みで、空セルは空文字列。

/// 1シート分のセルグリッド
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    name: String,
    /// 使用範囲の左上セル (行, 列)、0始まり
    origin: (u32, u32),
    rows: Vec<Vec<String>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            origin: (0, 0),
            rows,
        }
    }

    /// 文字列スライスから作成（主にテスト用）
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new("Sheet1", rows)
    }

    pub fn with_origin(mut self, row: u32, col: u32) -> Self {
        self.origin = (row, col);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> (u32, u32) {
        self.origin
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// 最も長い行の列数
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.trim().is_empty())
    }

    /// 使用範囲内の相対位置でセルを取得（範囲外は空文字列）
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// `B3` 形式の絶対アドレスでセルを取得
    pub fn cell_at(&self, address: &str) -> Option<&str> {
        let (row, col) = parse_address(address)?;
        let row = row.checked_sub(self.origin.0)?;
        let col = col.checked_sub(self.origin.1)?;
        Some(self.cell(row as usize, col as usize))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// `A1` 形式のアドレスを (行, 列) の0始まりインデックスに変換
///
/// `$A$1` の絶対参照記号は無視する。
pub fn parse_address(address: &str) -> Option<(u32, u32)> {
    let address = address.trim().replace('$', "");
    let split = address.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = address.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col.checked_mul(26)?.checked_add(value)?;
    }
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col - 1))
}
