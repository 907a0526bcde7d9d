// ==========================================
// 校园招聘管理系统 - 批量导入中间结构
// ==========================================
// 用途: 文件解析 → 行校验 → 汇总 的中间产物
// 生命周期: RawRow / ValidationError 仅在单次导入内存在
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Number(f64),
    /// 工作簿中带日期格式的单元格
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    /// 从文本构造；去空白后为空即视为 Empty
    pub fn from_text(value: impl Into<String>) -> CellValue {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) | CellValue::Date(_) => false,
        }
    }

    /// 转为去空白文本；整数值的数字不带小数点（手机号、年份）
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            CellValue::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text().unwrap_or_default())
    }
}

// ==========================================
// RawRow - 解析后的原始行
// ==========================================
// 保持列顺序（与表头顺序一致）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 (列名, 文本) 对构造，主要用于表单入口与测试
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = RawRow::new();
        for (key, value) in pairs {
            row.insert(key, CellValue::from_text(value));
        }
        row
    }

    /// 写入单元格；同名列覆盖原值
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// 列文本（缺列或空单元格返回 None）
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).and_then(CellValue::to_text)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 所有单元格均为空
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, value)| value.is_empty())
    }
}

// ==========================================
// ValidationError - 行级校验错误
// ==========================================
// row: 1 基行号，已加表头偏移（index + 2），与表格软件行号一致
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "第 {} 行 [{}]: {}", self.row, self.field, self.message)
    }
}

/// 0 基数据行下标 → 表格行号（第 1 行为表头）
pub fn sheet_row_number(index: usize) -> usize {
    index + 2
}

// ==========================================
// ImportResult - 导入结果
// ==========================================
// 不变式: valid_records.len() + 错误涉及的不同行数 == total_rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult<T> {
    pub valid_records: Vec<T>,
    pub errors: Vec<ValidationError>,
    pub total_rows: usize,
}

impl<T> ImportResult<T> {
    pub fn new(total_rows: usize) -> Self {
        Self {
            valid_records: Vec::new(),
            errors: Vec::new(),
            total_rows,
        }
    }

    /// 至少有一个错误的行数
    pub fn invalid_row_count(&self) -> usize {
        self.errors
            .iter()
            .map(|e| e.row)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn valid_row_count(&self) -> usize {
        self.valid_records.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 每行要么产出记录，要么产出错误
    pub fn is_partition_complete(&self) -> bool {
        self.valid_row_count() + self.invalid_row_count() == self.total_rows
    }

    /// 生成校验页汇总
    ///
    /// # 参数
    /// - group_by: 有效记录的分组键（院系 / 岗位类型）
    /// - preview_limit: 错误预览条数上限
    pub fn summarize<F>(&self, group_by: F, preview_limit: usize) -> ImportSummary
    where
        F: Fn(&T) -> String,
    {
        let mut groups = BTreeMap::new();
        for record in &self.valid_records {
            *groups.entry(group_by(record)).or_insert(0) += 1;
        }

        let error_preview: Vec<ValidationError> =
            self.errors.iter().take(preview_limit).cloned().collect();
        let hidden_errors = self.errors.len() - error_preview.len();

        ImportSummary {
            total_rows: self.total_rows,
            valid_rows: self.valid_row_count(),
            invalid_rows: self.invalid_row_count(),
            error_count: self.errors.len(),
            groups,
            error_preview,
            hidden_errors,
        }
    }
}

// ==========================================
// ImportSummary - 校验页汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub error_count: usize,
    pub groups: BTreeMap<String, usize>, // 有效记录分组计数
    pub error_preview: Vec<ValidationError>,
    pub hidden_errors: usize, // 预览之外的错误数
}

impl ImportSummary {
    /// 错误预览文本，超出部分以 "还有 K 条" 结尾
    pub fn preview_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.error_preview.iter().map(|e| e.to_string()).collect();
        if self.hidden_errors > 0 {
            lines.push(format!("... 还有 {} 条错误", self.hidden_errors));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_number_rendering() {
        assert_eq!(
            CellValue::Number(9876543210.0).to_text(),
            Some("9876543210".to_string())
        );
        assert_eq!(CellValue::Number(8.75).to_text(), Some("8.75".to_string()));
        assert_eq!(CellValue::Text("  ".to_string()).to_text(), None);
        assert_eq!(
            CellValue::Date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).to_text(),
            Some("2026-01-01".to_string())
        );
        assert_eq!(CellValue::Empty.to_text(), None);
    }

    #[test]
    fn test_raw_row_keeps_column_order_and_overwrites() {
        let mut row = RawRow::from_pairs([("b", "1"), ("a", "2")]);
        row.insert("b", CellValue::Number(3.0));

        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["b", "a"]);
        assert_eq!(row.text("b"), Some("3".to_string()));
        assert_eq!(row.text("missing"), None);
    }

    #[test]
    fn test_raw_row_blank_detection() {
        let row = RawRow::from_pairs([("a", " "), ("b", "")]);
        assert!(row.is_blank());

        let row = RawRow::from_pairs([("a", " "), ("b", "x")]);
        assert!(!row.is_blank());
    }

    #[test]
    fn test_summary_preview_and_groups() {
        let mut result: ImportResult<&str> = ImportResult::new(14);
        result.valid_records = vec!["CSE", "CSE", "IT"];
        for i in 0..11 {
            result
                .errors
                .push(ValidationError::new(sheet_row_number(i + 3), "email", "邮箱格式错误"));
        }

        let summary = result.summarize(|r| r.to_string(), 10);

        assert_eq!(summary.valid_rows, 3);
        assert_eq!(summary.invalid_rows, 11);
        assert_eq!(summary.groups.get("CSE"), Some(&2));
        assert_eq!(summary.error_preview.len(), 10);
        assert_eq!(summary.hidden_errors, 1);
        assert!(summary.preview_lines().last().unwrap().contains("1"));
        assert!(result.is_partition_complete());
    }

    #[test]
    fn test_invalid_row_count_counts_distinct_rows() {
        let mut result: ImportResult<()> = ImportResult::new(1);
        result.errors.push(ValidationError::new(2, "email", "x"));
        result.errors.push(ValidationError::new(2, "phone", "y"));

        assert_eq!(result.invalid_row_count(), 1);
        assert!(result.is_partition_complete());
    }
}
