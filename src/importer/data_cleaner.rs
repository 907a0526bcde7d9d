// ==========================================
// 校园招聘管理系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / UPPER / NULL 标准化 / 多值拆分 / 日期解析
// ==========================================

use chrono::{Duration, NaiveDate};

/// 多值单元格分隔符
pub const MULTI_VALUE_SEPARATOR: char = ',';

/// 可接受的日期文本格式
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%Y%m%d",
    "%d %b %Y",
    "%d %B %Y",
    "%B %d, %Y",
];

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str, uppercase: bool) -> String {
        let trimmed = value.trim();
        if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        }
    }

    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 拆分多值单元格
    ///
    /// "React, Node.js , MongoDB" → ["React", "Node.js", "MongoDB"]
    /// 保序、逐项去空白、丢弃空项（尾随逗号）
    pub fn split_multi_value(&self, value: &str) -> Vec<String> {
        value
            .split(MULTI_VALUE_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 解析日期文本
    ///
    /// 纯数字不视为序列值；日期单元格由解析器直接给出 CellValue::Date
    pub fn parse_date(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        // ISO 时间戳只取日期部分
        let date_part = match value.split_once('T') {
            Some((date, _)) if date.len() == 10 => date,
            _ => value,
        };

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
                return Some(date);
            }
        }

        None
    }

    /// Excel 日期序列值 → 日期（1900 日期系统）
    pub fn excel_serial_to_date(&self, serial: f64) -> Option<NaiveDate> {
        // 1 = 1900-01-01；序列 60 对应 Excel 虚构的 1900-02-29，
        // 此处落到 1900-02-28（与序列 59 相同）；61 起与 Excel 一致
        if !serial.is_finite() || serial < 1.0 || serial >= 2_958_466.0 {
            return None;
        }
        let days = serial.floor() as i64;
        let base = if days < 60 {
            NaiveDate::from_ymd_opt(1899, 12, 31)?
        } else {
            NaiveDate::from_ymd_opt(1899, 12, 30)?
        };
        base.checked_add_signed(Duration::days(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text("  cs2021001 ", true), "CS2021001");
        assert_eq!(cleaner.clean_text("  Asha ", false), "Asha");
    }

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("   ".to_string())), None);
        assert_eq!(cleaner.normalize_null(None), None);
        assert_eq!(
            cleaner.normalize_null(Some(" x ".to_string())),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_split_multi_value_trims_and_keeps_order() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.split_multi_value("React, Node.js , MongoDB"),
            vec!["React", "Node.js", "MongoDB"]
        );
        assert_eq!(
            cleaner.split_multi_value("Python,SQL,Excel,"),
            vec!["Python", "SQL", "Excel"]
        );
        assert!(cleaner.split_multi_value(" , ,").is_empty());
    }

    #[test]
    fn test_parse_date_formats() {
        let cleaner = DataCleaner;
        let expected = NaiveDate::from_ymd_opt(2026, 12, 31);

        assert_eq!(cleaner.parse_date("2026-12-31"), expected);
        assert_eq!(cleaner.parse_date("2026/12/31"), expected);
        assert_eq!(cleaner.parse_date("31/12/2026"), expected);
        assert_eq!(cleaner.parse_date("31-12-2026"), expected);
        assert_eq!(cleaner.parse_date("20261231"), expected);
        assert_eq!(cleaner.parse_date("31 Dec 2026"), expected);
        assert_eq!(cleaner.parse_date("2026-12-31T00:00:00"), expected);
        assert_eq!(cleaner.parse_date("not a date"), None);
        assert_eq!(cleaner.parse_date("2026-02-30"), None);
    }

    #[test]
    fn test_parse_date_rejects_bare_numbers() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_date("7"), None);
        assert_eq!(cleaner.parse_date("8.5"), None);
        assert_eq!(cleaner.parse_date("45658"), None);
    }

    #[test]
    fn test_excel_serial_to_date() {
        let cleaner = DataCleaner;
        // 45658 = 2025-01-01
        assert_eq!(
            cleaner.excel_serial_to_date(45658.0),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(
            cleaner.excel_serial_to_date(59.0),
            NaiveDate::from_ymd_opt(1900, 2, 28)
        );
        assert_eq!(
            cleaner.excel_serial_to_date(60.0),
            NaiveDate::from_ymd_opt(1900, 2, 28)
        );
        assert_eq!(
            cleaner.excel_serial_to_date(61.0),
            NaiveDate::from_ymd_opt(1900, 3, 1)
        );
        assert_eq!(
            cleaner.excel_serial_to_date(1.0),
            NaiveDate::from_ymd_opt(1900, 1, 1)
        );
        assert_eq!(cleaner.excel_serial_to_date(-3.0), None);
    }
}
