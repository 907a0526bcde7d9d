// ==========================================
// 校园招聘管理系统 - 字段读取与校验
// ==========================================
// 职责: 按列读取原始行 + 类型转换 + 规则校验
// 约定: 每个字段最多产生一条错误；读取失败返回 None 且必记录错误
//       可选字段缺失返回 None 但不记录错误
// ==========================================

use crate::domain::{sheet_row_number, RawRow, ValidationError};
use crate::importer::data_cleaner::DataCleaner;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

lazy_static! {
    static ref ROLL_NUMBER_RE: Regex = Regex::new(r"^[A-Z0-9]+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
    static ref URL_RE: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

// ==========================================
// FieldReader - 单行字段读取器
// ==========================================
pub struct FieldReader<'a> {
    row: &'a RawRow,
    row_number: usize,
    cleaner: DataCleaner,
    errors: Vec<ValidationError>,
}

impl<'a> FieldReader<'a> {
    /// # 参数
    /// - row: 原始行
    /// - index: 0 基数据行下标（错误行号 = index + 2）
    pub fn new(row: &'a RawRow, index: usize) -> Self {
        Self {
            row,
            row_number: sheet_row_number(index),
            cleaner: DataCleaner,
            errors: Vec::new(),
        }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// 记录一条错误
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .push(ValidationError::new(self.row_number, field, message));
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    // ===== 文本 =====

    /// 可选文本（不校验）
    pub fn optional_text(&self, field: &str) -> Option<String> {
        self.cleaner.normalize_null(self.row.text(field))
    }

    /// 必填文本：去空白后非空
    pub fn required_text(&mut self, field: &str) -> Option<String> {
        let value = self.optional_text(field);
        if value.is_none() {
            self.reject(field, "必填字段为空");
        }
        value
    }

    /// 学号类标识：去空白、转大写、仅字母数字、长度受限
    pub fn identifier(&mut self, field: &str, min_len: usize, max_len: usize) -> Option<String> {
        let raw = self.required_text(field)?;
        let value = self.cleaner.clean_text(&raw, true);
        let len = value.chars().count();

        if !ROLL_NUMBER_RE.is_match(&value) || len < min_len || len > max_len {
            self.reject(
                field,
                format!(
                    "需为 {}-{} 位大写字母或数字: {}",
                    min_len, max_len, raw
                ),
            );
            return None;
        }
        Some(value)
    }

    /// 邮箱：local@domain.tld
    pub fn email(&mut self, field: &str) -> Option<String> {
        let value = self.required_text(field)?;
        if !EMAIL_RE.is_match(&value) {
            self.reject(field, format!("邮箱格式错误: {}", value));
            return None;
        }
        Some(value)
    }

    /// 手机号：10 位数字，首位 6-9
    pub fn phone(&mut self, field: &str) -> Option<String> {
        let value = self.required_text(field)?;
        if !PHONE_RE.is_match(&value) {
            self.reject(
                field,
                format!("手机号需为 6-9 开头的 10 位数字: {}", value),
            );
            return None;
        }
        Some(value)
    }

    /// 可选 URL：有值时必须以 http(s):// 开头
    pub fn optional_url(&mut self, field: &str) -> Option<String> {
        let value = self.optional_text(field)?;
        if !URL_RE.is_match(&value) {
            self.reject(
                field,
                format!("链接需以 http:// 或 https:// 开头: {}", value),
            );
            return None;
        }
        Some(value)
    }

    // ===== 枚举 =====

    /// 枚举字段：必须能被 parse 识别
    pub fn one_of<T, F>(&mut self, field: &str, parse: F, allowed: &[String]) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let value = self.required_text(field)?;
        match parse(&value) {
            Some(parsed) => Some(parsed),
            None => {
                self.reject(
                    field,
                    format!("取值不在允许范围内: {}（可选: {}）", value, allowed.join(" / ")),
                );
                None
            }
        }
    }

    /// 文本枚举：必须在允许列表中（精确匹配）
    pub fn allowed_text(&mut self, field: &str, allowed: &[String]) -> Option<String> {
        self.one_of(
            field,
            |v| allowed.iter().find(|a| a.as_str() == v).cloned(),
            allowed,
        )
    }

    // ===== 数值 =====

    /// 浮点数范围校验（max 为 None 表示无上限）
    pub fn float_in_range(&mut self, field: &str, min: f64, max: Option<f64>) -> Option<f64> {
        let value = self.required_text(field)?;
        let parsed = match value.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                self.reject(field, format!("无法解析为数字: {}", value));
                return None;
            }
        };

        let in_range = parsed >= min && max.map_or(true, |m| parsed <= m);
        if !in_range {
            self.reject(field, range_message(parsed, min, max));
            return None;
        }
        Some(parsed)
    }

    /// 整数范围校验
    pub fn int_in_range(&mut self, field: &str, min: i32, max: i32) -> Option<i32> {
        let value = self.required_text(field)?;
        let parsed = match value.parse::<i32>() {
            Ok(v) => v,
            Err(_) => {
                self.reject(field, format!("无法解析为整数: {}", value));
                return None;
            }
        };

        if parsed < min || parsed > max {
            self.reject(field, range_message(parsed, min, Some(max)));
            return None;
        }
        Some(parsed)
    }

    // ===== 日期 =====

    /// 日期：必须能解析为日历日期（不校验是否过期）
    pub fn date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.required_text(field)?;
        match self.cleaner.parse_date(&value) {
            Some(date) => Some(date),
            None => {
                self.reject(field, format!("无法解析为日期: {}", value));
                None
            }
        }
    }

    // ===== 多值 =====

    /// 多值文本列（逗号分隔）
    ///
    /// 必填列拆分后至少一项；可选列缺失返回空列表
    pub fn list(&mut self, field: &str, required: bool) -> Option<Vec<String>> {
        let items = self
            .optional_text(field)
            .map(|v| self.cleaner.split_multi_value(&v))
            .unwrap_or_default();

        if required && items.is_empty() {
            self.reject(field, "必填字段为空");
            return None;
        }
        Some(items)
    }

    /// 多值枚举列：每一项都必须可识别，且至少一项
    pub fn list_of<T, F>(&mut self, field: &str, parse: F, allowed: &[String]) -> Option<Vec<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        let items = self.list(field, true)?;

        let mut parsed = Vec::with_capacity(items.len());
        let mut unknown = Vec::new();
        for item in &items {
            match parse(item) {
                Some(v) => parsed.push(v),
                None => unknown.push(item.as_str()),
            }
        }

        if !unknown.is_empty() {
            self.reject(
                field,
                format!(
                    "取值不在允许范围内: {}（可选: {}）",
                    unknown.join(", "),
                    allowed.join(" / ")
                ),
            );
            return None;
        }
        Some(parsed)
    }
}

fn range_message<T: Display>(value: T, min: T, max: Option<T>) -> String {
    match max {
        Some(max) => format!("超出范围 [{}, {}]: {}", min, max, value),
        None => format!("不能小于 {}: {}", min, value),
    }
}
