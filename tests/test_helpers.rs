// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成测试用 xlsx / CSV 表格与标准行数据
// ==========================================

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 表格单元格
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// 带日期格式的单元格
    Date(NaiveDate),
    Empty,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

pub const STUDENT_HEADER: [&str; 10] = [
    "rollNumber",
    "name",
    "email",
    "phone",
    "department",
    "batch",
    "year",
    "cgpa",
    "linkedinUrl",
    "githubUrl",
];

pub const JOB_HEADER: [&str; 9] = [
    "title",
    "description",
    "requirements",
    "ctc",
    "location",
    "jobType",
    "eligibilityDepartments",
    "minCGPA",
    "deadline",
];

/// 合法学生行（数字列使用数值单元格）
pub fn student_cells(roll: &str, email: &str, department: &str, cgpa: Cell) -> Vec<Cell> {
    vec![
        roll.into(),
        "Asha Verma".into(),
        email.into(),
        Cell::Number(9876543210.0),
        department.into(),
        "2022-2026".into(),
        Cell::Number(2026.0),
        cgpa,
        "https://linkedin.com/in/asha".into(),
        Cell::Empty,
    ]
}

/// 合法岗位行
pub fn job_cells(title: &str, requirements: &str, deadline: Cell) -> Vec<Cell> {
    vec![
        title.into(),
        "Build and maintain reporting pipelines".into(),
        requirements.into(),
        Cell::Number(12.5),
        "Bengaluru".into(),
        "Full-time".into(),
        "CSE, IT".into(),
        Cell::Number(7.0),
        deadline,
    ]
}

/// 写出 xlsx 临时文件（第一行为表头）
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn create_xlsx(header: &[&str], rows: &[Vec<Cell>]) -> Result<NamedTempFile, Box<dyn Error>> {
    let temp_file = tempfile::Builder::new().suffix(".xlsx").tempfile()?;

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    for (row_index, row) in rows.iter().enumerate() {
        let row_num = (row_index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col as u16, text.as_str())?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row_num, col as u16, *number)?;
                }
                Cell::Date(date) => {
                    let datetime = ExcelDateTime::from_ymd(
                        date.year() as u16,
                        date.month() as u8,
                        date.day() as u8,
                    )?;
                    worksheet.write_datetime_with_format(
                        row_num,
                        col as u16,
                        &datetime,
                        &date_format,
                    )?;
                }
                Cell::Empty => {}
            }
        }
    }
    workbook.save(temp_file.path())?;

    Ok(temp_file)
}

/// 写出 CSV 临时文件
pub fn create_csv(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    Ok(temp_file)
}

/// 写出任意内容、指定后缀的临时文件
pub fn create_file_with_suffix(
    suffix: &str,
    content: &[u8],
) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    temp_file.write_all(content)?;
    temp_file.flush()?;
    Ok(temp_file)
}
