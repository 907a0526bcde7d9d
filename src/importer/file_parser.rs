// ==========================================
// 校园招聘管理系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls/.xlsb/.ods) / CSV (.csv)
// 约定: 仅读取第一张工作表；首行为表头；空白行跳过
// 注意: 中间的空白行也会跳过，其后各行的行号（下标 + 2）
//       比表格中实际行号小，错误行号以解析后的数据行为准
// ==========================================

use crate::domain::{CellValue, RawRow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImporterResult};
use crate::importer::importer_trait::FileParser;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use csv::ReaderBuilder;
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

// ==========================================
// FileFormat - 文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Excel,
    Csv,
}

impl FileFormat {
    /// 按扩展名判断格式
    pub fn from_path(path: &Path) -> ImporterResult<FileFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" | "xls" | "xlsb" | "xlsm" | "ods" => Ok(FileFormat::Excel),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    /// 按上传文件名判断格式
    pub fn from_file_name(file_name: &str) -> ImporterResult<FileFormat> {
        FileFormat::from_path(Path::new(file_name))
    }

    fn ensure_declared(self, declared: FileFormat) -> ImporterResult<()> {
        if self == declared {
            Ok(())
        } else {
            Err(ImportError::UnsupportedFormat(declared.to_string()))
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Excel => write!(f, "Excel"),
            FileFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// 读取文件内容（先检查存在性）
fn read_file(path: &Path) -> ImporterResult<Vec<u8>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

/// 按表头组装一行；超出表头的列与空表头列丢弃
fn assemble_row<I>(headers: &[String], cells: I) -> RawRow
where
    I: IntoIterator<Item = CellValue>,
{
    let mut row = RawRow::new();
    for (header, value) in headers.iter().zip(cells) {
        if header.is_empty() {
            continue;
        }
        row.insert(header.clone(), value);
    }
    row
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImporterResult<Vec<RawRow>> {
        // 检查扩展名
        if FileFormat::from_path(file_path)? != FileFormat::Csv {
            return Err(ImportError::UnsupportedFormat(
                file_path.display().to_string(),
            ));
        }

        let bytes = read_file(file_path)?;
        self.parse_bytes(&bytes, FileFormat::Csv)
    }

    fn parse_bytes(&self, bytes: &[u8], format: FileFormat) -> ImporterResult<Vec<RawRow>> {
        FileFormat::Csv.ensure_declared(format)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::MalformedFile("缺少表头行".to_string()));
        }

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row = assemble_row(&headers, record.iter().map(CellValue::from_text));

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), columns = headers.len(), "CSV 解析完成");
        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// calamine 单元格 → CellValue
    fn cell_value(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            // 仅带日期格式的单元格才按序列值换算为日期
            Data::DateTime(dt) if dt.is_datetime() => DataCleaner
                .excel_serial_to_date(dt.as_f64())
                .map(CellValue::Date)
                .unwrap_or(CellValue::Number(dt.as_f64())),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) => DataCleaner
                .parse_date(s)
                .map(CellValue::Date)
                .unwrap_or_else(|| CellValue::from_text(s.trim())),
            Data::String(s) => CellValue::from_text(s.trim()),
            other => CellValue::from_text(other.to_string().trim()),
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImporterResult<Vec<RawRow>> {
        // 检查扩展名
        if FileFormat::from_path(file_path)? != FileFormat::Excel {
            return Err(ImportError::UnsupportedFormat(
                file_path.display().to_string(),
            ));
        }

        let bytes = read_file(file_path)?;
        self.parse_bytes(&bytes, FileFormat::Excel)
    }

    fn parse_bytes(&self, bytes: &[u8], format: FileFormat) -> ImporterResult<Vec<RawRow>> {
        FileFormat::Excel.ensure_declared(format)?;

        // 打开工作簿（格式由内容判断，改扩展名的文本文件在此失败）
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

        // 读取第一个 sheet
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::EmptyWorkbook)??;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::MalformedFile("缺少表头行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut records = Vec::new();
        for data_row in rows {
            let row = assemble_row(&headers, data_row.iter().map(Self::cell_value));

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            records.push(row);
        }

        debug!(rows = records.len(), columns = headers.len(), "Excel 解析完成");
        Ok(records)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImporterResult<Vec<RawRow>> {
        match FileFormat::from_path(file_path)? {
            FileFormat::Csv => CsvParser.parse_to_raw_rows(file_path),
            FileFormat::Excel => ExcelParser.parse_to_raw_rows(file_path),
        }
    }

    fn parse_bytes(&self, bytes: &[u8], format: FileFormat) -> ImporterResult<Vec<RawRow>> {
        match format {
            FileFormat::Csv => CsvParser.parse_bytes(bytes, format),
            FileFormat::Excel => ExcelParser.parse_bytes(bytes, format),
        }
    }
}
