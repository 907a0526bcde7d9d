// ==========================================
// 校园招聘管理系统 - 导入组件 Trait
// ==========================================
// 职责: 定义文件解析与记录类型模式接口（不包含实现）
// ==========================================

use crate::domain::{RawRow, Record, ValidationError};
use crate::importer::error::ImporterResult;
use crate::importer::file_parser::FileFormat;
use crate::importer::template::TemplateCell;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 表格文件 → 原始行
// 实现者: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 第一张工作表的数据行（首行为表头，空白行已跳过）
    /// - Err: 文件不存在 / 格式不支持 / 无法解码；不返回部分结果
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImporterResult<Vec<RawRow>>;

    /// 解析内存中的文件内容（上传控件直接给出字节流）
    ///
    /// # 参数
    /// - format: 由上传文件名确定的格式；内容与格式不符时返回 MalformedFile
    fn parse_bytes(&self, bytes: &[u8], format: FileFormat) -> ImporterResult<Vec<RawRow>>;
}

// ==========================================
// RecordSchema Trait
// ==========================================
// 用途: 记录类型模式（学生 / 岗位），承载列定义、逐行校验与映射
// 实现者: StudentSchema, JobSchema
pub trait RecordSchema: Send + Sync {
    type Record: Record;

    /// 模式名称（日志与模板工作表名）
    fn name(&self) -> &'static str;

    /// 期望的列名（模板表头顺序）
    fn columns(&self) -> &'static [&'static str];

    /// 业务键所在列（重复检测错误挂在此列）
    fn key_field(&self) -> &'static str;

    /// 校验并映射单行
    ///
    /// # 参数
    /// - row: 原始行
    /// - index: 0 基数据行下标
    ///
    /// # 返回
    /// - Ok(Record): 所有规则通过，附带新生成的 id 与默认字段
    /// - Err(Vec<ValidationError>): 至少一条错误；所有规则都会执行
    fn build_record(
        &self,
        row: &RawRow,
        index: usize,
    ) -> Result<Self::Record, Vec<ValidationError>>;

    /// 只校验不映射
    fn validate_row(&self, row: &RawRow, index: usize) -> Vec<ValidationError> {
        self.build_record(row, index).err().unwrap_or_default()
    }

    /// 从原始行读取业务键（未通过校验的行也可读取）
    fn row_key(&self, row: &RawRow) -> Option<String>;

    /// 校验页分组键
    fn group_key(&self, record: &Self::Record) -> String;

    /// 模板示例行（必须能通过 build_record）
    fn template_rows(&self) -> Vec<Vec<TemplateCell>>;
}
