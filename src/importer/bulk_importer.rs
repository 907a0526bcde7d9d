// ==========================================
// 校园招聘管理系统 - 批量导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到内存集合
// 流程: 解析 → 逐行校验 → (重复检测) → 映射 → 汇总 → 确认提交
// 红线: 行级问题只进 errors；只有文件级失败才返回 Err
//       含任何错误的行不产出记录
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::{sheet_row_number, ImportResult, ImportSummary, RawRow, ValidationError};
use crate::importer::conflict_handler::ConflictHandler;
use crate::importer::error::{ImportError, ImporterResult};
use crate::importer::file_parser::{FileFormat, UniversalFileParser};
use crate::importer::importer_trait::{FileParser, RecordSchema};
use crate::repository::RecordRepository;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// BulkImporter - 批量导入器
// ==========================================
pub struct BulkImporter<S: RecordSchema> {
    schema: S,
    file_parser: Box<dyn FileParser>,
    conflict_handler: ConflictHandler,

    // 配置
    reject_duplicates: bool,
    error_preview_limit: usize,

    // 目标集合中已有的业务键（仅重复检测使用）
    existing_keys: HashSet<String>,
}

impl<S: RecordSchema> BulkImporter<S> {
    /// 创建导入器
    ///
    /// # 参数
    /// - schema: 记录类型模式（学生 / 岗位）
    /// - config: 配置读取器
    pub fn new<C: ImportConfigReader + ?Sized>(schema: S, config: &C) -> Self {
        Self {
            schema,
            file_parser: Box::new(UniversalFileParser),
            conflict_handler: ConflictHandler,
            reject_duplicates: config.reject_duplicates(),
            error_preview_limit: config.error_preview_limit(),
            existing_keys: HashSet::new(),
        }
    }

    /// 替换文件解析器
    pub fn with_parser(mut self, file_parser: Box<dyn FileParser>) -> Self {
        self.file_parser = file_parser;
        self
    }

    /// 设置目标集合已有业务键
    pub fn with_existing_keys(mut self, existing_keys: HashSet<String>) -> Self {
        self.existing_keys = existing_keys;
        self
    }

    /// 从仓储读取已有业务键
    pub fn with_existing_from(
        self,
        repo: &dyn RecordRepository<S::Record>,
    ) -> ImporterResult<Self> {
        let keys = repo
            .existing_keys()
            .map_err(|e| ImportError::Other(anyhow::anyhow!(e)))?;
        Ok(self.with_existing_keys(keys))
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    // ===== 阶段 1: 解析 =====

    /// 解析文件为原始行；无法解码时整体失败
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImporterResult<Vec<RawRow>> {
        let rows = self.file_parser.parse_to_raw_rows(file_path.as_ref())?;
        self.ensure_known_columns(&rows)?;
        Ok(rows)
    }

    /// 解析上传控件给出的字节流
    ///
    /// # 参数
    /// - format: 由上传文件名确定（FileFormat::from_file_name）
    pub fn parse_bytes(&self, bytes: &[u8], format: FileFormat) -> ImporterResult<Vec<RawRow>> {
        let rows = self.file_parser.parse_bytes(bytes, format)?;
        self.ensure_known_columns(&rows)?;
        Ok(rows)
    }

    // ===== 阶段 2: 校验 =====

    /// 校验单行（纯函数）
    ///
    /// # 参数
    /// - row: 原始行
    /// - index: 0 基数据行下标；错误行号为 index + 2
    pub fn validate_row(&self, row: &RawRow, index: usize) -> Vec<ValidationError> {
        self.schema.validate_row(row, index)
    }

    /// 单条录入边界（表单提交与批量导入同一套规则）
    pub fn validate_record(&self, row: &RawRow) -> Result<S::Record, Vec<ValidationError>> {
        self.schema.build_record(row, 0)
    }

    // ===== 阶段 3: 处理 =====

    /// 逐行校验并映射
    pub fn process_rows(&self, rows: &[RawRow]) -> ImportResult<S::Record> {
        let mut result = ImportResult::new(rows.len());

        // 重复检测（可选）
        let duplicate_errors = self.detect_duplicates(rows);

        for (index, row) in rows.iter().enumerate() {
            let built = self.schema.build_record(row, index);
            let duplicate = duplicate_errors.get(&sheet_row_number(index));

            match (built, duplicate) {
                (Ok(record), None) => result.valid_records.push(record),
                (Ok(_), Some(dup)) => {
                    warn!(row = dup.row, "重复业务键，已拒绝");
                    result.errors.push(dup.clone());
                }
                (Err(mut errors), dup) => {
                    debug!(row = sheet_row_number(index), errors = errors.len(), "行校验失败");
                    if let Some(dup) = dup {
                        // 业务键列已有格式错误时不再追加重复错误
                        if !errors.iter().any(|e| e.field == dup.field) {
                            errors.push(dup.clone());
                        }
                    }
                    result.errors.append(&mut errors);
                }
            }
        }

        result
    }

    /// 解析并处理文件
    #[instrument(skip(self, file_path), fields(schema = self.schema.name()))]
    pub fn process_file<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImporterResult<ImportResult<S::Record>> {
        let start_time = Instant::now();
        let file_path = file_path.as_ref();
        info!(file_path = %file_path.display(), "开始处理导入文件");

        let rows = self.parse(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;

        let result = self.process_rows(&rows);
        self.log_result(&result, start_time);
        Ok(result)
    }

    /// 解析并处理字节流
    #[instrument(skip(self, bytes), fields(schema = self.schema.name(), size = bytes.len(), format = %format))]
    pub fn process_bytes(
        &self,
        bytes: &[u8],
        format: FileFormat,
    ) -> ImporterResult<ImportResult<S::Record>> {
        let start_time = Instant::now();

        let rows = self.parse_bytes(bytes, format).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;

        let result = self.process_rows(&rows);
        self.log_result(&result, start_time);
        Ok(result)
    }

    /// 校验页汇总
    pub fn summarize(&self, result: &ImportResult<S::Record>) -> ImportSummary {
        result.summarize(|r| self.schema.group_key(r), self.error_preview_limit)
    }

    // ===== 阶段 4: 提交 =====

    /// 确认提交
    ///
    /// # 参数
    /// - result: 校验结果（仅 valid_records 被提交）
    /// - append: 调用方提供的追加函数，一次性接收全部有效记录
    ///
    /// # 返回
    /// - Ok(usize): 提交条数
    /// - Err(CommitFailed): append 失败，视为未提交任何记录
    pub fn commit<F, E>(&self, result: ImportResult<S::Record>, append: F) -> ImporterResult<usize>
    where
        F: FnOnce(Vec<S::Record>) -> Result<(), E>,
        E: Display,
    {
        let count = result.valid_records.len();
        append(result.valid_records).map_err(|e| {
            error!(schema = self.schema.name(), error = %e, "导入提交失败");
            ImportError::CommitFailed(e.to_string())
        })?;

        info!(schema = self.schema.name(), committed = count, "导入提交完成");
        Ok(count)
    }

    /// 提交到仓储
    pub fn commit_to(
        &self,
        result: ImportResult<S::Record>,
        repo: &dyn RecordRepository<S::Record>,
    ) -> ImporterResult<usize> {
        self.commit(result, |records| repo.append(records).map(|_| ()))
    }

    // ===== 辅助方法 =====

    /// 有数据行但没有任何一列属于本模式时，视为不是对应的导入表格
    fn ensure_known_columns(&self, rows: &[RawRow]) -> ImporterResult<()> {
        let expected = self.schema.columns();
        let recognized = rows
            .iter()
            .flat_map(|row| row.columns())
            .any(|column| expected.contains(&column));

        if rows.is_empty() || recognized {
            Ok(())
        } else {
            Err(ImportError::MalformedFile(format!(
                "表头中没有任何 {} 列（期望: {}）",
                self.schema.name(),
                expected.join(", ")
            )))
        }
    }

    /// 重复检测，返回 行号 → 错误
    fn detect_duplicates(&self, rows: &[RawRow]) -> HashMap<usize, ValidationError> {
        if !self.reject_duplicates {
            return HashMap::new();
        }

        let keys: Vec<(usize, Option<String>)> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (sheet_row_number(index), self.schema.row_key(row)))
            .collect();

        self.conflict_handler
            .detect(&keys, &self.existing_keys)
            .into_iter()
            .map(|dup| (dup.row, dup.to_error(self.schema.key_field())))
            .collect()
    }

    fn log_result(&self, result: &ImportResult<S::Record>, start_time: Instant) {
        info!(
            total = result.total_rows,
            valid = result.valid_row_count(),
            invalid = result.invalid_row_count(),
            errors = result.errors.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "导入文件处理完成"
        );
    }
}
