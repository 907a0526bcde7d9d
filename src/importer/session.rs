// ==========================================
// 校园招聘管理系统 - 导入会话状态机
// ==========================================
// 步骤: Upload → Validate → Closed
// - Upload: 等待选择文件；处理成功进入 Validate
// - Validate: 展示汇总；可退回 Upload 或确认提交
// - Closed: 已提交或已取消，会话结束（重新导入需新建会话）
// ==========================================

use crate::domain::{ImportResult, ImportSummary};
use crate::importer::bulk_importer::BulkImporter;
use crate::importer::error::{ImportError, ImporterResult};
use crate::importer::file_parser::FileFormat;
use crate::importer::importer_trait::RecordSchema;
use crate::repository::RecordRepository;
use std::fmt;
use std::fmt::Display;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Upload,
    Validate,
    Closed,
}

impl fmt::Display for SessionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStep::Upload => write!(f, "UPLOAD"),
            SessionStep::Validate => write!(f, "VALIDATE"),
            SessionStep::Closed => write!(f, "CLOSED"),
        }
    }
}

// ==========================================
// ImportSession - 单次导入会话
// ==========================================
pub struct ImportSession<S: RecordSchema> {
    importer: BulkImporter<S>,
    step: SessionStep,
    pending: Option<ImportResult<S::Record>>,
    committed: usize,
}

impl<S: RecordSchema> ImportSession<S> {
    pub fn new(importer: BulkImporter<S>) -> Self {
        Self {
            importer,
            step: SessionStep::Upload,
            pending: None,
            committed: 0,
        }
    }

    pub fn step(&self) -> SessionStep {
        self.step
    }

    pub fn importer(&self) -> &BulkImporter<S> {
        &self.importer
    }

    /// 待确认的校验结果（仅 Validate 步骤有值）
    pub fn pending(&self) -> Option<&ImportResult<S::Record>> {
        self.pending.as_ref()
    }

    /// 已提交条数
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// 处理文件（Upload → Validate）
    ///
    /// 文件级失败时停留在 Upload
    pub fn process_file<P: AsRef<Path>>(&mut self, file_path: P) -> ImporterResult<ImportSummary> {
        self.expect_step(SessionStep::Upload)?;
        let result = self.importer.process_file(file_path)?;
        Ok(self.enter_validate(result))
    }

    /// 处理字节流（Upload → Validate）
    ///
    /// format 取自上传文件名；内容不是对应表格时停留在 Upload
    pub fn process_bytes(
        &mut self,
        bytes: &[u8],
        format: FileFormat,
    ) -> ImporterResult<ImportSummary> {
        self.expect_step(SessionStep::Upload)?;
        let result = self.importer.process_bytes(bytes, format)?;
        Ok(self.enter_validate(result))
    }

    /// 当前汇总
    pub fn summary(&self) -> ImporterResult<ImportSummary> {
        self.expect_step(SessionStep::Validate)?;
        self.pending
            .as_ref()
            .map(|result| self.importer.summarize(result))
            .ok_or_else(|| self.state_error(SessionStep::Validate))
    }

    /// 放弃当前结果，回到上传步骤（Validate → Upload）
    pub fn back_to_upload(&mut self) -> ImporterResult<()> {
        self.expect_step(SessionStep::Validate)?;
        self.pending = None;
        self.step = SessionStep::Upload;
        info!(schema = self.importer.schema().name(), "导入结果已丢弃，返回上传步骤");
        Ok(())
    }

    /// 确认提交（Validate → Closed）
    ///
    /// append 失败时保持在 Validate，可重试或退回
    pub fn confirm<F, E>(&mut self, append: F) -> ImporterResult<usize>
    where
        F: FnOnce(Vec<S::Record>) -> Result<(), E>,
        E: Display,
    {
        self.expect_step(SessionStep::Validate)?;
        let pending = self
            .pending
            .clone()
            .ok_or_else(|| self.state_error(SessionStep::Validate))?;

        match self.importer.commit(pending, append) {
            Ok(count) => {
                self.pending = None;
                self.committed = count;
                self.step = SessionStep::Closed;
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "提交失败，会话保持在校验步骤");
                Err(e)
            }
        }
    }

    /// 确认提交到仓储
    pub fn confirm_to(&mut self, repo: &dyn RecordRepository<S::Record>) -> ImporterResult<usize> {
        self.confirm(|records| repo.append(records).map(|_| ()))
    }

    /// 取消会话（任意步骤 → Closed）
    pub fn cancel(&mut self) {
        self.pending = None;
        self.step = SessionStep::Closed;
    }

    fn enter_validate(&mut self, result: ImportResult<S::Record>) -> ImportSummary {
        let summary = self.importer.summarize(&result);
        self.pending = Some(result);
        self.step = SessionStep::Validate;
        summary
    }

    fn expect_step(&self, expected: SessionStep) -> ImporterResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.state_error(expected))
        }
    }

    fn state_error(&self, expected: SessionStep) -> ImportError {
        ImportError::InvalidSessionState {
            expected: expected.to_string(),
            actual: self.step.to_string(),
        }
    }
}
