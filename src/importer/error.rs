// ==========================================
// 校园招聘管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 行级校验失败不走错误通道，以 ValidationError 数据返回
// ==========================================

use thiserror::Error;

/// 导入模块错误类型（文件级 / 提交 / 会话）
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.ods/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件无法解析为表格: {0}")]
    MalformedFile(String),

    #[error("工作簿无工作表")]
    EmptyWorkbook,

    // ===== 提交错误 =====
    #[error("导入提交失败，未写入任何记录: {0}")]
    CommitFailed(String),

    // ===== 会话错误 =====
    #[error("导入会话状态错误: 期望 {expected}，当前 {actual}")]
    InvalidSessionState { expected: String, actual: String },

    // ===== 模板错误 =====
    #[error("导入模板生成失败: {0}")]
    TemplateWriteError(String),

    // ===== 配置错误 =====
    #[error("配置读取失败 ({path}): {message}")]
    ConfigError { path: String, message: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::MalformedFile(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::MalformedFile(err.to_string())
    }
}

// 实现 From<rust_xlsxwriter::XlsxError>
impl From<rust_xlsxwriter::XlsxError> for ImportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ImportError::TemplateWriteError(err.to_string())
    }
}

impl ImportError {
    /// 是否为文件级错误（会话回到上传步骤）
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound(_)
                | ImportError::UnsupportedFormat(_)
                | ImportError::FileReadError(_)
                | ImportError::MalformedFile(_)
                | ImportError::EmptyWorkbook
        )
    }
}

/// Result 类型别名
pub type ImporterResult<T> = Result<T, ImportError>;
