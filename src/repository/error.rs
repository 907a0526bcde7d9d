// ==========================================
// 校园招聘管理系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("存储锁获取失败: {0}")]
    LockError(String),

    #[error("唯一约束违反: {0}")]
    UniqueConstraintViolation(String),

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),
}

impl<T> From<std::sync::PoisonError<T>> for RepositoryError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        RepositoryError::LockError(err.to_string())
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
