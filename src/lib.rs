// ==========================================
// 校园招聘管理系统 - 批量导入核心库
// ==========================================
// 职责: 学生/岗位表格的 解析 → 校验 → 汇总 → 确认 → 提交
// 定位: 仪表盘批量上传的共享管道（人工确认后才入库）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 内存集合
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 校验规则
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Department, JobType, Record, RecordStatus};

// 领域实体
pub use domain::{ImportResult, ImportSummary, Job, RawRow, Student, ValidationError};

// 导入器
pub use importer::{
    BulkImporter, FileFormat, ImportError, ImportSession, JobSchema, RecordSchema, SessionStep,
    StudentSchema,
};

// 仓储
pub use repository::{InMemoryRepository, RecordRepository, RepositoryError};

// 配置
pub use config::{ConfigManager, ImportConfigReader, ImporterConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "校园招聘管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
