// ==========================================
// 校园招聘管理系统 - 数据仓储层
// ==========================================
// 职责: 长期存活的学生/岗位集合（页面级单写者内存存储）
// 红线: 不含校验逻辑，记录进入仓储前已通过导入边界校验
// ==========================================

pub mod error;
pub mod record_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use record_repo::{InMemoryRepository, RecordRepository};
