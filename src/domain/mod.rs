// ==========================================
// 校园招聘管理系统 - 领域模型层
// ==========================================
// 职责: 定义学生/岗位实体、枚举类型与导入中间结构
// 红线: 不含数据访问逻辑,不含校验逻辑
// ==========================================

pub mod import;
pub mod job;
pub mod student;
pub mod types;

// 重导出核心类型
pub use import::{sheet_row_number, CellValue, ImportResult, ImportSummary, RawRow, ValidationError};
pub use job::Job;
pub use student::Student;
pub use types::{Department, JobType, Record, RecordStatus};
