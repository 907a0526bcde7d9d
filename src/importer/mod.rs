// ==========================================
// 校园招聘管理系统 - 导入层
// ==========================================
// 职责: 外部表格导入，校验后生成学生/岗位记录
// 支持: Excel (xlsx/xls/xlsb/ods), CSV
// 流程: 上传 → 校验 → 汇总 → 确认 → 提交
// ==========================================

// 模块声明
pub mod bulk_importer;
pub mod conflict_handler;
pub mod data_cleaner;
pub mod error;
pub mod field_reader;
pub mod file_parser;
pub mod importer_trait;
pub mod job_schema;
pub mod session;
pub mod student_schema;
pub mod template;

// 重导出核心类型
pub use bulk_importer::BulkImporter;
pub use conflict_handler::{ConflictHandler, Duplicate, DuplicateKind};
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImporterResult};
pub use field_reader::FieldReader;
pub use file_parser::{CsvParser, ExcelParser, FileFormat, UniversalFileParser};
pub use job_schema::JobSchema;
pub use session::{ImportSession, SessionStep};
pub use student_schema::StudentSchema;
pub use template::{template_bytes, template_workbook, write_template, TemplateCell};

// 重导出 Trait 接口
pub use importer_trait::{FileParser, RecordSchema};
