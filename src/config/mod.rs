// ==========================================
// 校园招聘管理系统 - 配置层
// ==========================================
// 职责: 导入校验规则与运行参数
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod import_config_trait;
pub mod importer_config;

// 重导出核心配置类型
pub use config_manager::{ConfigManager, CONFIG_ENV_VAR};
pub use import_config_trait::ImportConfigReader;
pub use importer_config::{ImporterConfig, JobRules, StudentRules};
