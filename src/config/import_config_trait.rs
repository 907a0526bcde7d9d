// ==========================================
// 校园招聘管理系统 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::importer_config::{ImporterConfig, JobRules, StudentRules};

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 实现者: ConfigManager（文件加载）、ImporterConfig（直接使用）
pub trait ImportConfigReader: Send + Sync {
    /// 学生表校验规则
    fn student_rules(&self) -> &StudentRules;

    /// 岗位表校验规则
    fn job_rules(&self) -> &JobRules;

    /// 校验页错误预览条数
    ///
    /// # 默认值
    /// - 10
    fn error_preview_limit(&self) -> usize;

    /// 是否拒绝重复业务键
    ///
    /// # 默认值
    /// - false
    fn reject_duplicates(&self) -> bool;
}

impl ImportConfigReader for ImporterConfig {
    fn student_rules(&self) -> &StudentRules {
        &self.student
    }

    fn job_rules(&self) -> &JobRules {
        &self.job
    }

    fn error_preview_limit(&self) -> usize {
        self.error_preview_limit
    }

    fn reject_duplicates(&self) -> bool {
        self.reject_duplicates
    }
}
