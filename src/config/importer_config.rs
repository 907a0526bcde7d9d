// ==========================================
// 校园招聘管理系统 - 导入规则配置
// ==========================================
// 存储: JSON 文件，缺省字段取默认值
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// StudentRules - 学生表校验规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentRules {
    pub roll_number_min_len: usize,
    pub roll_number_max_len: usize,
    pub allowed_batches: Vec<String>,
    pub year_min: i32,
    pub year_max: i32,
    pub cgpa_max: f64,
}

impl Default for StudentRules {
    fn default() -> Self {
        Self {
            roll_number_min_len: 6,
            roll_number_max_len: 12,
            allowed_batches: (2021..=2025)
                .map(|start| format!("{}-{}", start, start + 4))
                .collect(),
            year_min: 2020,
            year_max: 2030,
            cgpa_max: 10.0,
        }
    }
}

// ==========================================
// JobRules - 岗位表校验规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRules {
    pub min_cgpa_max: f64,
    pub ctc_min: f64,
}

impl Default for JobRules {
    fn default() -> Self {
        Self {
            min_cgpa_max: 10.0,
            ctc_min: 0.0,
        }
    }
}

// ==========================================
// ImporterConfig - 导入配置全集
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    pub student: StudentRules,
    pub job: JobRules,
    /// 校验页错误预览条数
    pub error_preview_limit: usize,
    /// 是否把重复业务键视为行级错误
    pub reject_duplicates: bool,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            student: StudentRules::default(),
            job: JobRules::default(),
            error_preview_limit: 10,
            reject_duplicates: false,
        }
    }
}
