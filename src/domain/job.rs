// ==========================================
// 校园招聘管理系统 - 岗位领域模型
// ==========================================

use crate::domain::types::{Department, JobType, Record, RecordStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Job - 招聘岗位
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company_id: Option<String>, // 由调用方（公司详情页）注入

    // ===== 表格字段 =====
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub ctc: f64, // 年薪（LPA）
    pub location: String,
    pub job_type: JobType,
    pub eligibility_departments: Vec<Department>,
    #[serde(rename = "minCGPA")]
    pub min_cgpa: f64,
    pub deadline: NaiveDate,

    // ===== 系统默认字段 =====
    pub status: RecordStatus,
    pub applicants: Vec<String>, // 投递学生 id
    pub posted_at: DateTime<Utc>,
}

impl Record for Job {
    fn id(&self) -> &str {
        &self.id
    }

    /// 同名岗位同一截止日期视为重复
    fn natural_key(&self) -> Option<String> {
        Some(format!("{}@{}", self.title.to_lowercase(), self.deadline))
    }
}
