// ==========================================
// 校园招聘管理系统 - 学生领域模型
// ==========================================
// 用途: 批量导入写入，页面表单维护
// ==========================================

use crate::domain::types::{Department, Record, RecordStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Student - 学生档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    // ===== 主键 =====
    pub id: String, // 系统生成（UUID），与学号无关

    // ===== 表格字段 =====
    pub roll_number: String,          // 学号（大写字母数字）
    pub name: String,                 // 姓名
    pub email: String,                // 邮箱
    pub phone: String,                // 手机号（10 位）
    pub department: Department,       // 院系
    pub batch: String,                // 届别，如 2022-2026
    pub year: i32,                    // 毕业年份
    pub cgpa: f64,                    // 绩点 0-10
    pub linkedin_url: Option<String>, // LinkedIn 主页
    pub github_url: Option<String>,   // GitHub 主页
    pub skills: Vec<String>,          // 技能（逗号分隔列）

    // ===== 系统默认字段 =====
    pub status: RecordStatus,
    pub applications: Vec<String>, // 已投递岗位 id
    pub created_at: DateTime<Utc>,
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> Option<String> {
        Some(self.roll_number.clone())
    }
}
