// ==========================================
// 校园招聘管理系统 - 领域类型定义
// ==========================================
// 职责: 院系 / 岗位类型 / 记录状态等枚举
// 红线: 枚举字段不允许静默默认值，无法识别即报错
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 院系 (Department)
// ==========================================
// 导入时既接受全称也接受代码，大小写不敏感
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    ComputerScience,          // CSE
    InformationTechnology,    // IT
    ElectronicsCommunication, // ECE
    ElectricalElectronics,    // EEE
    Mechanical,               // ME
    Civil,                    // CE
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::ComputerScience,
        Department::InformationTechnology,
        Department::ElectronicsCommunication,
        Department::ElectricalElectronics,
        Department::Mechanical,
        Department::Civil,
    ];

    /// 院系全称（模板与汇总展示使用）
    pub fn name(&self) -> &'static str {
        match self {
            Department::ComputerScience => "Computer Science",
            Department::InformationTechnology => "Information Technology",
            Department::ElectronicsCommunication => "Electronics and Communication",
            Department::ElectricalElectronics => "Electrical and Electronics",
            Department::Mechanical => "Mechanical",
            Department::Civil => "Civil",
        }
    }

    /// 院系代码
    pub fn code(&self) -> &'static str {
        match self {
            Department::ComputerScience => "CSE",
            Department::InformationTechnology => "IT",
            Department::ElectronicsCommunication => "ECE",
            Department::ElectricalElectronics => "EEE",
            Department::Mechanical => "ME",
            Department::Civil => "CE",
        }
    }

    /// 按全称或代码解析
    pub fn parse(value: &str) -> Option<Department> {
        let needle = value.trim();
        Department::ALL.into_iter().find(|d| {
            d.name().eq_ignore_ascii_case(needle) || d.code().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// 岗位类型 (Job Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    Internship,
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::Internship,
        JobType::PartTime,
        JobType::Contract,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::Internship => "Internship",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }

    /// 解析岗位类型（忽略大小写，空格/下划线视同连字符）
    pub fn parse(value: &str) -> Option<JobType> {
        let normalized = value.trim().replace([' ', '_'], "-");
        JobType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 记录状态 (Record Status)
// ==========================================
// 导入记录一律为 Active，其余状态由页面操作产生
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Active,
    Inactive,
    Placed, // 学生已就业
    Closed, // 岗位已截止
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "ACTIVE"),
            RecordStatus::Inactive => write!(f, "INACTIVE"),
            RecordStatus::Placed => write!(f, "PLACED"),
            RecordStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

// ==========================================
// Record Trait - 可入库记录
// ==========================================
// 用途: 仓储层按 id / 业务键识别记录
pub trait Record: Clone + Send + Sync {
    /// 系统生成的唯一标识
    fn id(&self) -> &str;

    /// 业务键（用于重复检测），无业务键时返回 None
    fn natural_key(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_parse_by_name_and_code() {
        assert_eq!(
            Department::parse("Computer Science"),
            Some(Department::ComputerScience)
        );
        assert_eq!(Department::parse(" cse "), Some(Department::ComputerScience));
        assert_eq!(Department::parse("ece"), Some(Department::ElectronicsCommunication));
        assert_eq!(Department::parse("Underwater Basket Weaving"), None);
        assert_eq!(Department::parse(""), None);
    }

    #[test]
    fn test_job_type_parse_variants() {
        assert_eq!(JobType::parse("Full-time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("full time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("PART_TIME"), Some(JobType::PartTime));
        assert_eq!(JobType::parse("internship"), Some(JobType::Internship));
        assert_eq!(JobType::parse("Freelance"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Department::Civil.to_string(), "Civil");
        assert_eq!(JobType::Contract.to_string(), "Contract");
        assert_eq!(RecordStatus::Active.to_string(), "ACTIVE");
    }
}
