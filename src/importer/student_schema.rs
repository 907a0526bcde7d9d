// ==========================================
// 校园招聘管理系统 - 学生表模式
// ==========================================
// 列: rollNumber, name, email, phone, department, batch, year, cgpa,
//     linkedinUrl, githubUrl, skills
// ==========================================

use crate::config::{ImportConfigReader, StudentRules};
use crate::domain::{Department, RawRow, RecordStatus, Student, ValidationError};
use crate::importer::field_reader::FieldReader;
use crate::importer::importer_trait::RecordSchema;
use crate::importer::template::TemplateCell;
use chrono::Utc;
use uuid::Uuid;

pub const ROLL_NUMBER: &str = "rollNumber";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const DEPARTMENT: &str = "department";
pub const BATCH: &str = "batch";
pub const YEAR: &str = "year";
pub const CGPA: &str = "cgpa";
pub const LINKEDIN_URL: &str = "linkedinUrl";
pub const GITHUB_URL: &str = "githubUrl";
pub const SKILLS: &str = "skills";

const COLUMNS: [&str; 11] = [
    ROLL_NUMBER,
    NAME,
    EMAIL,
    PHONE,
    DEPARTMENT,
    BATCH,
    YEAR,
    CGPA,
    LINKEDIN_URL,
    GITHUB_URL,
    SKILLS,
];

/// 院系可选值（错误提示用）
pub(crate) fn department_choices() -> Vec<String> {
    Department::ALL.iter().map(|d| d.name().to_string()).collect()
}

pub struct StudentSchema {
    rules: StudentRules,
}

impl StudentSchema {
    pub fn new(rules: StudentRules) -> Self {
        Self { rules }
    }

    pub fn from_config<C: ImportConfigReader + ?Sized>(config: &C) -> Self {
        Self::new(config.student_rules().clone())
    }

    pub fn rules(&self) -> &StudentRules {
        &self.rules
    }
}

impl RecordSchema for StudentSchema {
    type Record = Student;

    fn name(&self) -> &'static str {
        "Students"
    }

    fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    fn key_field(&self) -> &'static str {
        ROLL_NUMBER
    }

    fn build_record(&self, row: &RawRow, index: usize) -> Result<Student, Vec<ValidationError>> {
        let rules = &self.rules;
        let mut reader = FieldReader::new(row, index);

        // 全部规则依次执行，不在首个错误处短路
        let roll_number = reader.identifier(
            ROLL_NUMBER,
            rules.roll_number_min_len,
            rules.roll_number_max_len,
        );
        let name = reader.required_text(NAME);
        let email = reader.email(EMAIL);
        let phone = reader.phone(PHONE);
        let department = reader.one_of(DEPARTMENT, Department::parse, &department_choices());
        let batch = reader.allowed_text(BATCH, &rules.allowed_batches);
        let year = reader.int_in_range(YEAR, rules.year_min, rules.year_max);
        let cgpa = reader.float_in_range(CGPA, 0.0, Some(rules.cgpa_max));
        let linkedin_url = reader.optional_url(LINKEDIN_URL);
        let github_url = reader.optional_url(GITHUB_URL);
        let skills = reader.list(SKILLS, false);

        let (
            Some(roll_number),
            Some(name),
            Some(email),
            Some(phone),
            Some(department),
            Some(batch),
            Some(year),
            Some(cgpa),
            Some(skills),
        ) = (roll_number, name, email, phone, department, batch, year, cgpa, skills)
        else {
            return Err(reader.into_errors());
        };

        // 可选链接非法时只有错误、没有值
        if !reader.is_clean() {
            return Err(reader.into_errors());
        }

        Ok(Student {
            id: Uuid::new_v4().to_string(),
            roll_number,
            name,
            email,
            phone,
            department,
            batch,
            year,
            cgpa,
            linkedin_url,
            github_url,
            skills,
            status: RecordStatus::Active,
            applications: Vec::new(),
            created_at: Utc::now(),
        })
    }

    fn row_key(&self, row: &RawRow) -> Option<String> {
        row.text(ROLL_NUMBER).map(|v| v.to_uppercase())
    }

    fn group_key(&self, record: &Student) -> String {
        record.department.name().to_string()
    }

    fn template_rows(&self) -> Vec<Vec<TemplateCell>> {
        let batch = self
            .rules
            .allowed_batches
            .last()
            .cloned()
            .unwrap_or_default();
        let year = self.rules.year_max.min(self.rules.year_min + 6) as f64;

        vec![
            vec![
                TemplateCell::text("CS2022001"),
                TemplateCell::text("Asha Verma"),
                TemplateCell::text("asha.verma@example.edu"),
                TemplateCell::text("9876543210"),
                TemplateCell::text(Department::ComputerScience.name()),
                TemplateCell::text(batch.clone()),
                TemplateCell::Number(year),
                TemplateCell::Number(8.7),
                TemplateCell::text("https://www.linkedin.com/in/asha-verma"),
                TemplateCell::text("https://github.com/ashaverma"),
                TemplateCell::text("Rust, SQL, React"),
            ],
            vec![
                TemplateCell::text("ME2022014"),
                TemplateCell::text("Ravi Kumar"),
                TemplateCell::text("ravi.kumar@example.edu"),
                TemplateCell::text("7012345678"),
                TemplateCell::text(Department::Mechanical.code()),
                TemplateCell::text(batch),
                TemplateCell::Number(year),
                TemplateCell::Number(7.25),
                TemplateCell::text(""),
                TemplateCell::text(""),
                TemplateCell::text(""),
            ],
        ]
    }
}
