// ==========================================
// 校园招聘管理系统 - 岗位表模式
// ==========================================
// 列: title, description, requirements, ctc, location, jobType,
//     eligibilityDepartments, minCGPA, deadline
// ==========================================

use crate::config::{ImportConfigReader, JobRules};
use crate::domain::{Department, Job, JobType, RawRow, RecordStatus, ValidationError};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::field_reader::FieldReader;
use crate::importer::importer_trait::RecordSchema;
use crate::importer::student_schema::department_choices;
use crate::importer::template::TemplateCell;
use chrono::{Duration, Utc};
use uuid::Uuid;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const REQUIREMENTS: &str = "requirements";
pub const CTC: &str = "ctc";
pub const LOCATION: &str = "location";
pub const JOB_TYPE: &str = "jobType";
pub const ELIGIBILITY_DEPARTMENTS: &str = "eligibilityDepartments";
pub const MIN_CGPA: &str = "minCGPA";
pub const DEADLINE: &str = "deadline";

const COLUMNS: [&str; 9] = [
    TITLE,
    DESCRIPTION,
    REQUIREMENTS,
    CTC,
    LOCATION,
    JOB_TYPE,
    ELIGIBILITY_DEPARTMENTS,
    MIN_CGPA,
    DEADLINE,
];

fn job_type_choices() -> Vec<String> {
    JobType::ALL.iter().map(|t| t.label().to_string()).collect()
}

pub struct JobSchema {
    rules: JobRules,
    company_id: Option<String>,
}

impl JobSchema {
    pub fn new(rules: JobRules) -> Self {
        Self {
            rules,
            company_id: None,
        }
    }

    pub fn from_config<C: ImportConfigReader + ?Sized>(config: &C) -> Self {
        Self::new(config.job_rules().clone())
    }

    /// 从公司详情页上传时，岗位归属该公司
    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }
}

impl RecordSchema for JobSchema {
    type Record = Job;

    fn name(&self) -> &'static str {
        "Jobs"
    }

    fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    fn key_field(&self) -> &'static str {
        TITLE
    }

    fn build_record(&self, row: &RawRow, index: usize) -> Result<Job, Vec<ValidationError>> {
        let mut reader = FieldReader::new(row, index);

        let title = reader.required_text(TITLE);
        let description = reader.required_text(DESCRIPTION);
        let requirements = reader.list(REQUIREMENTS, true);
        let ctc = reader.float_in_range(CTC, self.rules.ctc_min, None);
        let location = reader.required_text(LOCATION);
        let job_type = reader.one_of(JOB_TYPE, JobType::parse, &job_type_choices());
        let eligibility_departments =
            reader.list_of(ELIGIBILITY_DEPARTMENTS, Department::parse, &department_choices());
        let min_cgpa = reader.float_in_range(MIN_CGPA, 0.0, Some(self.rules.min_cgpa_max));
        // 允许过期截止日期（历史岗位补录）
        let deadline = reader.date(DEADLINE);

        let (
            Some(title),
            Some(description),
            Some(requirements),
            Some(ctc),
            Some(location),
            Some(job_type),
            Some(eligibility_departments),
            Some(min_cgpa),
            Some(deadline),
        ) = (
            title,
            description,
            requirements,
            ctc,
            location,
            job_type,
            eligibility_departments,
            min_cgpa,
            deadline,
        )
        else {
            return Err(reader.into_errors());
        };

        if !reader.is_clean() {
            return Err(reader.into_errors());
        }

        Ok(Job {
            id: Uuid::new_v4().to_string(),
            company_id: self.company_id.clone(),
            title,
            description,
            requirements,
            ctc,
            location,
            job_type,
            eligibility_departments,
            min_cgpa,
            deadline,
            status: RecordStatus::Active,
            applicants: Vec::new(),
            posted_at: Utc::now(),
        })
    }

    /// 业务键: 标题（小写）+ 截止日期；截止日期无法解析时无键
    fn row_key(&self, row: &RawRow) -> Option<String> {
        let title = row.text(TITLE)?;
        let deadline = DataCleaner.parse_date(&row.text(DEADLINE)?)?;
        Some(format!("{}@{}", title.to_lowercase(), deadline))
    }

    fn group_key(&self, record: &Job) -> String {
        record.job_type.label().to_string()
    }

    fn template_rows(&self) -> Vec<Vec<TemplateCell>> {
        let deadline = (Utc::now().date_naive() + Duration::days(30))
            .format("%Y-%m-%d")
            .to_string();

        vec![
            vec![
                TemplateCell::text("Software Engineer"),
                TemplateCell::text("Backend services for the payments platform"),
                TemplateCell::text("Rust, PostgreSQL, Kubernetes"),
                TemplateCell::Number(12.5),
                TemplateCell::text("Bengaluru"),
                TemplateCell::text(JobType::FullTime.label()),
                TemplateCell::text("Computer Science, Information Technology"),
                TemplateCell::Number(7.0),
                TemplateCell::text(deadline.clone()),
            ],
            vec![
                TemplateCell::text("Design Intern"),
                TemplateCell::text("Six-month internship with the product design team"),
                TemplateCell::text("SolidWorks, AutoCAD"),
                TemplateCell::Number(3.0),
                TemplateCell::text("Pune"),
                TemplateCell::text(JobType::Internship.label()),
                TemplateCell::text("ME, CE"),
                TemplateCell::Number(6.5),
                TemplateCell::text(deadline),
            ],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row_with(overrides: &[(&'static str, &'static str)]) -> RawRow {
        let mut pairs = vec![
            (TITLE, "Data Analyst"),
            (DESCRIPTION, "Reporting and dashboards"),
            (REQUIREMENTS, "Python,SQL,Excel"),
            (CTC, "8"),
            (LOCATION, "Hyderabad"),
            (JOB_TYPE, "Full-time"),
            (ELIGIBILITY_DEPARTMENTS, "CSE, IT"),
            (MIN_CGPA, "7.5"),
            (DEADLINE, "2026-12-31"),
        ];
        for (key, value) in overrides {
            if let Some(pair) = pairs.iter_mut().find(|(k, _)| k == key) {
                pair.1 = *value;
            }
        }
        RawRow::from_pairs(pairs)
    }

    fn schema() -> JobSchema {
        JobSchema::new(JobRules::default())
    }

    #[test]
    fn test_requirements_split_into_list() {
        let job = schema().build_record(&row_with(&[]), 0).unwrap();

        assert_eq!(job.requirements, vec!["Python", "SQL", "Excel"]);
        assert_eq!(
            job.eligibility_departments,
            vec![Department::ComputerScience, Department::InformationTechnology]
        );
        assert_eq!(job.deadline, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        assert_eq!(job.status, RecordStatus::Active);
        assert!(job.applicants.is_empty());
    }

    #[test]
    fn test_negative_ctc_rejected() {
        let errors = schema().validate_row(&row_with(&[(CTC, "-1")]), 0);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, CTC);
    }

    #[test]
    fn test_unknown_job_type_and_department() {
        let errors = schema().validate_row(
            &row_with(&[(JOB_TYPE, "Freelance"), (ELIGIBILITY_DEPARTMENTS, "CSE, Astrology")]),
            0,
        );
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec![JOB_TYPE, ELIGIBILITY_DEPARTMENTS]);
    }

    #[test]
    fn test_unparseable_deadline() {
        let errors = schema().validate_row(&row_with(&[(DEADLINE, "next friday")]), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, DEADLINE);
        assert_eq!(errors[0].row, 4);
    }

    #[test]
    fn test_past_deadline_accepted() {
        let job = schema()
            .build_record(&row_with(&[(DEADLINE, "2021-01-15")]), 0)
            .unwrap();
        assert_eq!(job.deadline, NaiveDate::from_ymd_opt(2021, 1, 15).unwrap());
    }

    #[test]
    fn test_empty_requirements_rejected() {
        let errors = schema().validate_row(&row_with(&[(REQUIREMENTS, " , ,")]), 0);
        assert_eq!(errors[0].field, REQUIREMENTS);
    }

    #[test]
    fn test_company_id_attached() {
        let job = schema()
            .with_company("company-42")
            .build_record(&row_with(&[]), 0)
            .unwrap();
        assert_eq!(job.company_id.as_deref(), Some("company-42"));
    }

    #[test]
    fn test_row_key() {
        let key = schema().row_key(&row_with(&[(DEADLINE, "31/12/2026")]));
        assert_eq!(key.as_deref(), Some("data analyst@2026-12-31"));
    }
}
