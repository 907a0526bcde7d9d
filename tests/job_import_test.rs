// ==========================================
// 岗位批量导入 集成测试
// ==========================================
// 测试目标: 多值列拆分、截止日期解析、枚举列校验
// ==========================================

mod test_helpers;

use chrono::NaiveDate;
use placement_importer::config::ImporterConfig;
use placement_importer::domain::{Department, JobType};
use placement_importer::importer::{BulkImporter, FileFormat, JobSchema};
use placement_importer::logging;
use test_helpers::{create_xlsx, job_cells, Cell, JOB_HEADER};

fn create_importer() -> BulkImporter<JobSchema> {
    let config = ImporterConfig::default();
    BulkImporter::new(JobSchema::from_config(&config), &config)
}

#[test]
fn test_requirements_split_into_list() {
    logging::init_test();

    let file = create_xlsx(
        &JOB_HEADER,
        &[job_cells("Data Analyst", "Python,SQL,Excel", "2026-12-31".into())],
    )
    .expect("Failed to create xlsx");

    let result = create_importer()
        .process_file(file.path())
        .expect("Import should succeed");

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let job = &result.valid_records[0];
    assert_eq!(job.requirements, vec!["Python", "SQL", "Excel"]);
    assert_eq!(
        job.eligibility_departments,
        vec![Department::ComputerScience, Department::InformationTechnology]
    );
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.ctc, 12.5);
    assert_eq!(job.min_cgpa, 7.0);
    assert_eq!(job.deadline, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    assert!(job.applicants.is_empty());
}

#[test]
fn test_deadline_accepts_date_cells_and_past_dates() {
    logging::init_test();

    let file = create_xlsx(
        &JOB_HEADER,
        &[
            job_cells(
                "Analyst",
                "SQL",
                Cell::Date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            ),
            job_cells("Archivist", "Excel", "15/03/2019".into()),
            job_cells("Planner", "Excel", "next friday".into()),
        ],
    )
    .expect("Failed to create xlsx");

    let result = create_importer()
        .process_file(file.path())
        .expect("Import should succeed");

    assert_eq!(result.valid_records.len(), 2);
    assert_eq!(
        result.valid_records[0].deadline,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    );
    assert_eq!(
        result.valid_records[1].deadline,
        NaiveDate::from_ymd_opt(2019, 3, 15).unwrap()
    );
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 4);
    assert_eq!(result.errors[0].field, "deadline");
}

#[test]
fn test_bare_numbers_are_not_deadlines() {
    logging::init_test();

    let numeric_cell = job_cells("Planner", "Excel", Cell::Number(46023.0));
    let file = create_xlsx(&JOB_HEADER, &[numeric_cell]).expect("Failed to create xlsx");
    let from_xlsx = create_importer()
        .process_file(file.path())
        .expect("Import should succeed");

    let csv = "title,description,requirements,ctc,location,jobType,eligibilityDepartments,minCGPA,deadline\n\
               Analyst,Reports,SQL,6,Pune,Full-time,CSE,7,7\n\
               Engineer,Services,Rust,8,Pune,Full-time,CSE,7,8.5\n";
    let from_csv = create_importer()
        .process_bytes(csv.as_bytes(), FileFormat::Csv)
        .expect("Import should succeed");

    for result in [&from_xlsx, &from_csv] {
        assert!(result.valid_records.is_empty());
        assert!(result.errors.iter().all(|e| e.field == "deadline"));
    }
    assert_eq!(from_xlsx.errors.len(), 1);
    let csv_rows: Vec<usize> = from_csv.errors.iter().map(|e| e.row).collect();
    assert_eq!(csv_rows, vec![2, 3]);
}

#[test]
fn test_enumerations_never_default_silently() {
    logging::init_test();

    let mut bad_type = job_cells("Analyst", "SQL", "2026-12-31".into());
    bad_type[5] = "Freelance".into();
    let mut bad_department = job_cells("Engineer", "Rust", "2026-12-31".into());
    bad_department[6] = "CSE, Law".into();
    let mut no_department = job_cells("Designer", "Figma", "2026-12-31".into());
    no_department[6] = " , ".into();

    let file = create_xlsx(&JOB_HEADER, &[bad_type, bad_department, no_department])
        .expect("Failed to create xlsx");

    let result = create_importer()
        .process_file(file.path())
        .expect("Import should succeed");

    assert!(result.valid_records.is_empty());
    let located: Vec<(usize, &str)> = result
        .errors
        .iter()
        .map(|e| (e.row, e.field.as_str()))
        .collect();
    assert_eq!(
        located,
        vec![
            (2, "jobType"),
            (3, "eligibilityDepartments"),
            (4, "eligibilityDepartments"),
        ]
    );
}

#[test]
fn test_numeric_bounds_for_jobs() {
    logging::init_test();

    let mut negative_ctc = job_cells("Analyst", "SQL", "2026-12-31".into());
    negative_ctc[3] = Cell::Number(-1.0);
    let mut high_cgpa = job_cells("Engineer", "Rust", "2026-12-31".into());
    high_cgpa[7] = Cell::Number(10.5);
    let mut text_ctc = job_cells("Designer", "Figma", "2026-12-31".into());
    text_ctc[3] = "twelve lakhs".into();

    let file = create_xlsx(&JOB_HEADER, &[negative_ctc, high_cgpa, text_ctc])
        .expect("Failed to create xlsx");

    let result = create_importer()
        .process_file(file.path())
        .expect("Import should succeed");

    assert!(result.valid_records.is_empty());
    let located: Vec<(usize, &str)> = result
        .errors
        .iter()
        .map(|e| (e.row, e.field.as_str()))
        .collect();
    assert_eq!(located, vec![(2, "ctc"), (3, "minCGPA"), (4, "ctc")]);
    assert_ne!(result.errors[0].message, result.errors[2].message);
}

#[test]
fn test_summary_groups_by_job_type() {
    let importer = create_importer();
    let mut internship = job_cells("Intern", "SQL", "2026-12-31".into());
    internship[5] = "internship".into();

    let file = create_xlsx(
        &JOB_HEADER,
        &[
            job_cells("Analyst", "SQL", "2026-12-31".into()),
            internship,
        ],
    )
    .expect("Failed to create xlsx");

    let result = importer.process_file(file.path()).expect("Import should succeed");
    let summary = importer.summarize(&result);

    assert_eq!(summary.groups.get("Full-time"), Some(&1));
    assert_eq!(summary.groups.get("Internship"), Some(&1));
}
