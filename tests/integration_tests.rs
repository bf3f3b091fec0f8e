use std::path::{Path, PathBuf};
use tempfile::TempDir;
use transfer_report::{CliConfig, EtlEngine, LocalStorage, TransferError, TransferPipeline};

fn write_inputs(root: &Path, courses_file: &str, courses: &str, programs: &str) {
    let data_dir = root.join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join(courses_file), courses).unwrap();
    std::fs::write(data_dir.join("programs.txt"), programs).unwrap();
}

fn reports_in(root: &Path) -> Vec<PathBuf> {
    match std::fs::read_dir(root.join("reports")) {
        Ok(entries) => entries.map(|entry| entry.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

fn is_report_file_name(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix("GeneratedTransferReport-")
        .and_then(|rest| rest.strip_suffix(".txt"))
    else {
        return false;
    };
    stamp.len() == 6 && stamp.chars().all(|c| c.is_ascii_digit())
}

#[tokio::test]
async fn test_end_to_end_report() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(
        temp_dir.path(),
        "coursesToTransfer.txt",
        "CS101\nMATH201\nCS101\n",
        "Program: ProgramB\nMATH201\nCS101\nProgram: ProgramA\nCS101\nPHY100\nProgram: ProgramC\nART100\n",
    );

    let pipeline = TransferPipeline::new(LocalStorage::new(temp_dir.path()), CliConfig::default());
    let engine = EtlEngine::new(pipeline);

    let output_path = engine.run().await.unwrap();

    let reports = reports_in(temp_dir.path());
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0], PathBuf::from(&output_path));

    let file_name = reports[0].file_name().unwrap().to_str().unwrap();
    assert!(is_report_file_name(file_name), "unexpected report name {file_name}");

    let report = std::fs::read_to_string(&reports[0]).unwrap();
    assert!(report.starts_with("Generated Transfer Report\nGenerated On: "));
    assert!(report.contains("\n\nCourses to Transfer: [CS101, MATH201]\n\n"));
    assert!(report.contains("Transferable Course Count by Degree Program:\n\n"));
    assert!(report.ends_with("ProgramA: 1\nProgramB: 2\nProgramC: 0\n"));
}

#[tokio::test]
async fn test_empty_course_list_reports_zero_everywhere() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(
        temp_dir.path(),
        "coursesToTransfer.txt",
        "",
        "Program: Nursing\nBIO110\nProgram: Welding\nWLD100\n",
    );

    let pipeline = TransferPipeline::new(LocalStorage::new(temp_dir.path()), CliConfig::default());
    let output_path = EtlEngine::new(pipeline).run().await.unwrap();

    let report = std::fs::read_to_string(output_path).unwrap();
    assert!(report.contains("Courses to Transfer: []"));
    assert!(report.ends_with("Nursing: 0\nWelding: 0\n"));
}

#[tokio::test]
async fn test_completed_courses_input() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(
        temp_dir.path(),
        "completedCourses.txt",
        "ENG101\nHIS200\n",
        "Program: Arts\nENG101\nHIS200\nART100\n",
    );

    let config = CliConfig::default().with_default_courses_file("completedCourses.txt");
    let pipeline = TransferPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let output_path = EtlEngine::new_with_monitoring(pipeline, true).run().await.unwrap();

    let report = std::fs::read_to_string(output_path).unwrap();
    assert!(report.ends_with("Arts: 2\n"));
}

#[tokio::test]
async fn test_missing_programs_file_writes_no_report() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("coursesToTransfer.txt"), "CS101\n").unwrap();

    let pipeline = TransferPipeline::new(LocalStorage::new(temp_dir.path()), CliConfig::default());
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, TransferError::InputNotFound { ref path } if path.ends_with("programs.txt")));
    assert!(reports_in(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_malformed_catalog_aborts_before_report() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(
        temp_dir.path(),
        "coursesToTransfer.txt",
        "CS101\n",
        "CS101\nProgram: ProgramA\nCS101\n",
    );

    let pipeline = TransferPipeline::new(LocalStorage::new(temp_dir.path()), CliConfig::default());
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, TransferError::MalformedCatalog { line: 1, .. }));
    assert!(reports_in(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_unwritable_reports_dir_is_an_output_error() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(
        temp_dir.path(),
        "coursesToTransfer.txt",
        "CS101\n",
        "Program: ProgramA\nCS101\n",
    );
    // A plain file where the reports directory should go.
    std::fs::write(temp_dir.path().join("reports"), "").unwrap();

    let pipeline = TransferPipeline::new(LocalStorage::new(temp_dir.path()), CliConfig::default());
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, TransferError::OutputWrite { .. }));
    assert_eq!(err.exit_code(), 3);
}
