use crate::domain::model::{CourseSet, TransferCounts};
use chrono::{DateTime, TimeZone};
use std::fmt::Write;

pub const REPORT_HEADER: &str = "Generated Transfer Report";

const REPORT_FILE_PREFIX: &str = "GeneratedTransferReport";

/// Renders the transfer report text. Courses and programs are listed in ascending order.
pub fn render_report<Tz: TimeZone>(
    counts: &TransferCounts,
    courses: &CourseSet,
    generated_on: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        report,
        "{}\nGenerated On: {}\n\nCourses to Transfer: {}\n\nTransferable Course Count by Degree Program:\n\n",
        REPORT_HEADER,
        generated_on.format("%Y-%m-%dT%H:%M:%S"),
        render_courses(courses),
    );

    for (program, count) in counts.sorted() {
        let _ = writeln!(report, "{}: {}", program, count);
    }

    report
}

/// `GeneratedTransferReport-HHMMSS.txt` for the given generation time.
pub fn report_file_name<Tz: TimeZone>(generated_on: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}-{}.txt",
        REPORT_FILE_PREFIX,
        generated_on.format("%H%M%S")
    )
}

fn render_courses(courses: &CourseSet) -> String {
    let mut sorted: Vec<&str> = courses.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    format!("[{}]", sorted.join(", "))
}
