use crate::domain::model::CourseSet;

/// One course identifier per line, kept verbatim. Blank lines are skipped and repeats collapse.
pub fn parse_course_list(content: &str) -> CourseSet {
    tracing::info!("Generating course transfer list...");

    let courses: CourseSet = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!("Parsed {} unique courses", courses.len());
    courses
}
