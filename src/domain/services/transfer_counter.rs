use crate::domain::model::{CourseSet, ProgramCatalog, TransferCounts};

/// Counts, for every program, how many of `courses` it accepts.
///
/// Every catalog program appears in the result, including those with no matches.
pub fn count_transfers(courses: &CourseSet, catalog: &ProgramCatalog) -> TransferCounts {
    tracing::info!("Generating a count of how many courses will transfer to each degree program...");

    let mut counts = TransferCounts::zeroed(catalog);

    for course in courses {
        for (program, accepted) in catalog.iter() {
            if accepted.contains(course) {
                counts.increment(program);
            }
        }
    }

    counts
}
