pub mod course_list;
pub mod program_catalog;
pub mod report;
pub mod transfer_counter;

pub use course_list::parse_course_list;
pub use program_catalog::{parse_program_catalog, PROGRAM_MARKER, PROGRAM_NAME_OFFSET};
pub use report::{render_report, report_file_name, REPORT_HEADER};
pub use transfer_counter::count_transfers;
