pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{
    CourseSet, DegreeProgram, ProgramCatalog, TransferCounts, TransferInputs, TransferResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
