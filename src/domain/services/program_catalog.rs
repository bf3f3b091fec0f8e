use crate::domain::model::{CourseSet, DegreeProgram, ProgramCatalog};
use crate::utils::error::{Result, TransferError};

/// Any line containing this token opens a new program section.
pub const PROGRAM_MARKER: &str = "Program";

/// The program name starts this many characters into a marker line (`"Program:"` is 8 long).
pub const PROGRAM_NAME_OFFSET: usize = 8;

/// Parses concatenated `Program: <name>` sections, each followed by its transferable courses.
///
/// The name is taken positionally from [`PROGRAM_NAME_OFFSET`] and trimmed. A course line
/// before the first marker, or a marker line with no name, is a [`TransferError::MalformedCatalog`].
pub fn parse_program_catalog(content: &str) -> Result<ProgramCatalog> {
    tracing::info!("Generating degree program catalog...");

    let mut catalog = ProgramCatalog::new();
    let mut current: Option<DegreeProgram> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        if line.contains(PROGRAM_MARKER) {
            if let Some(program) = current.take() {
                flush(&mut catalog, program);
            }
            current = Some(DegreeProgram {
                name: program_name(line, line_number)?,
                courses: CourseSet::new(),
            });
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match current.as_mut() {
            Some(program) => {
                program.courses.insert(line.to_string());
            }
            None => {
                return Err(TransferError::MalformedCatalog {
                    line: line_number,
                    message: format!(
                        "course '{}' appears before any '{}' line",
                        line, PROGRAM_MARKER
                    ),
                });
            }
        }
    }

    if let Some(program) = current {
        flush(&mut catalog, program);
    }

    tracing::debug!("Parsed {} degree programs", catalog.len());
    Ok(catalog)
}

fn program_name(line: &str, line_number: usize) -> Result<String> {
    let name = match line.char_indices().nth(PROGRAM_NAME_OFFSET) {
        Some((start, _)) => line[start..].trim(),
        None => "",
    };

    if name.is_empty() {
        return Err(TransferError::MalformedCatalog {
            line: line_number,
            message: format!("marker line '{}' has no program name", line),
        });
    }

    Ok(name.to_string())
}

fn flush(catalog: &mut ProgramCatalog, program: DegreeProgram) {
    tracing::debug!(
        "Program '{}' accepts {} courses",
        program.name,
        program.courses.len()
    );
    let name = program.name.clone();
    if catalog.insert(program).is_some() {
        tracing::warn!("Program '{}' listed more than once; keeping the last section", name);
    }
}
