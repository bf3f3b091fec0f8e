use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Course identifiers, compared by exact string equality.
pub type CourseSet = HashSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeProgram {
    pub name: String,
    pub courses: CourseSet,
}

/// Degree programs keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramCatalog {
    programs: HashMap<String, CourseSet>,
}

impl ProgramCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a program, returning the course set it replaced if the name was already present.
    pub fn insert(&mut self, program: DegreeProgram) -> Option<CourseSet> {
        self.programs.insert(program.name, program.courses)
    }

    pub fn get(&self, name: &str) -> Option<&CourseSet> {
        self.programs.get(name)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.programs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CourseSet)> {
        self.programs
            .iter()
            .map(|(name, courses)| (name.as_str(), courses))
    }
}

impl FromIterator<DegreeProgram> for ProgramCatalog {
    fn from_iter<I: IntoIterator<Item = DegreeProgram>>(iter: I) -> Self {
        let mut catalog = ProgramCatalog::new();
        for program in iter {
            catalog.insert(program);
        }
        catalog
    }
}

/// Accepted-course count per program name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCounts {
    counts: HashMap<String, usize>,
}

impl TransferCounts {
    /// Starts every program in the catalog at zero.
    pub fn zeroed(catalog: &ProgramCatalog) -> Self {
        Self {
            counts: catalog.names().map(|name| (name.to_string(), 0)).collect(),
        }
    }

    pub fn increment(&mut self, program: &str) {
        if let Some(count) = self.counts.get_mut(program) {
            *count += 1;
        }
    }

    pub fn get(&self, program: &str) -> Option<usize> {
        self.counts.get(program).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts ordered by program name, ascending.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for TransferCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            counts: iter
                .into_iter()
                .map(|(name, count)| (name.into(), count))
                .collect(),
        }
    }
}

/// Extract stage output.
#[derive(Debug, Clone)]
pub struct TransferInputs {
    pub courses: CourseSet,
    pub catalog: ProgramCatalog,
}

/// Transform stage output, consumed by the report writer.
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub courses: CourseSet,
    pub counts: TransferCounts,
}
