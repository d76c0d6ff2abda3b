pub mod locate;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::models::*;

/// Errors raised while loading a catalog document.
///
/// The serving path never produces these; once a catalog loads, every
/// lookup is total and expresses absence as `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate {kind} id \"{id}\" under {parent}")]
    DuplicateId {
        kind: &'static str,
        id: String,
        parent: String,
    },
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    courses: Vec<Course>,
}

/// Node counts per level, as reported by `cbook check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    pub courses: usize,
    pub labs: usize,
    pub tasks: usize,
    pub steps: usize,
}

/// The in-memory catalog store.
///
/// Holds the full forest of courses behind an `Arc`, so cloning the store
/// for each request handler shares one immutable tree. Nothing mutates the
/// forest after construction; every accessor is a pure read.
#[derive(Clone, Debug)]
pub struct Catalog {
    courses: Arc<Vec<Course>>,
}

impl Catalog {
    /// Load and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        validate(&file.courses)?;
        Ok(Self::from_courses(file.courses))
    }

    /// Build a store from an already-constructed forest. Used by tests;
    /// skips sibling-id validation.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(courses),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get_all_courses(&self) -> Vec<Course> {
        self.courses.to_vec()
    }

    pub fn get_course(&self, course_id: &str) -> Option<Course> {
        locate::find_course(&self.courses, course_id).cloned()
    }

    pub fn get_lab(&self, course_id: &str, lab_id: &str) -> Option<Lab> {
        locate::find_lab(&self.courses, course_id, lab_id).cloned()
    }

    pub fn get_task(&self, course_id: &str, lab_id: &str, task_id: &str) -> Option<Task> {
        locate::find_task(&self.courses, course_id, lab_id, task_id).cloned()
    }

    pub fn get_step(
        &self,
        course_id: &str,
        lab_id: &str,
        task_id: &str,
        step_id: &str,
    ) -> Option<Step> {
        locate::find_step(&self.courses, course_id, lab_id, task_id, step_id).cloned()
    }

    pub fn get_item(&self, item_id: &str, order: TraversalOrder) -> Option<FoundItem> {
        locate::find_item(&self.courses, item_id, order)
    }

    pub fn counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts {
            courses: self.courses.len(),
            labs: 0,
            tasks: 0,
            steps: 0,
        };
        for course in self.courses.iter() {
            counts.labs += course.labs.len();
            for lab in &course.labs {
                counts.tasks += lab.tasks.len();
                for task in &lab.tasks {
                    counts.steps += task.steps.len();
                }
            }
        }
        counts
    }
}

/// Reject sibling groups that reuse an id.
///
/// Ids only have to be unique among siblings; the same id under two
/// different parents is legal and resolvable through path lookups.
fn validate(courses: &[Course]) -> Result<(), CatalogError> {
    check_unique("course", courses.iter().map(|c| c.id.as_str()), "the catalog root")?;
    for course in courses {
        let parent = format!("course \"{}\"", course.id);
        check_unique("lab", course.labs.iter().map(|l| l.id.as_str()), &parent)?;
        for lab in &course.labs {
            let parent = format!("lab \"{}\"", lab.id);
            check_unique("task", lab.tasks.iter().map(|t| t.id.as_str()), &parent)?;
            for task in &lab.tasks {
                let parent = format!("task \"{}\"", task.id);
                check_unique("step", task.steps.iter().map(|s| s.id.as_str()), &parent)?;
            }
        }
    }
    Ok(())
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    parent: &str,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
                parent: parent.to_string(),
            });
        }
    }
    Ok(())
}
