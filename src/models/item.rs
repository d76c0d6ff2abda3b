use serde::{Deserialize, Serialize};

use super::{Course, Lab, Step, Task};

/// Any node of the catalog tree, tagged with its kind.
///
/// Lookups by bare id can land on any level, so the result carries an
/// explicit `kind` discriminant in its JSON form:
/// `{"kind": "task", "id": ..., ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogNode {
    Course(Course),
    Lab(Lab),
    Task(Task),
    Step(Step),
}

impl CatalogNode {
    /// The matched node's own id, whatever its kind.
    pub fn id(&self) -> &str {
        match self {
            Self::Course(c) => &c.id,
            Self::Lab(l) => &l.id,
            Self::Task(t) => &t.id,
            Self::Step(s) => &s.id,
        }
    }
}

/// The result of an id-based catalog search.
///
/// Pairs the matched node with the ids of its ancestors. A matched course
/// has no ancestors; a matched step has all three. The node's fields are
/// flattened into the JSON response alongside the context ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundItem {
    #[serde(flatten)]
    pub item: CatalogNode,
    /// Id of the course the match sits under, if the match is not itself a course.
    pub course_id: Option<String>,
    /// Id of the lab the match sits under, for task and step matches.
    pub lab_id: Option<String>,
    /// Id of the task the match sits under, for step matches.
    pub task_id: Option<String>,
}

impl FoundItem {
    pub fn course(course: &Course) -> Self {
        Self {
            item: CatalogNode::Course(course.clone()),
            course_id: None,
            lab_id: None,
            task_id: None,
        }
    }

    pub fn lab(course: &Course, lab: &Lab) -> Self {
        Self {
            item: CatalogNode::Lab(lab.clone()),
            course_id: Some(course.id.clone()),
            lab_id: None,
            task_id: None,
        }
    }

    pub fn task(course: &Course, lab: &Lab, task: &Task) -> Self {
        Self {
            item: CatalogNode::Task(task.clone()),
            course_id: Some(course.id.clone()),
            lab_id: Some(lab.id.clone()),
            task_id: None,
        }
    }

    pub fn step(course: &Course, lab: &Lab, task: &Task, step: &Step) -> Self {
        Self {
            item: CatalogNode::Step(step.clone()),
            course_id: Some(course.id.clone()),
            lab_id: Some(lab.id.clone()),
            task_id: Some(task.id.clone()),
        }
    }
}
