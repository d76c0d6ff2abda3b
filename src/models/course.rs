use serde::{Deserialize, Serialize};

/// A top-level unit of educational content.
///
/// Courses form the roots of the catalog forest. Each course owns an
/// ordered sequence of labs; that stored order is the order every
/// traversal visits them in.
///
/// Ids are unique among siblings only. Two different courses may each
/// contain a lab with the same id, which is why id-based search walks the
/// whole forest instead of consulting an index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub labs: Vec<Lab>,
}

/// A hands-on exercise within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lab {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A unit of work within a lab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single instruction within a task. Leaf of the catalog tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

/// The step-shaped view of a task: id and metadata without the child list.
///
/// The task endpoint responds with this summary rather than the full
/// [`Task`]; clients fetch individual steps through the step endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

impl From<Task> for TaskSummary {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
        }
    }
}
