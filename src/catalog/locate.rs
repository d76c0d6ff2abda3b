//! Tree lookups over the catalog forest.
//!
//! Two families of lookup:
//!
//! - path-based (`find_course` through `find_step`): the caller names every
//!   ancestor, so each level is a linear scan of one sibling group. A
//!   missing ancestor short-circuits to `None`; the caller cannot tell
//!   which link broke, only that the path does not resolve.
//! - id-based (`find_item`): the caller names only the node. Ids are
//!   unique among siblings, not globally, so the search walks the entire
//!   forest and returns the first match under the requested
//!   [`TraversalOrder`].
//!
//! Id comparison is exact string equality. No trimming, no case folding.

use crate::models::{Course, FoundItem, Lab, Step, Task, TraversalOrder};

/// Find a course by id in the top-level sequence.
pub fn find_course<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    courses.iter().find(|course| course.id == course_id)
}

/// Find a lab by id under the given course.
pub fn find_lab<'a>(courses: &'a [Course], course_id: &str, lab_id: &str) -> Option<&'a Lab> {
    find_course(courses, course_id)?
        .labs
        .iter()
        .find(|lab| lab.id == lab_id)
}

/// Find a task by id under the given course and lab.
pub fn find_task<'a>(
    courses: &'a [Course],
    course_id: &str,
    lab_id: &str,
    task_id: &str,
) -> Option<&'a Task> {
    find_lab(courses, course_id, lab_id)?
        .tasks
        .iter()
        .find(|task| task.id == task_id)
}

/// Find a step by id under the given course, lab, and task.
pub fn find_step<'a>(
    courses: &'a [Course],
    course_id: &str,
    lab_id: &str,
    task_id: &str,
    step_id: &str,
) -> Option<&'a Step> {
    find_task(courses, course_id, lab_id, task_id)?
        .steps
        .iter()
        .find(|step| step.id == step_id)
}

/// Search the whole forest for a node with the given id.
///
/// Returns the first match under `order`, together with its ancestor ids.
/// Siblings are always visited in stored order, so the result is
/// deterministic for a fixed forest and order.
pub fn find_item(courses: &[Course], item_id: &str, order: TraversalOrder) -> Option<FoundItem> {
    match order {
        TraversalOrder::Pre | TraversalOrder::Post => courses
            .iter()
            .find_map(|course| search_course(course, item_id, order)),
        TraversalOrder::Level => search_by_level(courses, item_id),
    }
}

fn search_course(course: &Course, item_id: &str, order: TraversalOrder) -> Option<FoundItem> {
    if order == TraversalOrder::Pre && course.id == item_id {
        return Some(FoundItem::course(course));
    }
    for lab in &course.labs {
        if let Some(found) = search_lab(course, lab, item_id, order) {
            return Some(found);
        }
    }
    if order == TraversalOrder::Post && course.id == item_id {
        return Some(FoundItem::course(course));
    }
    None
}

fn search_lab(course: &Course, lab: &Lab, item_id: &str, order: TraversalOrder) -> Option<FoundItem> {
    if order == TraversalOrder::Pre && lab.id == item_id {
        return Some(FoundItem::lab(course, lab));
    }
    for task in &lab.tasks {
        if let Some(found) = search_task(course, lab, task, item_id, order) {
            return Some(found);
        }
    }
    if order == TraversalOrder::Post && lab.id == item_id {
        return Some(FoundItem::lab(course, lab));
    }
    None
}

fn search_task(
    course: &Course,
    lab: &Lab,
    task: &Task,
    item_id: &str,
    order: TraversalOrder,
) -> Option<FoundItem> {
    if order == TraversalOrder::Pre && task.id == item_id {
        return Some(FoundItem::task(course, lab, task));
    }
    for step in &task.steps {
        // Steps are leaves, so pre and post agree on them.
        if step.id == item_id {
            return Some(FoundItem::step(course, lab, task, step));
        }
    }
    if order == TraversalOrder::Post && task.id == item_id {
        return Some(FoundItem::task(course, lab, task));
    }
    None
}

/// Breadth-first search: every node of one depth is visited before any
/// node of the next, within a depth in stored sibling order.
fn search_by_level(courses: &[Course], item_id: &str) -> Option<FoundItem> {
    if let Some(course) = courses.iter().find(|course| course.id == item_id) {
        return Some(FoundItem::course(course));
    }

    for course in courses {
        for lab in &course.labs {
            if lab.id == item_id {
                return Some(FoundItem::lab(course, lab));
            }
        }
    }

    for course in courses {
        for lab in &course.labs {
            for task in &lab.tasks {
                if task.id == item_id {
                    return Some(FoundItem::task(course, lab, task));
                }
            }
        }
    }

    for course in courses {
        for lab in &course.labs {
            for task in &lab.tasks {
                for step in &task.steps {
                    if step.id == item_id {
                        return Some(FoundItem::step(course, lab, task, step));
                    }
                }
            }
        }
    }

    None
}
