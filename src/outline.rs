//! ASCII outline rendering for catalog trees.

use crate::models::Course;

const LAB: char = '◆';
const TASK: char = '○';
const STEP: char = '·';

/// Render a catalog forest as ASCII art with per-kind symbols.
///
/// Example output:
/// ```text
/// Rust Fundamentals
/// ├── ◆ Ownership
/// │   ├── ○ Move Semantics
/// │   │   ├── · Read the example
/// │   │   └── · Fix the borrow
/// │   └── ○ Borrowing
/// └── ◆ Lifetimes
/// ```
pub fn render_outline(courses: &[Course]) -> String {
    let mut output = String::new();
    for course in courses {
        // Course roots: just title (no branch characters)
        output.push_str(&course.title);
        output.push('\n');

        for (i, lab) in course.labs.iter().enumerate() {
            let lab_last = i == course.labs.len() - 1;
            push_line(&mut output, "", lab_last, LAB, &lab.title);
            let lab_prefix = child_prefix("", lab_last);

            for (j, task) in lab.tasks.iter().enumerate() {
                let task_last = j == lab.tasks.len() - 1;
                push_line(&mut output, &lab_prefix, task_last, TASK, &task.title);
                let task_prefix = child_prefix(&lab_prefix, task_last);

                for (k, step) in task.steps.iter().enumerate() {
                    let step_last = k == task.steps.len() - 1;
                    push_line(&mut output, &task_prefix, step_last, STEP, &step.title);
                }
            }
        }
    }
    output
}

fn push_line(output: &mut String, prefix: &str, is_last: bool, symbol: char, title: &str) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    output.push(symbol);
    output.push(' ');
    output.push_str(title);
    output.push('\n');
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    let continuation = if is_last { "    " } else { "│   " };
    format!("{}{}", prefix, continuation)
}
