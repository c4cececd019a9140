//! HTML templates for the task pages.
//!
//! Templates are embedded at compile time using `include_str!` and filled by
//! plain `{{placeholder}}` substitution.

use crate::types::Task;

/// Shared page layout with navigation.
pub const BASE_TEMPLATE: &str = include_str!("templates/base.html");

/// Task list page.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// New task form.
pub const ADD_TEMPLATE: &str = include_str!("templates/add.html");

/// Task detail page with edit and delete controls.
pub const TASK_TEMPLATE: &str = include_str!("templates/task.html");

/// Edit form, pre-filled.
pub const EDIT_TEMPLATE: &str = include_str!("templates/edit.html");

/// Escape HTML special characters.
///
/// Braces are escaped too so a value can never form a `{{placeholder}}`.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Wrap page content in the base layout.
fn layout(page_title: &str, content: &str) -> String {
    BASE_TEMPLATE
        .replace("{{page_title}}", &html_escape(page_title))
        .replace("{{content}}", content)
}

/// Fill the per-task placeholders of a template.
fn fill_task(template: &str, task: &Task) -> String {
    template
        .replace("{{task_id}}", &task.id.to_string())
        .replace("{{task_title}}", &html_escape(&task.title))
        .replace("{{task_desc}}", &html_escape(&task.desc))
}

pub fn render_index(tasks: &[Task]) -> String {
    let rows = if tasks.is_empty() {
        r#"<li class="empty-state">No tasks yet</li>"#.to_string()
    } else {
        tasks
            .iter()
            .map(|task| {
                format!(
                    r#"<li><span class="task-id">#{}</span><a href="/task/{}">{}</a></li>"#,
                    task.id,
                    task.id,
                    html_escape(&task.title)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let content = INDEX_TEMPLATE
        .replace("{{task_count}}", &tasks.len().to_string())
        .replace("{{task_rows}}", &rows);
    layout("All tasks", &content)
}

pub fn render_add() -> String {
    layout("New task", ADD_TEMPLATE)
}

pub fn render_task(task: &Task) -> String {
    layout(&task.title, &fill_task(TASK_TEMPLATE, task))
}

pub fn render_edit(task: &Task) -> String {
    layout(&format!("Edit {}", task.title), &fill_task(EDIT_TEMPLATE, task))
}
