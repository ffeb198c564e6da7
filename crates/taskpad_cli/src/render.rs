use taskpad_core::model::{Task, TaskStatus};

/// Titles longer than this are truncated in list rows until expanded.
pub const TITLE_PREVIEW_LIMIT: usize = 72;

pub const EMPTY_PLACEHOLDER: &str = "No Task found.";

#[derive(Debug, Clone)]
pub struct Palette {
    pub accent: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn accentize(&self, text: &str) -> String {
        if self.accent.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.accent, text, self.reset)
        }
    }

    pub fn mutedize(&self, text: &str) -> String {
        if self.muted.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.muted, text, self.reset)
        }
    }
}

/// The light scheme renders plain text; the dark scheme carries ANSI color.
pub fn palette_for_theme(theme: Option<&str>) -> Palette {
    match theme {
        Some("dark") => Palette {
            accent: "\x1b[38;5;208m",
            muted: "\x1b[38;5;245m",
            reset: "\x1b[0m",
        },
        _ => Palette {
            accent: "",
            muted: "",
            reset: "",
        },
    }
}

pub fn list_header(filter_label: &str, palette: &Palette) -> String {
    palette.accentize(&format!("Your Tasks [{filter_label}]"))
}

/// One list row: checkbox marker, id, title, status. Long titles are cut at
/// the preview limit with an expand hint unless the row is expanded.
pub fn task_row(task: &Task, expanded: bool, palette: &Palette) -> String {
    let marker = match task.status {
        TaskStatus::Pending => "[ ]",
        TaskStatus::Completed => "[x]",
    };

    let title = preview_title(&task.title, task.id, expanded);
    let row = format!("{} {} | {} | {}", marker, task.id, title, task.status.label());

    if task.status == TaskStatus::Completed {
        palette.mutedize(&row)
    } else {
        row
    }
}

fn preview_title(title: &str, id: u64, expanded: bool) -> String {
    if expanded || title.chars().count() <= TITLE_PREVIEW_LIMIT {
        return title.to_string();
    }

    let cut: String = title.chars().take(TITLE_PREVIEW_LIMIT).collect();
    format!("{cut}... (expand {id} for more)")
}

pub fn tasks_json(tasks: &[Task]) -> serde_json::Value {
    let payload: Vec<serde_json::Value> = tasks
        .iter()
        .map(|task| {
            serde_json::json!({
                "id": task.id,
                "title": task.title,
                "status": task.status,
            })
        })
        .collect();
    serde_json::Value::Array(payload)
}
