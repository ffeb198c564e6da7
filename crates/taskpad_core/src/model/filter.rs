use crate::model::TaskStatus;
use serde::{Deserialize, Serialize};

/// View criterion controlling which tasks are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::Completed => status == TaskStatus::Completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use crate::model::TaskStatus;

    #[test]
    fn all_matches_both_statuses() {
        assert!(Filter::All.matches(TaskStatus::Pending));
        assert!(Filter::All.matches(TaskStatus::Completed));
    }

    #[test]
    fn status_filters_match_only_their_status() {
        assert!(Filter::Pending.matches(TaskStatus::Pending));
        assert!(!Filter::Pending.matches(TaskStatus::Completed));
        assert!(Filter::Completed.matches(TaskStatus::Completed));
        assert!(!Filter::Completed.matches(TaskStatus::Pending));
    }
}
