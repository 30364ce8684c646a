//! Frontend Models
//!
//! Data structures matching the remote API's wire format.

use serde::{Deserialize, Serialize};

/// A single task within a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// A task list with its ordered tasks
///
/// `completion_percentage` is derived server-side; the client never computes
/// it for a list it received from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub completion_percentage: f64,
    pub tasks: Vec<Task>,
}

/// Lightweight list entry for the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub completion_percentage: f64,
    #[serde(default)]
    pub task_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_format() {
        let json = r#"{"_id":7,"text":"buy milk","completed":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["_id"], 7);
    }

    #[test]
    fn test_list_wire_format() {
        let json = r#"{
            "_id": "abc123",
            "title": "Groceries",
            "completionPercentage": 25.0,
            "tasks": [{"_id":1,"text":"a","completed":true}]
        }"#;
        let list: TaskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.id, "abc123");
        assert_eq!(list.completion_percentage, 25.0);
        assert_eq!(list.tasks.len(), 1);
    }

    #[test]
    fn test_summary_task_count_defaults_to_zero() {
        let json = r#"{"_id":"x","title":"t","completionPercentage":0}"#;
        let summary: ListSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.task_count, 0);
    }
}
