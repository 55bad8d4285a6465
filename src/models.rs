//! Frontend Models
//!
//! Data structures matching the backend REST API, plus the derivations
//! the UI computes from them (progress, project status).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Authenticated user profile (stored in the session)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl User {
    /// Avatar initials, first letter of each name part
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect()
    }
}

/// Payload returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<&AuthResponse> for User {
    fn from(resp: &AuthResponse) -> Self {
        User {
            id: resp.user_id,
            email: resp.email.clone(),
            first_name: resp.first_name.clone(),
            last_name: resp.last_name.clone(),
            full_name: resp.full_name.clone(),
        }
    }
}

/// Project with aggregate task counts (computed server-side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_name: String,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub progress_percentage: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Project {
    pub fn status(&self) -> ProjectStatus {
        if self.total_tasks == 0 {
            ProjectStatus::NoTasks
        } else if self.progress_percentage == 100.0 {
            ProjectStatus::Completed
        } else if self.progress_percentage >= 75.0 {
            ProjectStatus::AlmostDone
        } else if self.progress_percentage >= 50.0 {
            ProjectStatus::InProgress
        } else if self.progress_percentage > 0.0 {
            ProjectStatus::Started
        } else {
            ProjectStatus::NotStarted
        }
    }
}

/// Project status buckets as reported by the progress endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    NoTasks,
    Completed,
    AlmostDone,
    InProgress,
    Started,
    NotStarted,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NoTasks => "No tasks",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::AlmostDone => "Almost done",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Started => "Started",
            ProjectStatus::NotStarted => "Not started",
        }
    }
}

/// Aggregate progress report for a single project
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub project_id: i64,
    pub project_title: String,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub progress_percentage: f64,
    pub status: ProjectStatus,
}

/// Task priority levels, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    /// Wire string, also used as the badge text and in endpoint paths
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Urgent => "URGENT",
        }
    }
}

/// Task within a project. `overdue` is computed by the backend
/// (due date in the past and not completed) and used as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub priority: TaskPriority,
    pub overdue: bool,
    pub project_id: i64,
    pub project_title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
}

/// Every backend response wraps its payload in this envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    pub timestamp: String,
}

/// Percentage of completed tasks, rounded and clamped to 0..=100.
/// An empty task list counts as 0 percent.
pub fn progress_percent(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (completed as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(total: u32, completed: u32, pct: f64) -> Project {
        Project {
            id: 1,
            title: "Website redesign".to_string(),
            description: None,
            owner_name: "Demo User".to_string(),
            total_tasks: total,
            completed_tasks: completed,
            progress_percentage: pct,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2026, 8, 2)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(3, 4), 75);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(4, 4), 100);
    }

    #[test]
    fn test_progress_percent_stays_in_range() {
        // Stale counts from a racing client must not escape 0..=100
        assert_eq!(progress_percent(5, 4), 100);
        for completed in 0..=10 {
            for total in 0..=10 {
                let pct = progress_percent(completed, total);
                assert!(pct <= 100, "{}/{} gave {}", completed, total, pct);
            }
        }
    }

    #[test]
    fn test_project_status_thresholds() {
        assert_eq!(make_project(0, 0, 0.0).status(), ProjectStatus::NoTasks);
        assert_eq!(make_project(4, 4, 100.0).status(), ProjectStatus::Completed);
        assert_eq!(make_project(4, 3, 75.0).status(), ProjectStatus::AlmostDone);
        assert_eq!(make_project(10, 6, 60.0).status(), ProjectStatus::InProgress);
        assert_eq!(make_project(2, 1, 50.0).status(), ProjectStatus::InProgress);
        assert_eq!(make_project(10, 3, 30.0).status(), ProjectStatus::Started);
        assert_eq!(make_project(3, 0, 0.0).status(), ProjectStatus::NotStarted);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::NoTasks.label(), "No tasks");
        assert_eq!(ProjectStatus::AlmostDone.label(), "Almost done");
    }

    #[test]
    fn test_user_initials() {
        let user = User {
            id: 1,
            email: "demo@taskmanager.com".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            full_name: "Demo User".to_string(),
        };
        assert_eq!(user.initials(), "DU");
    }

    #[test]
    fn test_user_from_auth_response() {
        let resp = AuthResponse {
            token: "jwt-token".to_string(),
            token_type: "Bearer".to_string(),
            user_id: 7,
            email: "demo@taskmanager.com".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            full_name: "Demo User".to_string(),
        };
        let user = User::from(&resp);
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, "Demo User");
    }

    #[test]
    fn test_priority_wire_strings() {
        assert_eq!(serde_json::to_string(&TaskPriority::High).unwrap(), "\"HIGH\"");
        let parsed: TaskPriority = serde_json::from_str("\"URGENT\"").unwrap();
        assert_eq!(parsed, TaskPriority::Urgent);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        assert!(TaskPriority::Low < TaskPriority::Urgent);
    }

    #[test]
    fn test_task_deserializes_from_backend_json() {
        let json = r#"{
            "id": 12,
            "title": "Write launch notes",
            "description": null,
            "dueDate": "2026-01-15",
            "completed": false,
            "completedAt": null,
            "priority": "HIGH",
            "overdue": true,
            "projectId": 3,
            "projectTitle": "Launch",
            "createdAt": "2026-01-02T08:15:00",
            "updatedAt": "2026-01-10T17:45:30"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 12);
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(task.priority, TaskPriority::High);
        assert!(task.overdue);
        assert_eq!(task.created_at.format("%H:%M").to_string(), "08:15");
    }

    #[test]
    fn test_envelope_unwraps_data() {
        let json = r#"{
            "success": true,
            "message": "Project retrieved successfully",
            "data": {
                "id": 1,
                "title": "Website redesign",
                "description": "Move the docs to the new layout",
                "ownerName": "Demo User",
                "totalTasks": 4,
                "completedTasks": 3,
                "progressPercentage": 75.0,
                "createdAt": "2026-08-01T09:00:00",
                "updatedAt": "2026-08-02T09:00:00"
            },
            "timestamp": "2026-08-02T09:00:01"
        }"#;
        let envelope: ApiEnvelope<Project> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.title, "Website redesign");
        assert_eq!(envelope.data.status(), ProjectStatus::AlmostDone);
    }

    #[test]
    fn test_task_request_skips_absent_optionals() {
        let req = TaskRequest {
            title: "Ship it".to_string(),
            description: None,
            due_date: None,
            priority: TaskPriority::Medium,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("dueDate"));
        assert!(json.contains("\"priority\":\"MEDIUM\""));

        let req = TaskRequest {
            title: "Ship it".to_string(),
            description: Some("With docs".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            priority: TaskPriority::High,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"dueDate\":\"2026-09-01\""));
    }

    #[test]
    fn test_project_request_skips_absent_description() {
        let req = ProjectRequest {
            title: "Q4 planning".to_string(),
            description: None,
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), "{\"title\":\"Q4 planning\"}");
    }
}
