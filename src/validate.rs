//! Form Validation
//!
//! Submit-time checks for the project, task and register forms. On
//! success the raw field values become a trimmed request payload with
//! empty optionals normalized to absent.

use chrono::NaiveDate;

use crate::models::{ProjectRequest, RegisterRequest, TaskPriority, TaskRequest};

pub const PROJECT_TITLE_MAX: usize = 100;
pub const TASK_TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFormErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFormErrors {
    pub title: Option<&'static str>,
    pub due_date: Option<&'static str>,
}

fn title_error(title: &str, max: usize) -> Option<&'static str> {
    let len = title.trim().chars().count();
    if len == 0 {
        Some("Title is required")
    } else if len < 2 {
        Some("Title must be at least 2 characters")
    } else if len > max {
        match max {
            PROJECT_TITLE_MAX => Some("Title cannot exceed 100 characters"),
            _ => Some("Title cannot exceed 200 characters"),
        }
    } else {
        None
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn validate_project(title: &str, description: &str) -> Result<ProjectRequest, ProjectFormErrors> {
    let errors = ProjectFormErrors {
        title: title_error(title, PROJECT_TITLE_MAX),
        description: (description.chars().count() > DESCRIPTION_MAX)
            .then_some("Description cannot exceed 1000 characters"),
    };
    if errors != ProjectFormErrors::default() {
        return Err(errors);
    }
    Ok(ProjectRequest {
        title: title.trim().to_string(),
        description: optional_text(description),
    })
}

pub fn validate_task(
    title: &str,
    description: &str,
    due_date: &str,
    priority: TaskPriority,
) -> Result<TaskRequest, TaskFormErrors> {
    let mut errors = TaskFormErrors {
        title: title_error(title, TASK_TITLE_MAX),
        due_date: None,
    };

    // Date inputs submit ISO dates or an empty string; anything else is a
    // browser falling back to a plain text field.
    let due = match due_date.trim() {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.due_date = Some("Enter a valid due date");
                None
            }
        },
    };

    if errors != TaskFormErrors::default() {
        return Err(errors);
    }
    Ok(TaskRequest {
        title: title.trim().to_string(),
        description: optional_text(description),
        due_date: due,
        priority,
    })
}

/// Local checks before the register request goes out. Field presence is
/// enforced by the form's required attributes; only the password rules
/// need code.
pub fn validate_register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, &'static str> {
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(RegisterRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_title_boundaries() {
        assert_eq!(
            validate_project("", "").unwrap_err().title,
            Some("Title is required")
        );
        assert_eq!(
            validate_project("   ", "").unwrap_err().title,
            Some("Title is required")
        );
        assert_eq!(
            validate_project("a", "").unwrap_err().title,
            Some("Title must be at least 2 characters")
        );
        assert!(validate_project("ab", "").is_ok());
        assert!(validate_project(&"a".repeat(100), "").is_ok());
        assert_eq!(
            validate_project(&"a".repeat(101), "").unwrap_err().title,
            Some("Title cannot exceed 100 characters")
        );
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        assert!(validate_project(&"é".repeat(100), "").is_ok());
        assert!(validate_project(&"é".repeat(101), "").is_err());
    }

    #[test]
    fn test_project_description_limit() {
        assert!(validate_project("Valid", &"d".repeat(1000)).is_ok());
        assert_eq!(
            validate_project("Valid", &"d".repeat(1001)).unwrap_err().description,
            Some("Description cannot exceed 1000 characters")
        );
    }

    #[test]
    fn test_project_payload_is_trimmed_and_normalized() {
        let req = validate_project("  Website redesign  ", "   ").unwrap();
        assert_eq!(req.title, "Website redesign");
        assert_eq!(req.description, None);

        let req = validate_project("Website redesign", "  Move the docs  ").unwrap();
        assert_eq!(req.description.as_deref(), Some("Move the docs"));
    }

    #[test]
    fn test_task_title_boundaries() {
        assert_eq!(
            validate_task("x", "", "", TaskPriority::Medium).unwrap_err().title,
            Some("Title must be at least 2 characters")
        );
        assert!(validate_task("ok", "", "", TaskPriority::Medium).is_ok());
        assert!(validate_task(&"t".repeat(200), "", "", TaskPriority::Medium).is_ok());
        assert_eq!(
            validate_task(&"t".repeat(201), "", "", TaskPriority::Medium)
                .unwrap_err()
                .title,
            Some("Title cannot exceed 200 characters")
        );
    }

    #[test]
    fn test_task_due_date_parsing() {
        let req = validate_task("Ship it", "", "", TaskPriority::Medium).unwrap();
        assert_eq!(req.due_date, None);

        let req = validate_task("Ship it", "", "2026-09-01", TaskPriority::Medium).unwrap();
        assert_eq!(req.due_date, NaiveDate::from_ymd_opt(2026, 9, 1));

        let errors = validate_task("Ship it", "", "next tuesday", TaskPriority::Medium).unwrap_err();
        assert_eq!(errors.due_date, Some("Enter a valid due date"));
        assert_eq!(errors.title, None);
    }

    #[test]
    fn test_task_priority_carries_through() {
        let req = validate_task("Ship it", "", "", TaskPriority::Urgent).unwrap();
        assert_eq!(req.priority, TaskPriority::Urgent);
        // The form seeds its state with the default
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn test_register_password_rules() {
        assert_eq!(
            validate_register("Demo", "User", "demo@taskmanager.com", "demo123", "demo124"),
            Err("Passwords do not match")
        );
        assert_eq!(
            validate_register("Demo", "User", "demo@taskmanager.com", "abc", "abc"),
            Err("Password must be at least 6 characters")
        );
        let req =
            validate_register("Demo", "User", "demo@taskmanager.com", "demo123", "demo123").unwrap();
        assert_eq!(req.email, "demo@taskmanager.com");
        assert_eq!(req.password, "demo123");
    }
}
