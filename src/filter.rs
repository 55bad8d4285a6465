//! Task Filtering
//!
//! Pure list derivations for the task tabs and the search boxes.
//! Components re-run these whenever the backing signals change; there is
//! no caching layer in between.

use crate::models::{Project, Task};

/// Filter tabs shown above the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
}

impl TaskFilter {
    pub const TABS: [TaskFilter; 4] = [
        TaskFilter::All,
        TaskFilter::Pending,
        TaskFilter::Completed,
        TaskFilter::Overdue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
            TaskFilter::Overdue => "Overdue",
        }
    }

    /// Overdue means past due AND still open; a completed task is never
    /// overdue no matter what its due date says.
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::Overdue => task.overdue && !task.completed,
        }
    }

    /// Tab count, computed over the unfiltered list
    pub fn count(&self, tasks: &[Task]) -> usize {
        tasks.iter().filter(|t| self.accepts(t)).count()
    }
}

fn matches_query(title: &str, description: Option<&str>, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    if title.to_lowercase().contains(&needle) {
        return true;
    }
    description
        .map(|d| d.to_lowercase().contains(&needle))
        .unwrap_or(false)
}

/// Apply the active filter tab and search query, preserving source order.
/// The query matches title or description, case-insensitively; a missing
/// description never matches.
pub fn visible_tasks(tasks: &[Task], filter: TaskFilter, query: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| filter.accepts(t))
        .filter(|t| matches_query(&t.title, t.description.as_deref(), query))
        .cloned()
        .collect()
}

/// Same query predicate over the project list's local search box
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| matches_query(&p.title, p.description.as_deref(), query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;
    use chrono::NaiveDate;

    fn make_task(id: i64, title: &str, completed: bool, overdue: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            due_date: None,
            completed,
            completed_at: None,
            priority: TaskPriority::Medium,
            overdue,
            project_id: 1,
            project_title: "Launch".to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn with_description(mut task: Task, description: &str) -> Task {
        task.description = Some(description.to_string());
        task
    }

    fn fixture() -> Vec<Task> {
        vec![
            make_task(1, "Draft announcement", false, false),
            with_description(make_task(2, "Review copy", false, true), "announcement draft"),
            make_task(3, "Publish post", true, false),
            // Overdue flag can survive on completed rows; the tab must hide them
            make_task(4, "Archive assets", true, true),
            make_task(5, "Ship newsletter", false, true),
        ]
    }

    #[test]
    fn test_filter_tabs_partition() {
        let tasks = fixture();
        assert_eq!(TaskFilter::All.count(&tasks), 5);
        assert_eq!(TaskFilter::Pending.count(&tasks), 3);
        assert_eq!(TaskFilter::Completed.count(&tasks), 2);
        assert_eq!(TaskFilter::Overdue.count(&tasks), 2);
        assert_eq!(
            TaskFilter::Pending.count(&tasks) + TaskFilter::Completed.count(&tasks),
            tasks.len()
        );
    }

    #[test]
    fn test_overdue_excludes_completed() {
        let tasks = fixture();
        let overdue = visible_tasks(&tasks, TaskFilter::Overdue, "");
        let ids: Vec<i64> = overdue.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 5]);
        let completed = visible_tasks(&tasks, TaskFilter::Completed, "");
        assert!(completed.iter().any(|t| t.id == 4));
    }

    #[test]
    fn test_visible_tasks_identity() {
        let tasks = fixture();
        let visible = visible_tasks(&tasks, TaskFilter::All, "");
        assert_eq!(visible, tasks);
    }

    #[test]
    fn test_visible_tasks_subset_and_order() {
        let tasks = fixture();
        for filter in TaskFilter::TABS {
            let visible = visible_tasks(&tasks, filter, "draft");
            assert!(visible.iter().all(|t| filter.accepts(t)));
            // Source order survives filtering
            let ids: Vec<i64> = visible.iter().map(|t| t.id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(ids, sorted);
        }
    }

    #[test]
    fn test_query_matches_title_or_description() {
        let tasks = fixture();
        let hits = visible_tasks(&tasks, TaskFilter::All, "announcement");
        let ids: Vec<i64> = hits.iter().map(|t| t.id).collect();
        // Task 1 by title, task 2 by description
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let tasks = fixture();
        assert_eq!(
            visible_tasks(&tasks, TaskFilter::All, "  ANNOUNCEMENT  "),
            visible_tasks(&tasks, TaskFilter::All, "announcement")
        );
        // Whitespace-only behaves like no query at all
        assert_eq!(visible_tasks(&tasks, TaskFilter::All, "   "), tasks);
    }

    #[test]
    fn test_missing_description_never_matches() {
        let tasks = vec![make_task(1, "Draft", false, false)];
        assert!(visible_tasks(&tasks, TaskFilter::All, "anything").is_empty());
    }

    #[test]
    fn test_filter_and_query_commute() {
        let tasks = fixture();
        for filter in TaskFilter::TABS {
            let filter_then_query =
                visible_tasks(&visible_tasks(&tasks, filter, ""), TaskFilter::All, "draft");
            let query_then_filter =
                visible_tasks(&visible_tasks(&tasks, TaskFilter::All, "draft"), filter, "");
            assert_eq!(filter_then_query, query_then_filter);
        }
    }

    #[test]
    fn test_filter_projects_by_query() {
        use crate::models::Project;
        let make_project = |id: i64, title: &str, description: Option<&str>| Project {
            id,
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            owner_name: "Demo User".to_string(),
            total_tasks: 0,
            completed_tasks: 0,
            progress_percentage: 0.0,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };
        let projects = vec![
            make_project(1, "Website redesign", None),
            make_project(2, "Mobile app", Some("redesign of the onboarding flow")),
            make_project(3, "Infrastructure", None),
        ];
        let hits = filter_projects(&projects, "redesign");
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(filter_projects(&projects, ""), projects);
    }
}
