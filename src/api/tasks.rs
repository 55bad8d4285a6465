//! Task Endpoints
//!
//! Tasks are addressed through their project, matching the backend's
//! nested routes.

use crate::models::{Task, TaskPriority, TaskRequest};

use super::{delete_json, encode_query, get_json, patch_json, post_json, put_json, Result};

pub async fn list_tasks(project_id: i64) -> Result<Vec<Task>> {
    get_json(&format!("/projects/{}/tasks", project_id)).await
}

pub async fn get_task(project_id: i64, task_id: i64) -> Result<Task> {
    get_json(&format!("/projects/{}/tasks/{}", project_id, task_id)).await
}

pub async fn create_task(project_id: i64, req: &TaskRequest) -> Result<Task> {
    post_json(&format!("/projects/{}/tasks", project_id), req).await
}

pub async fn update_task(project_id: i64, task_id: i64, req: &TaskRequest) -> Result<Task> {
    put_json(&format!("/projects/{}/tasks/{}", project_id, task_id), req).await
}

pub async fn delete_task(project_id: i64, task_id: i64) -> Result<()> {
    delete_json(&format!("/projects/{}/tasks/{}", project_id, task_id)).await
}

/// Flip completion; the response carries the new state and a refreshed
/// overdue flag
pub async fn toggle_task(project_id: i64, task_id: i64) -> Result<Task> {
    patch_json(&format!("/projects/{}/tasks/{}/toggle", project_id, task_id)).await
}

pub async fn complete_task(project_id: i64, task_id: i64) -> Result<Task> {
    patch_json(&format!("/projects/{}/tasks/{}/complete", project_id, task_id)).await
}

pub async fn tasks_by_status(project_id: i64, completed: bool) -> Result<Vec<Task>> {
    get_json(&format!("/projects/{}/tasks/status/{}", project_id, completed)).await
}

pub async fn tasks_by_priority(project_id: i64, priority: TaskPriority) -> Result<Vec<Task>> {
    get_json(&format!(
        "/projects/{}/tasks/priority/{}",
        project_id,
        priority.as_str()
    ))
    .await
}

pub async fn overdue_tasks(project_id: i64) -> Result<Vec<Task>> {
    get_json(&format!("/projects/{}/tasks/overdue", project_id)).await
}

pub async fn search_tasks(project_id: i64, query: &str) -> Result<Vec<Task>> {
    get_json(&format!(
        "/projects/{}/tasks/search?query={}",
        project_id,
        encode_query(query)
    ))
    .await
}
