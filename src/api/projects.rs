//! Project Endpoints

use crate::models::{Project, ProjectProgress, ProjectRequest};

use super::{delete_json, encode_query, get_json, post_json, put_json, Result};

pub async fn list_projects() -> Result<Vec<Project>> {
    get_json("/projects").await
}

pub async fn get_project(id: i64) -> Result<Project> {
    get_json(&format!("/projects/{}", id)).await
}

pub async fn create_project(req: &ProjectRequest) -> Result<Project> {
    post_json("/projects", req).await
}

pub async fn update_project(id: i64, req: &ProjectRequest) -> Result<Project> {
    put_json(&format!("/projects/{}", id), req).await
}

pub async fn delete_project(id: i64) -> Result<()> {
    delete_json(&format!("/projects/{}", id)).await
}

pub async fn get_project_progress(id: i64) -> Result<ProjectProgress> {
    get_json(&format!("/projects/{}/progress", id)).await
}

pub async fn search_projects(query: &str) -> Result<Vec<Project>> {
    get_json(&format!("/projects/search?query={}", encode_query(query))).await
}
