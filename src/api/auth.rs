//! Auth Endpoints

use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

use super::{post_json, Result};

pub async fn login(req: &LoginRequest) -> Result<AuthResponse> {
    post_json("/auth/login", req).await
}

pub async fn register(req: &RegisterRequest) -> Result<AuthResponse> {
    post_json("/auth/register", req).await
}
