//! HTTP client wrapper for integration tests.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

#[derive(Clone)]
pub struct ProjectApiClient {
    client: Client,
    base_url: String,
}

impl ProjectApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    // Operational endpoints
    pub async fn root(&self) -> ApiResult<MessageDto> {
        self.get("/").await
    }

    pub async fn health(&self) -> ApiResult<HealthDto> {
        self.get("/health").await
    }

    // Project operations
    pub async fn list_projects(&self) -> ApiResult<Vec<ProjectDto>> {
        self.get("/api/projects").await
    }

    pub async fn get_project(&self, project_id: &str) -> ApiResult<ProjectDto> {
        self.get(&format!("/api/projects/{project_id}")).await
    }

    pub async fn create_project(&self, request: &ProjectRequest) -> ApiResult<ProjectDto> {
        self.post("/api/projects", request).await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        request: &ProjectRequest,
    ) -> ApiResult<ProjectDto> {
        self.put(&format!("/api/projects/{project_id}"), request)
            .await
    }

    pub async fn delete_project(&self, project_id: &str) -> ApiResult<MessageDto> {
        self.delete(&format!("/api/projects/{project_id}")).await
    }

    pub async fn list_project_tasks(&self, project_id: &str) -> ApiResult<Vec<TaskDto>> {
        self.get(&format!("/api/projects/{project_id}/tasks")).await
    }

    // Task operations
    pub async fn create_task(&self, request: &TaskRequest) -> ApiResult<TaskDto> {
        self.post("/api/tasks", request).await
    }

    /// Sends an arbitrary JSON body, for exercising request validation.
    pub async fn create_task_raw(&self, body: &serde_json::Value) -> ApiResult<TaskDto> {
        self.post("/api/tasks", body).await
    }

    pub async fn update_task(&self, task_id: &str, request: &TaskRequest) -> ApiResult<TaskDto> {
        self.put(&format!("/api/tasks/{task_id}"), request).await
    }

    pub async fn delete_task(&self, task_id: &str) -> ApiResult<MessageDto> {
        self.delete(&format!("/api/tasks/{task_id}")).await
    }

    // User operations
    pub async fn list_users(&self) -> ApiResult<Vec<UserDto>> {
        self.get("/api/users").await
    }

    pub async fn create_user(&self, request: &UserRequest) -> ApiResult<UserDto> {
        self.post("/api/users", request).await
    }

    pub async fn update_user(&self, user_id: &str, request: &UserRequest) -> ApiResult<UserDto> {
        self.put(&format!("/api/users/{user_id}"), request).await
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResult<MessageDto> {
        self.delete(&format!("/api/users/{user_id}")).await
    }

    // Internal helpers
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        parse_response(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn post<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn put<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self
            .client
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        parse_response(response).await
    }
}

pub type ApiResult<T> = Result<ApiSuccess<T>, ApiError>;

/// A successful response with the status it was served under, so tests can
/// distinguish 200 from 201.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T> {
    pub status: StatusCode,
    pub body: T,
}

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Api { status: StatusCode, code: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.json().await.map_err(ApiError::Http)?;
        Ok(ApiSuccess { status, body })
    } else {
        // axum's built-in Json rejection (422 on missing fields) has a
        // plain-text body, so a missing/unparseable code becomes "".
        let code = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.code)
            .unwrap_or_default();
        Err(ApiError::Api { status, code })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
}

// DTO types for tests

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskRequest {
    pub descripcion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioridad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completada: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_limite: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthDto {
    pub status: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub users: i64,
    pub created_at: Option<String>,
    pub total: u64,
    pub completadas: u64,
    pub pendientes: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TaskDto {
    #[serde(rename = "_id")]
    pub raw_id: String,
    pub id: String,
    pub descripcion: String,
    pub prioridad: String,
    pub estado: String,
    pub completada: bool,
    pub usuario: Option<String>,
    pub project_id: String,
    pub fecha_limite: Option<String>,
    pub creada_en: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<String>,
}
