//! Test data factories for integration tests.

use super::client::{ProjectRequest, TaskRequest, UserRequest};
use uuid::Uuid;

pub struct ProjectFactory;

impl ProjectFactory {
    pub fn create_request(name: &str, status: Option<&str>, users: Option<i64>) -> ProjectRequest {
        ProjectRequest {
            name: name.to_string(),
            description: format!("Descripción de {name}"),
            status: status.map(str::to_string),
            users,
        }
    }

    pub fn active_project(name: &str) -> ProjectRequest {
        Self::create_request(name, Some("Activo"), Some(3))
    }

    /// Only the required fields; everything else exercises server defaults.
    pub fn minimal_project(name: &str) -> ProjectRequest {
        Self::create_request(name, None, None)
    }
}

pub struct TaskFactory;

impl TaskFactory {
    pub fn create_request(description: &str, project_id: &str, completed: bool) -> TaskRequest {
        TaskRequest {
            descripcion: description.to_string(),
            prioridad: Some("alta".to_string()),
            estado: Some(if completed { "completada" } else { "pendiente" }.to_string()),
            completada: Some(completed),
            usuario: Some("Ana Martínez".to_string()),
            project_id: project_id.to_string(),
            fecha_limite: None,
        }
    }

    pub fn completed_task(project_id: &str) -> TaskRequest {
        Self::create_request("Diseño de la base de datos", project_id, true)
    }

    pub fn pending_task(project_id: &str) -> TaskRequest {
        Self::create_request("Pruebas de integración", project_id, false)
    }

    /// Only the required fields; everything else exercises server defaults.
    pub fn minimal_task(project_id: &str) -> TaskRequest {
        TaskRequest {
            descripcion: "Documentación técnica".to_string(),
            prioridad: None,
            estado: None,
            completada: None,
            usuario: None,
            project_id: project_id.to_string(),
            fecha_limite: None,
        }
    }
}

pub struct UserFactory;

impl UserFactory {
    pub fn developer(name: &str, email: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: Some("developer".to_string()),
        }
    }

    /// Omits the role so the server default applies.
    pub fn without_role(name: &str, email: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: None,
        }
    }
}

/// A well-formed id that matches no stored document.
pub fn non_existent_uuid() -> String {
    Uuid::now_v7().to_string()
}

/// Malformed ids the frontend has been seen to send.
pub fn malformed_ids() -> Vec<&'static str> {
    vec!["not-a-valid-id", "undefined", "123"]
}
