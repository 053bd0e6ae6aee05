//! Database seeding utility.
//!
//! Resets the three collections and loads the demo data set the frontend
//! was developed against: three users, three projects and fourteen tasks
//! wired to their projects by canonical id. Requires `DATABASE_URL`; the
//! in-memory store would forget everything at exit, so seeding it is
//! pointless.
//!
//! ```text
//! DATABASE_URL=postgres://... cargo run --bin seed
//! ```

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use gestion_proyectos::application::{aggregate, tasks_for_project};
use gestion_proyectos::domain::{
    DocumentId, ProjectStatus, StoredProject, StoredTask, StoredUser, TaskPriority, TaskState,
};
use gestion_proyectos::infrastructure::{
    AppConfig, COLLECTION_PROJECTS, COLLECTION_TASKS, COLLECTION_USERS, DocumentStore,
    PostgresDocumentStore, StoreError,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let Some(database_url) = config.database_url.as_deref() else {
        tracing::error!("DATABASE_URL must be set to seed a database");
        std::process::exit(1);
    };

    let store: Arc<dyn DocumentStore> = match PostgresDocumentStore::connect(database_url).await {
        Ok(store) => Arc::new(store),
        Err(error) => {
            tracing::error!(%error, "Failed to connect to Postgres");
            std::process::exit(1);
        }
    };

    if let Err(error) = seed(&store).await {
        tracing::error!(%error, "Seeding failed");
        std::process::exit(1);
    }
}

async fn seed(store: &Arc<dyn DocumentStore>) -> Result<(), StoreError> {
    tracing::info!("Resetting collections...");
    for collection in [COLLECTION_PROJECTS, COLLECTION_TASKS, COLLECTION_USERS] {
        clear_collection(store, collection).await?;
    }

    let users = seed_users(store).await?;
    tracing::info!("{users} usuarios creados");

    let project_ids = seed_projects(store).await?;
    tracing::info!("{} proyectos creados", project_ids.len());

    let tasks = seed_tasks(store, &project_ids).await?;
    tracing::info!("{tasks} tareas creadas");

    for id in &project_ids {
        let records = tasks_for_project(store, id).await?;
        let stats = aggregate(records.iter().map(|record| &record.task));
        tracing::info!(
            project_id = %id,
            total = stats.total,
            completadas = stats.completed,
            "project seeded"
        );
    }

    tracing::info!("Base de datos inicializada exitosamente");
    Ok(())
}

/// Deletes every document in a collection through the store trait.
async fn clear_collection(
    store: &Arc<dyn DocumentStore>,
    collection: &str,
) -> Result<(), StoreError> {
    for document in store.find_all(collection).await? {
        let id = DocumentId::parse(&document.id)
            .map_err(|error| StoreError::Serialization(error.to_string()))?;
        store.delete(collection, &id).await?;
    }
    Ok(())
}

async fn seed_users(store: &Arc<dyn DocumentStore>) -> Result<usize, StoreError> {
    let users = [
        ("Ana Martínez", "ana.martinez@empresa.com"),
        ("Carlos Ruiz", "carlos.ruiz@empresa.com"),
        ("Juan Pérez", "juan.perez@empresa.com"),
    ];

    for (name, email) in users {
        let user = StoredUser::new(name.to_string(), email.to_string(), "developer".to_string());
        let body = to_body(&user)?;
        store.insert(COLLECTION_USERS, body).await?;
    }

    Ok(users.len())
}

async fn seed_projects(store: &Arc<dyn DocumentStore>) -> Result<Vec<String>, StoreError> {
    let projects = [
        (
            "Sistema de Gestión",
            "Desarrollo del sistema de gestión de proyectos",
            ProjectStatus::Active,
            3,
            at(2023, 10, 15, 8, 0),
        ),
        (
            "Portal de Clientes",
            "Creación del nuevo portal para clientes",
            ProjectStatus::Active,
            2,
            at(2023, 10, 10, 10, 30),
        ),
        (
            "Migración de Datos",
            "Migración de la base de datos a la nueva versión",
            ProjectStatus::Completed,
            1,
            at(2023, 9, 20, 14, 15),
        ),
    ];

    let mut ids = Vec::with_capacity(projects.len());

    for (name, description, status, users, created_at) in projects {
        let project = StoredProject {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            status: Some(status),
            users: Some(users),
            created_at: Some(created_at),
        };
        let body = to_body(&project)?;
        let document = store.insert(COLLECTION_PROJECTS, body).await?;
        ids.push(document.id);
    }

    Ok(ids)
}

#[allow(clippy::too_many_lines)]
async fn seed_tasks(
    store: &Arc<dyn DocumentStore>,
    project_ids: &[String],
) -> Result<usize, StoreError> {
    use TaskPriority::{High, Low, Medium};
    use TaskState::{Completed, InProgress, Pending};

    // (description, priority, state, completed, assignee, project index, created)
    let tasks = [
        (
            "Diseño de la base de datos",
            High,
            Completed,
            true,
            Some("Ana Martínez"),
            0,
            at(2023, 10, 15, 9, 0),
        ),
        (
            "Implementación de API",
            High,
            Completed,
            true,
            Some("Carlos Ruiz"),
            0,
            at(2023, 10, 16, 10, 0),
        ),
        (
            "Desarrollo del frontend",
            Medium,
            InProgress,
            false,
            Some("Juan Pérez"),
            0,
            at(2023, 10, 17, 11, 0),
        ),
        (
            "Pruebas de integración",
            Medium,
            Pending,
            false,
            None,
            0,
            at(2023, 10, 18, 12, 0),
        ),
        (
            "Configuración del servidor",
            High,
            Completed,
            true,
            Some("Ana Martínez"),
            0,
            at(2023, 10, 19, 8, 0),
        ),
        (
            "Documentación técnica",
            Low,
            Pending,
            false,
            None,
            0,
            at(2023, 10, 20, 14, 0),
        ),
        (
            "Diseño de la interfaz",
            High,
            Completed,
            true,
            Some("Ana Martínez"),
            1,
            at(2023, 10, 10, 11, 0),
        ),
        (
            "Desarrollo del backend",
            High,
            InProgress,
            false,
            Some("Carlos Ruiz"),
            1,
            at(2023, 10, 11, 9, 0),
        ),
        (
            "Implementación de autenticación",
            Medium,
            Pending,
            false,
            None,
            1,
            at(2023, 10, 12, 10, 0),
        ),
        (
            "Análisis de datos existentes",
            High,
            Completed,
            true,
            Some("Juan Pérez"),
            2,
            at(2023, 9, 20, 15, 0),
        ),
        (
            "Creación de scripts de migración",
            High,
            Completed,
            true,
            Some("Juan Pérez"),
            2,
            at(2023, 9, 21, 10, 0),
        ),
        (
            "Ejecución de migración",
            High,
            Completed,
            true,
            Some("Juan Pérez"),
            2,
            at(2023, 9, 22, 8, 0),
        ),
        (
            "Validación de datos migrados",
            Medium,
            Completed,
            true,
            Some("Juan Pérez"),
            2,
            at(2023, 9, 23, 14, 0),
        ),
        (
            "Optimización de consultas",
            Medium,
            Completed,
            true,
            Some("Juan Pérez"),
            2,
            at(2023, 9, 24, 11, 0),
        ),
    ];

    for (description, priority, state, completed, assignee, project, created_at) in tasks {
        let task = StoredTask {
            description: Some(description.to_string()),
            priority: Some(priority),
            state: Some(state),
            is_completed: Some(completed),
            assignee: assignee.map(str::to_string),
            project_id: Some(project_ids[project].clone()),
            due_date: None,
            created_at: Some(created_at),
        };
        let body = to_body(&task)?;
        store.insert(COLLECTION_TASKS, body).await?;
    }

    Ok(tasks.len())
}

fn to_body<T: serde::Serialize>(entity: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(entity).map_err(|error| StoreError::Serialization(error.to_string()))
}

/// Fixed demo timestamp. All arguments are compile-time constants known to
/// form a valid UTC datetime.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid demo timestamp")
}
