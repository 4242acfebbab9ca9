use jiff::civil::DateTime;
use roster_core::{
    models::{Appointment, Resource, ResourceType},
    params::CreateAppointment,
    RepositoryBuilder,
};
use tempfile::TempDir;

/// Helper function to create a repository in a temporary directory
#[allow(dead_code)]
pub async fn create_test_repository() -> (TempDir, roster_core::Repository) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let repository = RepositoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create repository");
    (temp_dir, repository)
}

/// Helper function to build a valid appointment for `resource`
#[allow(dead_code)]
pub fn appointment(resource: &Resource, title: &str, start: DateTime, end: DateTime) -> Appointment {
    Appointment::new(CreateAppointment {
        title: title.to_string(),
        start,
        end,
        resource_id: resource.id,
        ..Default::default()
    })
    .expect("Failed to build appointment")
}

/// Helper function to build a room resource
#[allow(dead_code)]
pub fn room(name: &str) -> Resource {
    Resource::new(name, ResourceType::Room)
}
