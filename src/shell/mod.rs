// Composition root for the employees service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the employee store and seed it.
// - Wire the store into the lookup handler.
// - Spawn the scheduled worker.

pub mod config;
pub mod http;
pub mod state;
pub mod workers;

use std::sync::Arc;

use crate::modules::employees::adapters::outbound::employee_repository_in_memory::InMemoryEmployeeRepository;
use crate::modules::employees::use_cases::get_employee_by_id::handler::GetEmployeeByIdHandler;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = InMemoryEmployeeRepository::from_json_file(&config.employee_seed_path).await?;
    if repository.is_empty().await {
        tracing::warn!("employee store is empty, every lookup will answer 1001");
    } else {
        tracing::info!(employees = repository.len().await, "employee store ready");
    }
    let get_employee_by_id = Arc::new(GetEmployeeByIdHandler::new(
        Arc::new(repository),
        config.store_timeout,
    ));
    Ok(AppState { get_employee_by_id })
}
