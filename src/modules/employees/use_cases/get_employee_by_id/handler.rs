use crate::modules::employees::adapters::outbound::employee_repository::EmployeeRepository;
use crate::modules::employees::use_cases::get_employee_by_id::view::EmployeeView;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no employee with id {id}")]
    NotFound { id: i64 },

    #[error("employee store did not answer for id {id} within {after:?}")]
    Timeout { id: i64, after: Duration },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub struct GetEmployeeByIdHandler {
    repository: Arc<dyn EmployeeRepository>,
    store_timeout: Duration,
}

impl GetEmployeeByIdHandler {
    pub fn new(repository: Arc<dyn EmployeeRepository>, store_timeout: Duration) -> Self {
        Self {
            repository,
            store_timeout,
        }
    }

    pub async fn handle(&self, id: i64) -> Result<EmployeeView, LookupError> {
        let found = tokio::time::timeout(self.store_timeout, self.repository.find_by_id(id))
            .await
            .map_err(|_| LookupError::Timeout {
                id,
                after: self.store_timeout,
            })??;

        match found {
            Some(employee) => {
                tracing::debug!(id, "employee found");
                Ok(employee.into())
            }
            None => Err(LookupError::NotFound { id }),
        }
    }
}
