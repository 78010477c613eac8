// In memory employee store.
//
// Purpose
// - Serve lookups without a database.
//
// Responsibilities
// - Hold employees in a map keyed by id.
// - Load a seed from a JSON file at startup.
// - Simulate an unreachable or slow backend in tests.

use crate::modules::employees::adapters::outbound::employee_repository::EmployeeRepository;
use crate::modules::employees::core::entities::Employee;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: RwLock<HashMap<i64, Employee>>,
    is_offline: bool,
    delay_read_ms: Option<u64>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let rows = employees.into_iter().map(|e| (e.id, e)).collect();
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    /// Loads a JSON array of employees. A missing file yields an empty store.
    pub async fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "employee seed not found, starting empty");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading seed {}", path.display()));
            }
        };
        let employees: Vec<Employee> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed {}", path.display()))?;
        tracing::info!(path = %path.display(), count = employees.len(), "employee seed loaded");
        Ok(Self::with_employees(employees))
    }

    #[cfg(test)]
    pub async fn insert(&self, employee: Employee) {
        self.rows.write().await.insert(employee.id, employee);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_read_ms(&mut self, ms: u64) {
        self.delay_read_ms = Some(ms);
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Employee>> {
        if let Some(ms) = self.delay_read_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        if self.is_offline {
            return Err(anyhow::anyhow!("Employee repository offline"));
        }

        Ok(self.rows.read().await.get(&id).cloned())
    }
}
