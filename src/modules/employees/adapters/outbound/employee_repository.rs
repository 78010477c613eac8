use crate::modules::employees::core::entities::Employee;
use async_trait::async_trait;

/// Read access to the employee store. The department is resolved together
/// with the employee.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Employee>>;
}
