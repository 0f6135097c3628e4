use async_trait::async_trait;

use crate::employees::Employee;
use crate::errors::ServiceError;

/// Trait abstraction for employee record storage.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All records in insertion order.
    async fn list_all(&self) -> Vec<Employee>;
    /// First record whose id equals `id`.
    async fn find_by_id(&self, id: &str) -> Option<Employee>;
    /// Append a record after the duplicate-id check.
    async fn add(&self, employee: Employee) -> Result<(), ServiceError>;
}
