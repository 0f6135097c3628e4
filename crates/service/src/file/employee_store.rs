use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use configs::JsonLayout;
use serde_json::Value;
use tracing::{info, warn};

use crate::employees::{stored_id, Employee, EmployeeRepository};
use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;

/// 文件存储：以 JSON 数组文件持久化员工记录
///
/// Every call works against a fresh read of the file. Records are kept as raw
/// JSON so a rewrite carries unknown keys and oddly typed values through
/// unchanged; they are only converted to [`Employee`] on the way out. `add` is
/// a plain read-modify-write with no locking, so concurrent adds can overwrite
/// each other.
#[derive(Clone, Debug)]
pub struct EmployeeStore {
    store: JsonArrayStore<Value>,
}

impl EmployeeStore {
    /// Initialize the store, creating an empty file if missing.
    pub async fn new<P: Into<PathBuf>>(path: P, layout: JsonLayout) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::open(path, layout).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// List all employees in file order.
    pub async fn list_all(&self) -> Vec<Employee> {
        self.store.load().await.iter().filter_map(Employee::from_stored).collect()
    }

    /// First employee with the given id.
    pub async fn find_by_id(&self, id: &str) -> Option<Employee> {
        self.store.load().await.iter().filter_map(Employee::from_stored).find(|e| e.id == id)
    }

    /// Append an employee unless its id is already taken.
    pub async fn add(&self, employee: Employee) -> Result<(), ServiceError> {
        let mut all = self.store.load().await;
        if all.iter().any(|r| stored_id(r).as_deref() == Some(employee.id.as_str())) {
            warn!(id = %employee.id, "rejecting duplicate employee id");
            return Err(ServiceError::DuplicateId);
        }

        let id = employee.id.clone();
        let record = serde_json::to_value(&employee)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        all.push(record);
        if !self.store.save(&all).await {
            return Err(ServiceError::SaveFailed);
        }
        info!(%id, total = all.len(), "employee added");
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list_all(&self) -> Vec<Employee> { self.list_all().await }
    async fn find_by_id(&self, id: &str) -> Option<Employee> { self.find_by_id(id).await }
    async fn add(&self, employee: Employee) -> Result<(), ServiceError> { self.add(employee).await }
}
