//! Employee records: the record type, request parsing and the repository seam.

pub mod model;
pub mod repository;

pub use model::{stored_id, Employee, REQUIRED_FIELDS};
pub use repository::EmployeeRepository;

/// Message returned for a successful add.
pub const EMPLOYEE_ADDED: &str = "Employee added successfully";
