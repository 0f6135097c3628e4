//! Record store for employee records.
//! - `storage` holds the generic JSON-array file mechanics.
//! - `employees` defines the record type, input parsing and the repository trait.
//! - `file` provides the file-backed repository used by the server and the menu.

pub mod errors;
pub mod storage;
pub mod employees;
pub mod file;

pub use configs::JsonLayout;
