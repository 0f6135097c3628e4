//! File-backed implementations of the service traits.

pub mod employee_store;
