//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed array store. It keeps no in-memory copy:
//! every read goes to the file and every write replaces it.

pub mod json_array_store;
