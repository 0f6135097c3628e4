use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

/// Fields an add request must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "department", "salary"];

/// One employee's id/name/department/salary tuple.
///
/// Records read back from the file go through [`Employee::from_stored`], which
/// never rejects an object, so files written by other tools still load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self { id: id.into(), name: name.into(), department: department.into(), salary }
    }

    /// Build a record from an API request body.
    ///
    /// Presence is checked first for every field in [`REQUIRED_FIELDS`] order;
    /// absent, `null`, `false`, `0`, `""`, `[]` and `{}` all count as missing.
    /// Only then are the values converted.
    pub fn from_json(body: &Value) -> Result<Self, ServiceError> {
        let obj = body
            .as_object()
            .ok_or_else(|| ServiceError::Validation("Invalid JSON body".into()))?;

        for field in REQUIRED_FIELDS {
            if !obj.get(field).is_some_and(is_truthy) {
                return Err(ServiceError::MissingField(field));
            }
        }

        Ok(Self {
            id: id_field(obj)?,
            name: text_field(obj, "name")?,
            department: text_field(obj, "department")?,
            salary: salary_field(obj)?,
        })
    }

    /// View a record as stored in the file.
    ///
    /// Only non-objects are skipped. Missing or `null` fields read as empty,
    /// other non-string values as their JSON text, and a salary that is not a
    /// number (or numeric string) as `0.0`.
    pub fn from_stored(record: &Value) -> Option<Self> {
        let obj = record.as_object()?;
        let salary = match obj.get("salary") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => parse_salary(s).unwrap_or(0.0),
            _ => 0.0,
        };
        Some(Self {
            id: stored_text(obj.get("id")),
            name: stored_text(obj.get("name")),
            department: stored_text(obj.get("department")),
            salary,
        })
    }
}

/// The id of a stored record, compared the same way [`Employee::from_stored`] reads it.
pub fn stored_id(record: &Value) -> Option<String> {
    record.as_object().map(|obj| stored_text(obj.get("id")))
}

fn stored_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parse a salary the way the menu and the API accept it.
pub fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn id_field(obj: &Map<String, Value>) -> Result<String, ServiceError> {
    match obj.get("id") {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ServiceError::InvalidField("id")),
    }
}

fn text_field(obj: &Map<String, Value>, field: &'static str) -> Result<String, ServiceError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ServiceError::InvalidField(field)),
    }
}

fn salary_field(obj: &Map<String, Value>) -> Result<f64, ServiceError> {
    let salary = match obj.get("salary") {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(s)) => parse_salary(s),
        _ => None,
    };
    salary.ok_or(ServiceError::InvalidField("salary"))
}
