//! Dynamic row record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// One row of caller-owned field data.
///
/// Records hold field values as a `HashMap<String, Value>`, so rows of any
/// shape can be fed to a table. The table only ever reads fields; it never
/// mutates a record it was handed.
///
/// Serializes as a plain JSON object.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Record;
///
/// let record = Record::new()
///     .set("id", 1)
///     .set("name", "John Doe")
///     .set("age", 25);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("John Doe"));
/// assert_eq!(record.get_int("age").unwrap(), Some(25));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a float field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new()
            .set("name", "Sam Wilson")
            .set("age", 28)
            .set("manager", Value::Null)
            .set("active", true);

        assert_eq!(record.get_string("name").unwrap(), Some("Sam Wilson"));
        assert_eq!(record.get_int("age").unwrap(), Some(28));
        assert_eq!(record.get_float("age").unwrap(), Some(28.0));
        assert_eq!(record.get_string("manager").unwrap(), None);
        assert_eq!(record.get_bool("active").unwrap(), Some(true));
        assert!(matches!(
            record.get_bool("age"),
            Err(FieldError::TypeMismatch { expected: "bool", .. })
        ));
    }

    #[test]
    fn test_typed_getter_errors() {
        let record = Record::new().set("age", 28);

        assert!(matches!(
            record.get_string("missing"),
            Err(FieldError::Missing { .. })
        ));
        assert!(matches!(
            record.get_string("age"),
            Err(FieldError::TypeMismatch {
                expected: "string",
                actual: "int",
                ..
            })
        ));
    }

    #[test]
    fn test_getter_error_names_the_field() {
        let record = Record::new().set("age", 28);

        let err = record.get_bool("age").unwrap_err();
        assert_eq!(err.field(), "age");
        assert_eq!(err.to_string(), "field 'age' holds int, not bool");
        assert_eq!(
            record.get_int("email").unwrap_err().to_string(),
            "record has no field 'email'"
        );
    }

    #[test]
    fn test_deserialize_object() {
        let json = r#"{"id": 1, "name": "John Doe", "age": 25, "role": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.len(), 4);
        assert_eq!(record.get("role"), Some(&Value::Null));
        assert_eq!(record.get_int("id").unwrap(), Some(1));
    }
}
