//! Field definition types for the schema catalog
//!
//! Per CONFIG.md:
//! - Exact JSON-native type checks, no coercion
//! - `null` is always accepted (optional-field semantics)
//! - String enums check membership
//! - Arrays are either open, homogeneous, or fixed-length tuples

use serde_json::Value;
use thiserror::Error;

use crate::document::json_type_name;

/// Primitive element type used by array and tuple checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Bool,
}

impl Primitive {
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Bool => "bool",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Primitive::String => value.is_string(),
            Primitive::Number => value.is_number(),
            Primitive::Bool => value.is_boolean(),
        }
    }
}

/// Element constraint for array-typed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    /// Any elements (structure validated elsewhere in the walk)
    Any,
    /// Homogeneous elements of one primitive type
    Items(Primitive),
    /// Fixed-length positional tuple
    Tuple(&'static [Primitive]),
}

/// Declared type of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// String restricted to a closed value set
    StringEnum(&'static [&'static str]),
    Number,
    Bool,
    Object,
    Array(ArrayKind),
}

impl FieldType {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::StringEnum(_) => "string",
            FieldType::Number => "number",
            FieldType::Bool => "bool",
            FieldType::Object => "object",
            FieldType::Array(_) => "array",
        }
    }
}

/// Value check failure, rendered into an invalid-property-value message.
///
/// Tuple-length and element-type mismatches are distinct failures but both
/// report under the one value-invalid diagnostic kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("expected one of [{allowed}], got '{actual}'")]
    NotInEnum { allowed: String, actual: String },
    #[error("expected {expected} elements, got {actual}")]
    TupleLength { expected: usize, actual: usize },
    #[error("element {index}: expected {expected}, got {actual}")]
    ElementType {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}

/// One field definition inside a region or subType table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Enforced on scene-graph base nodes only, never on state overrides
    pub required: bool,
}

impl FieldDef {
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
        }
    }

    /// Checks a value against the declared type.
    ///
    /// `null` always passes: absence and explicit null are equivalent for
    /// optional fields, and required-field presence is checked separately.
    pub fn check(&self, value: &Value) -> Result<(), ValueError> {
        if value.is_null() {
            return Ok(());
        }
        match self.field_type {
            FieldType::String => expect_type(value, Value::is_string, "string"),
            FieldType::StringEnum(allowed) => {
                let s = value.as_str().ok_or(ValueError::TypeMismatch {
                    expected: "string",
                    actual: json_type_name(value),
                })?;
                if allowed.contains(&s) {
                    Ok(())
                } else {
                    Err(ValueError::NotInEnum {
                        allowed: allowed.join(", "),
                        actual: s.to_string(),
                    })
                }
            }
            FieldType::Number => expect_type(value, Value::is_number, "number"),
            FieldType::Bool => expect_type(value, Value::is_boolean, "bool"),
            FieldType::Object => expect_type(value, Value::is_object, "object"),
            FieldType::Array(kind) => {
                let items = value.as_array().ok_or(ValueError::TypeMismatch {
                    expected: "array",
                    actual: json_type_name(value),
                })?;
                check_array(kind, items)
            }
        }
    }
}

fn expect_type(
    value: &Value,
    predicate: fn(&Value) -> bool,
    expected: &'static str,
) -> Result<(), ValueError> {
    if predicate(value) {
        Ok(())
    } else {
        Err(ValueError::TypeMismatch {
            expected,
            actual: json_type_name(value),
        })
    }
}

fn check_array(kind: ArrayKind, items: &[Value]) -> Result<(), ValueError> {
    match kind {
        ArrayKind::Any => Ok(()),
        ArrayKind::Items(primitive) => {
            for (index, item) in items.iter().enumerate() {
                if !primitive.matches(item) {
                    return Err(ValueError::ElementType {
                        index,
                        expected: primitive.type_name(),
                        actual: json_type_name(item),
                    });
                }
            }
            Ok(())
        }
        ArrayKind::Tuple(primitives) => {
            if items.len() != primitives.len() {
                return Err(ValueError::TupleLength {
                    expected: primitives.len(),
                    actual: items.len(),
                });
            }
            for (index, (item, primitive)) in items.iter().zip(primitives).enumerate() {
                if !primitive.matches(item) {
                    return Err(ValueError::ElementType {
                        index,
                        expected: primitive.type_name(),
                        actual: json_type_name(item),
                    });
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAIR: &[Primitive] = &[Primitive::Number, Primitive::Number];

    #[test]
    fn test_null_always_accepted() {
        let def = FieldDef::required("height", FieldType::Number);
        assert!(def.check(&Value::Null).is_ok());
    }

    #[test]
    fn test_exact_type_no_coercion() {
        let def = FieldDef::optional("height", FieldType::Number);
        assert!(def.check(&json!(12)).is_ok());
        assert_eq!(
            def.check(&json!("12")),
            Err(ValueError::TypeMismatch { expected: "number", actual: "string" })
        );
    }

    #[test]
    fn test_enum_membership() {
        let def = FieldDef::optional("focusStrategy", FieldType::StringEnum(&["fixed", "floating"]));
        assert!(def.check(&json!("fixed")).is_ok());
        assert!(matches!(
            def.check(&json!("Fixed")),
            Err(ValueError::NotInEnum { .. })
        ));
    }

    #[test]
    fn test_tuple_length_and_element_type_are_distinct() {
        let def = FieldDef::optional("cellSize", FieldType::Array(ArrayKind::Tuple(PAIR)));
        assert!(def.check(&json!([100, 60])).is_ok());
        assert_eq!(
            def.check(&json!([100])),
            Err(ValueError::TupleLength { expected: 2, actual: 1 })
        );
        assert_eq!(
            def.check(&json!([100, "60"])),
            Err(ValueError::ElementType { index: 1, expected: "number", actual: "string" })
        );
    }

    #[test]
    fn test_homogeneous_array_elements() {
        let def = FieldDef::optional("tags", FieldType::Array(ArrayKind::Items(Primitive::String)));
        assert!(def.check(&json!(["a", "b"])).is_ok());
        assert!(matches!(
            def.check(&json!(["a", 1])),
            Err(ValueError::ElementType { index: 1, .. })
        ));
    }
}
