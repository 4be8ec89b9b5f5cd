/// Elementwise helpers for numeric tuples.
///
/// Handy when computing positions for `translate` and friends; they are not
/// used by the compiler itself.
use crate::error::{VectorError, VectorResult};
use crate::value::Value;

/// Add a scalar to every element, or add a same-length vector elementwise.
///
/// # Errors
/// Returns [`VectorError::TypeMismatch`] for a string, bool, or a vector with
/// non-numeric items, and [`VectorError::LengthMismatch`] for a vector of a
/// different length.
///
/// ```
/// use scad_builder::{vector_add, Value};
///
/// assert_eq!(vector_add(&[1.0, 2.0, 3.0], &Value::from(2)).unwrap(), [3.0, 4.0, 5.0]);
/// ```
pub fn vector_add(vector: &[f64], value: &Value) -> VectorResult<Vec<f64>> {
    match value {
        Value::Number(n) => Ok(vector.iter().map(|x| x + n).collect()),
        Value::Vector(items) => {
            if items.len() != vector.len() {
                return Err(VectorError::LengthMismatch {
                    expected: vector.len(),
                    found: items.len(),
                });
            }
            vector
                .iter()
                .zip(items)
                .map(|(x, item)| match item {
                    Value::Number(n) => Ok(x + n),
                    other => Err(VectorError::type_mismatch("vector_add", other.type_name())),
                })
                .collect()
        }
        other => Err(VectorError::type_mismatch("vector_add", other.type_name())),
    }
}

/// Multiply every element by a scalar.
///
/// # Errors
/// Returns [`VectorError::TypeMismatch`] for anything but a number.
pub fn vector_multiply(vector: &[f64], value: &Value) -> VectorResult<Vec<f64>> {
    match value {
        Value::Number(n) => Ok(vector.iter().map(|x| x * n).collect()),
        other => Err(VectorError::type_mismatch(
            "vector_multiply",
            other.type_name(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vector() {
        let sum = vector_add(&[1.0, 2.0, 3.0], &Value::from([1, 1, 1])).unwrap();
        assert_eq!(sum, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_add_scalar() {
        let sum = vector_add(&[1.0, 2.0, 3.0], &Value::from(2)).unwrap();
        assert_eq!(sum, [3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_multiply_scalar() {
        let product = vector_multiply(&[1.0, 2.0, 3.0], &Value::from(2)).unwrap();
        assert_eq!(product, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_add_string_is_type_error() {
        let err = vector_add(&[1.0, 2.0, 3.0], &Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            VectorError::TypeMismatch {
                operation: "vector_add",
                found: "string"
            }
        );
    }

    #[test]
    fn test_add_nested_item_is_type_error() {
        let err = vector_add(&[1.0, 2.0], &Value::from(vec![Value::from(1), Value::from([2])]));
        assert!(matches!(err, Err(VectorError::TypeMismatch { found: "vector", .. })));
    }

    #[test]
    fn test_add_length_mismatch() {
        let err = vector_add(&[1.0, 2.0, 3.0], &Value::from([1, 2])).unwrap_err();
        assert_eq!(err, VectorError::LengthMismatch { expected: 3, found: 2 });
        assert_eq!(err.to_string(), "vector length mismatch: expected 3, found 2");
    }

    #[test]
    fn test_multiply_by_vector_is_type_error() {
        let err = vector_multiply(&[1.0], &Value::from([2])).unwrap_err();
        assert_eq!(err.to_string(), "vector_multiply: unsupported operand of type vector");
    }

    #[test]
    fn test_empty_vector() {
        assert!(vector_add(&[], &Value::from(1)).unwrap().is_empty());
        assert!(vector_multiply(&[], &Value::from(3)).unwrap().is_empty());
    }
}
