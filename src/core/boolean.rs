use crate::utils::error::{ConvertError, Result};

/// Accepts `1 t T true TRUE True` and `0 f F false FALSE False`, nothing else.
pub fn to_bool(s: &str) -> Result<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConvertError::parse(s, "bool", "not a boolean literal")),
    }
}

pub fn from_bool(b: bool) -> String {
    b.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bool_accepted_literals() {
        for s in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(to_bool(s).unwrap(), "{s} should be true");
        }
        for s in ["0", "f", "F", "false", "FALSE", "False"] {
            assert!(!to_bool(s).unwrap(), "{s} should be false");
        }
    }

    #[test]
    fn test_to_bool_rejects_everything_else() {
        for s in ["maybe", "", "yes", "no", "tRUE", "fAlse", " true", "true\n", "2"] {
            assert!(
                matches!(to_bool(s), Err(ConvertError::Parse { target: "bool", .. })),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(from_bool(true), "true");
        assert_eq!(from_bool(false), "false");
    }
}
