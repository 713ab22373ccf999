//! Payload framing: a JSON array of component strings.
//!
//! Components are hex runs that may be empty; JSON string quoting keeps the
//! boundaries unambiguous without any length prefix.

use crate::error::{CodecError, Result};

/// Join payload components into one framed string
pub fn join(fields: &[&str]) -> Result<String> {
    serde_json::to_string(fields)
        .map_err(|e| CodecError::malformed(format!("cannot frame payload: {}", e)))
}

/// Split a framed payload into exactly `N` components
pub fn split<const N: usize>(payload: &str) -> Result<[String; N]> {
    let fields: Vec<String> = serde_json::from_str(payload)
        .map_err(|e| CodecError::malformed(format!("payload is not a string array: {}", e)))?;

    <[String; N]>::try_from(fields).map_err(|fields| {
        CodecError::malformed(format!(
            "payload has {} components, expected {}",
            fields.len(),
            N
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_split() {
        let framed = join(&["42c800000", ""]).unwrap();
        assert_eq!(framed, r#"["42c800000",""]"#);
        let [mz, intensity] = split::<2>(&framed).unwrap();
        assert_eq!(mz, "42c800000");
        assert_eq!(intensity, "");
    }

    #[test]
    fn test_wrong_component_count() {
        assert!(matches!(
            split::<3>(r#"["a","b"]"#),
            Err(CodecError::MalformedToken(_))
        ));
        assert!(matches!(
            split::<2>(r#"["a","b","c"]"#),
            Err(CodecError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_not_a_string_array() {
        for payload in ["", "not json", r#"{"mz":"a"}"#, "[1,2]"] {
            assert!(matches!(
                split::<2>(payload),
                Err(CodecError::MalformedToken(_))
            ));
        }
    }
}
