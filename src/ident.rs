use lazy_static::lazy_static;
use mongodb::bson::oid::ObjectId;
use regex::Regex;

use crate::error::ApiError;

/// Accepted external form of a document identifier.
pub const OBJECT_ID_PATTERN: &str = r"^[0-9a-f]{24}$";

lazy_static! {
    static ref OBJECT_ID_RE: Regex = Regex::new(OBJECT_ID_PATTERN).unwrap();
}

pub fn is_object_id(raw: &str) -> bool {
    OBJECT_ID_RE.is_match(raw)
}

/// Translates an external identifier into the stored `ObjectId`. `what`
/// names the resource for the failure message ("user", "recipe").
pub fn to_object_id(what: &str, raw: &str) -> Result<ObjectId, ApiError> {
    if !is_object_id(raw) {
        return Err(ApiError::invalid_id(what, raw));
    }
    ObjectId::parse_str(raw).map_err(|_| ApiError::invalid_id(what, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_lowercase_hex_chars() {
        let raw = "507f1f77bcf86cd799439011";
        assert!(is_object_id(raw));
        let oid = to_object_id("user", raw).expect("should parse");
        assert_eq!(oid.to_hex(), raw);
    }

    #[test]
    fn rejects_wrong_length_and_alphabet() {
        for raw in [
            "",
            "507f1f77bcf86cd79943901",   // 23 chars
            "507f1f77bcf86cd7994390111", // 25 chars
            "507F1F77BCF86CD799439011",  // uppercase
            "507f1f77bcf86cd79943901g",  // non-hex
            "not-an-id",
        ] {
            assert!(!is_object_id(raw), "{raw:?} should be rejected");
            let err = to_object_id("user", raw).unwrap_err();
            assert!(err
                .to_string()
                .contains("24 hexadecimal characters"));
        }
    }
}
