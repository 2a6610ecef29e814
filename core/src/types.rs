//! Wire DTOs for the species API.
//!
//! # Design
//! Every endpoint wraps its payload in the `ApiResult` envelope, so the
//! envelope is generic and all of its fields are defaulted: real responses
//! omit `message` at times and send `data` as null or not at all. The
//! server's JSON is camelCase, but the original backend matched field names
//! case-insensitively, so the PascalCase spellings a default .NET serializer
//! would produce are accepted as aliases.

use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every species endpoint.
///
/// `success` and `message` are carried as-is; callers decide failure from
/// the HTTP status, not from the flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    #[serde(default, alias = "Success")]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: String,
    /// Payload, when the endpoint has one. Null and absent both map to `None`.
    #[serde(default, alias = "Data")]
    pub data: Option<T>,
}

/// A species record as the API exposes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Server-assigned identifier; 0 until the record has been created.
    #[serde(default, alias = "Code")]
    pub code: i32,
    #[serde(alias = "CommonName")]
    pub common_name: String,
}

impl Species {
    /// A local draft that has not been created yet (`code` 0; the server
    /// assigns the real code on POST).
    pub fn draft(common_name: &str) -> Self {
        Self {
            code: 0,
            common_name: common_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_with_code_zero() {
        let json = serde_json::to_value(Species::draft("Lobo Gris")).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["commonName"], "Lobo Gris");
    }

    #[test]
    fn species_accepts_pascal_case_fields() {
        let species: Species =
            serde_json::from_str(r#"{"Code":7,"CommonName":"Puma"}"#).unwrap();
        assert_eq!(species.code, 7);
        assert_eq!(species.common_name, "Puma");
    }

    #[test]
    fn envelope_defaults_missing_message_and_data() {
        let result: ApiResult<Vec<Species>> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(result.success);
        assert!(result.message.is_empty());
        assert!(result.data.is_none());
    }

    #[test]
    fn envelope_null_data_is_none() {
        let result: ApiResult<Species> =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":null}"#).unwrap();
        assert!(result.data.is_none());
    }

    #[test]
    fn envelope_carries_payload() {
        let result: ApiResult<Species> = serde_json::from_str(
            r#"{"success":true,"message":"Especie creada","data":{"code":3,"commonName":"Jaguar"}}"#,
        )
        .unwrap();
        let species = result.data.unwrap();
        assert_eq!(species.code, 3);
        assert_eq!(species.common_name, "Jaguar");
    }
}
