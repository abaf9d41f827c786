use serde::{Deserialize, Serialize};

use crate::domain::glass_fill::GlassFill;

/// Every backend response wraps its payload in a top-level `data` field.
/// Decoding through this type is the shape check at the service boundary:
/// a payload that does not match the expected DTO fails the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Glass-fill list payload. Unlike every other list endpoint, the page lives
/// under `formation` rather than `items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassFormation {
    pub formation: Vec<GlassFill>,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_data() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"data": [1, 2, 3]}"#).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_rejects_missing_data() {
        let result = serde_json::from_str::<ApiEnvelope<Vec<u32>>>(r#"{"payload": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_glass_formation_decodes() {
        let body = r#"{
            "data": {
                "formation": [{
                    "id": "7b4c3f6a-9a1d-4e84-93d1-0f6f3f1c2ab9",
                    "name": "4-16-4",
                    "formula": "4M1-16-4M1",
                    "thicknessMm": 24,
                    "chambers": 1,
                    "inStock": true
                }],
                "totalCount": 1,
                "page": 1,
                "totalPages": 1
            }
        }"#;
        let envelope: ApiEnvelope<GlassFormation> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.formation.len(), 1);
        assert_eq!(envelope.data.formation[0].name, "4-16-4");
        assert_eq!(envelope.data.total_pages, 1);
    }
}
