//! Backend response envelope
//!
//! Every endpoint, read and write alike, wraps its payload in
//! `{ success, message?, data, meta? }` with camelCase pagination meta.

use serde::Deserialize;

/// Response envelope shared by all endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u32,
    pub items_per_page: u32,
    pub total_pages: u32,
    pub current_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_list_and_meta() {
        let body = r#"{
            "success": true,
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"totalItems": 12, "itemsPerPage": 2, "totalPages": 6, "currentPage": 1}
        }"#;

        let envelope: Envelope<Vec<serde_json::Value>> =
            serde_json::from_str(body).expect("Failed to parse envelope");
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().len(), 2);

        let meta = envelope.meta.unwrap();
        assert_eq!(meta.total_items, 12);
        assert_eq!(meta.current_page, 1);
    }

    #[test]
    fn test_envelope_failure_without_data() {
        let body = r#"{"success": false, "message": "Kode tidak valid"}"#;

        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(body).expect("Failed to parse envelope");
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Kode tidak valid"));
        assert!(envelope.data.is_none());
        assert!(envelope.meta.is_none());
    }
}
