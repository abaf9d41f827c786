use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry of the order status dictionary. The same shape is embedded into
/// `Order` as a snapshot taken when the order was last updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub id: Uuid,
    pub name: String,
    /// CSS color used for the status badge.
    pub color: String,
}

/// Client fields the order list shows without loading the full client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBrief {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub number: String,
    pub client: ClientBrief,
    pub status: OrderStatus,
    pub total_price: f64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_decodes_with_embedded_snapshots() {
        let body = r##"{
            "id": "0a0f7d4e-16c7-4f3a-a7a4-2f4e8f0f9f11",
            "number": "ORD-2041",
            "client": {
                "id": "93a1a9a8-4c2b-4d2e-8d6e-5a9a7f3b1c22",
                "name": "Severnoye Steklo LLC",
                "phone": "+7 921 555-01-02"
            },
            "status": {
                "id": "b1de9c7a-3f77-4a28-9c5d-e3f7a2b4c633",
                "name": "In production",
                "color": "#f59e0b"
            },
            "totalPrice": 48200.5,
            "createdAt": "2026-07-14T09:30:00Z",
            "updatedAt": "2026-07-15T16:05:00Z"
        }"##;
        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order.number, "ORD-2041");
        assert_eq!(order.client.name, "Severnoye Steklo LLC");
        assert_eq!(order.status.name, "In production");
        assert_eq!(order.comment, None);
    }
}
