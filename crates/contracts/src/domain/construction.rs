use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single window/door construction inside an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Construction {
    pub id: Uuid,
    pub order_id: Uuid,
    pub name: String,
    pub width_mm: u32,
    pub height_mm: u32,
    pub quantity: u32,
    pub profile_system_id: Option<Uuid>,
    pub glass_fill_id: Option<Uuid>,
    pub price: f64,
}
