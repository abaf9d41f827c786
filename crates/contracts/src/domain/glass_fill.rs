use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Glass-fill inventory position (a glazing unit recipe).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassFill {
    pub id: Uuid,
    pub name: String,
    /// Pane/spacer formula, e.g. "4M1-16-4M1".
    pub formula: String,
    pub thickness_mm: u32,
    pub chambers: u32,
    pub in_stock: bool,
}
