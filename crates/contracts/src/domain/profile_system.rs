use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSystem {
    pub id: Uuid,
    pub name: String,
    pub chambers: u32,
    pub mounting_depth_mm: u32,
}
