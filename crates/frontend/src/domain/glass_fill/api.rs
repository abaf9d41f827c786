use contracts::shared::envelope::{ApiEnvelope, GlassFormation};
use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use crate::shared::endpoints;
use crate::shared::error::ApiError;
use crate::shared::http;

/// Fetch one page of glass-fill positions. This endpoint nests the page
/// under `data.formation` instead of the usual `data.items`.
pub async fn fetch_glass_fills(query: PageQuery) -> Result<GlassFormation, ApiError> {
    let envelope: ApiEnvelope<GlassFormation> =
        http::get_json(&endpoints::glass_fill(query)).await?;
    Ok(envelope.data)
}

/// Delete a glass-fill position.
pub async fn delete_glass_fill(id: Uuid) -> Result<(), ApiError> {
    http::delete(&endpoints::glass_fill_item(id)).await
}
