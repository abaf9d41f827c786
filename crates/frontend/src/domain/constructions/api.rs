use contracts::domain::construction::Construction;
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::pagination::{PageQuery, Paginated};
use uuid::Uuid;

use crate::shared::endpoints;
use crate::shared::error::ApiError;
use crate::shared::http;

/// Fetch one page of constructions.
pub async fn fetch_constructions(query: PageQuery) -> Result<Paginated<Construction>, ApiError> {
    let envelope: ApiEnvelope<Paginated<Construction>> =
        http::get_json(&endpoints::constructions(query)).await?;
    Ok(envelope.data)
}

/// Fetch a single construction.
pub async fn fetch_construction(id: Uuid) -> Result<Construction, ApiError> {
    let envelope: ApiEnvelope<Construction> =
        http::get_json(&endpoints::construction(id)).await?;
    Ok(envelope.data)
}

/// Delete a construction.
pub async fn delete_construction(id: Uuid) -> Result<(), ApiError> {
    http::delete(&endpoints::construction(id)).await
}
