use contracts::domain::client::Client;
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::pagination::{PageQuery, Paginated};
use uuid::Uuid;

use crate::shared::endpoints;
use crate::shared::error::ApiError;
use crate::shared::http;

/// Fetch one page of clients, optionally narrowed by a search string.
pub async fn fetch_clients(query: PageQuery, search: &str) -> Result<Paginated<Client>, ApiError> {
    let envelope: ApiEnvelope<Paginated<Client>> =
        http::get_json(&endpoints::clients(query, search)).await?;
    Ok(envelope.data)
}

/// Fetch a single client.
pub async fn fetch_client(id: Uuid) -> Result<Client, ApiError> {
    let envelope: ApiEnvelope<Client> = http::get_json(&endpoints::client(id)).await?;
    Ok(envelope.data)
}

/// Delete a client.
pub async fn delete_client(id: Uuid) -> Result<(), ApiError> {
    http::delete(&endpoints::client(id)).await
}
