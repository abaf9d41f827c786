use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::pagination::{PageQuery, Paginated};
use contracts::system::users::{User, UserRole};
use uuid::Uuid;

use crate::shared::endpoints;
use crate::shared::error::ApiError;
use crate::shared::http;

/// Fetch one page of users.
pub async fn fetch_users(query: PageQuery) -> Result<Paginated<User>, ApiError> {
    let envelope: ApiEnvelope<Paginated<User>> = http::get_json(&endpoints::users(query)).await?;
    Ok(envelope.data)
}

/// Fetch the role dictionary.
pub async fn fetch_user_roles() -> Result<Vec<UserRole>, ApiError> {
    let envelope: ApiEnvelope<Vec<UserRole>> = http::get_json(&endpoints::user_roles()).await?;
    Ok(envelope.data)
}

/// Delete a user.
pub async fn delete_user(id: Uuid) -> Result<(), ApiError> {
    http::delete(&endpoints::user(id)).await
}
