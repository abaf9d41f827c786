use contracts::domain::profile_system::ProfileSystem;
use contracts::shared::envelope::ApiEnvelope;

use crate::shared::endpoints;
use crate::shared::error::ApiError;
use crate::shared::http;

/// Fetch the full profile system dictionary (small, unpaged).
pub async fn fetch_profile_systems() -> Result<Vec<ProfileSystem>, ApiError> {
    let envelope: ApiEnvelope<Vec<ProfileSystem>> =
        http::get_json(&endpoints::profile_systems()).await?;
    Ok(envelope.data)
}
