use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::models::user::UserProfile;

/// Read access to account profiles owned by the auth layer.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, Error>;
}
