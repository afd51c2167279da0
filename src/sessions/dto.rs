use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::sessions::profile::Profile;

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub profile: Profile,
    pub bmi: f64,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub bmi: f64,
}
