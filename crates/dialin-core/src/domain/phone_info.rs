use serde::{Deserialize, Serialize};

/// One dial-in number as supplied by the calling platform.
///
/// Records are external input and are never mutated; everything derived from
/// them is an ephemeral display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferencePhoneInfo {
    pub phone_number: String,
    #[serde(default)]
    pub is_toll_free: bool,
    pub country: Option<String>,
    pub city: Option<String>,
    pub conference_id: Option<String>,
}
