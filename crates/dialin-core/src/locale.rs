use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Locale string bundle for the join-by-phone panel.
///
/// `toll_geo_template` may reference `{country}` and `{city}`; each
/// placeholder is substituted at most once per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneInfoStrings {
    pub modal_title: String,
    pub no_phone_available: String,
    pub dial_in_label: String,
    pub meeting_id_label: String,
    pub wait_label: String,
    pub toll_label: String,
    pub toll_free_label: String,
    pub toll_geo_template: String,
}

impl PhoneInfoStrings {
    pub fn en_us() -> Self {
        Self {
            modal_title: "We could not detect a microphone. Join the call from your phone instead."
                .to_string(),
            no_phone_available: "No phone numbers available".to_string(),
            dial_in_label: "Dial in".to_string(),
            meeting_id_label: "Meeting ID".to_string(),
            wait_label: "Wait to be admitted".to_string(),
            toll_label: "Toll".to_string(),
            toll_free_label: "Toll-free".to_string(),
            toll_geo_template: "{country}, {city}".to_string(),
        }
    }
}

impl Default for PhoneInfoStrings {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Rejects whitespace-only locale overrides. `key` names the offending entry
/// in the resulting error.
pub fn validate_locale_string(key: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::BlankLocaleString(key.to_string()));
    }
    Ok(())
}
