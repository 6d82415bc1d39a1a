pub mod domain;
pub mod dto;
pub mod error;
pub mod format;
pub mod locale;
pub mod panel;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use format::{format_meeting_id, format_phone_number, format_toll_geography_info};
pub use locale::{validate_locale_string, PhoneInfoStrings};
pub use panel::build_panel;
