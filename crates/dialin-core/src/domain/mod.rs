pub mod phone_info;

pub use phone_info::ConferencePhoneInfo;
