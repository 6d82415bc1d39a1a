//! Best-effort display formatting for dial-in data.
//!
//! Every function here is total: malformed or unexpected input falls through
//! to an unformatted passthrough rather than an error. The transforms are
//! display-only and are not fixed points; feeding a formatted string back in
//! may format it again differently.

pub mod geo;
pub mod meeting;
pub mod phone;

pub use geo::format_toll_geography_info;
pub use meeting::format_meeting_id;
pub use phone::format_phone_number;
