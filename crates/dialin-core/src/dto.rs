use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntryDto {
    pub display_number: String,
    pub toll_label: String,
    pub geography: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialInPanelDto {
    pub phones: Vec<PhoneEntryDto>,
    pub meeting_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedStringDto {
    pub input: String,
    pub formatted: String,
}
