use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("locale string '{0}' is blank")]
    BlankLocaleString(String),
}
