/// Validation failure raised before any scoring takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriorityError {
    #[error("Invalid Request Type: {value}")]
    InvalidRequestType { value: String },
}
