use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("destination not found: {0}")]
    DestinationNotFound(String),

    #[error("destination id not found: {0}")]
    DestinationIdNotFound(u32),

    #[error("transportation mode not found: {0}")]
    TransportationModeNotFound(String),

    #[error("catalog has no transportation modes")]
    NoTransportationModes,

    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("invalid planner config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DestinationNotFound(_) | Self::DestinationIdNotFound(_) => {
                "destination_not_found"
            }
            Self::TransportationModeNotFound(_) => "transportation_not_found",
            Self::NoTransportationModes => "empty_transportation_catalog",
            Self::InvalidPreferences(_) => "invalid_preferences",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}
