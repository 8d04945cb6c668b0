use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("{title}: {description}")]
    Validation { title: String, description: String },
    #[error("Maximum team size reached: you can only have up to {0} members per team")]
    CapacityReached(usize),
    #[error("No team member at position {index} (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid gender '{0}', expected one of male, female, other")]
    InvalidGender(String),
    #[error("Unknown submission strategy '{0}', expected direct or dual")]
    InvalidStrategy(String),
    #[error("Unknown member field '{0}'")]
    InvalidField(String),
    #[error("Invalid boolean '{0}', expected true or false")]
    InvalidBoolean(String),
    #[error("A team must always have exactly one team lead")]
    LeadRequired,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Delivery error: {0}")]
    DeliveryError(String),
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
