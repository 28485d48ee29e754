use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("request to price API failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("price API returned HTTP {0}")]
    Status(StatusCode),

    #[error("malformed XML response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("invalid date {0:?}, expected YYYYMMDD")]
    InvalidDate(String),

    #[error("invalid price {0:?}")]
    InvalidPrice(String),

    #[error("failed to write prices: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize prices: {0}")]
    Json(#[from] serde_json::Error),
}

impl PriceError {
    pub fn is_network_error(&self) -> bool {
        matches!(self, PriceError::Network(_) | PriceError::Status(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PriceError::Xml(_) | PriceError::InvalidDate(_) | PriceError::InvalidPrice(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PriceError>;
