// File: crates/budget-chart/src/error.rs
// Summary: Error type shared by every stage of the render pipeline.

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("invalid background image: {0}")]
    InvalidBackgroundImage(String),

    #[error("malformed item at index {index}: {reason}")]
    MalformedItem { index: usize, reason: String },

    #[error("invalid setting {field}: {reason}")]
    InvalidSetting { field: String, reason: String },

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    pub fn invalid_color(spec: impl Into<String>) -> Self {
        Self::InvalidColorFormat(spec.into())
    }

    pub fn background(msg: impl std::fmt::Display) -> Self {
        Self::InvalidBackgroundImage(msg.to_string())
    }

    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedItem { index, reason: reason.into() }
    }

    pub fn setting(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting { field: field.into(), reason: reason.into() }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl std::fmt::Display) -> Self {
        Self::Encode(msg.to_string())
    }

    /// True for validation failures caused by the request itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidColorFormat(_)
                | Self::InvalidDimensions { .. }
                | Self::InvalidBackgroundImage(_)
                | Self::MalformedItem { .. }
                | Self::InvalidSetting { .. }
        )
    }
}
