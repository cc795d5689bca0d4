use thiserror::Error;

/// Errors raised while configuring a chart.
///
/// Rendering itself never fails; anything that can go wrong is caught when
/// a scheme or color is parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The name matches no built-in scheme and is not a color literal.
    #[error("unknown color scheme `{0}`")]
    UnknownColorScheme(String),

    #[error("invalid color `{input}`: {reason}")]
    InvalidColor { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
