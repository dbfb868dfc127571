pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Metrics(#[from] narwhal_metrics::Error),

    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("unsupported horizontal alignment: {value:?} (expected left, center or right)")]
    InvalidAlignment { value: String },

    #[error("unsupported writing direction: {value:?} (expected ltr, rtl, ttb or btt)")]
    InvalidDirection { value: String },

    #[error("invalid text options: {0}")]
    Options(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unknown_font(font: &narwhal_metrics::FontId) -> Self {
        Error::Metrics(narwhal_metrics::Error::UnknownFont {
            font: font.to_string(),
        })
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(Error::InvalidParameter {
        name,
        value,
        expected: "a finite number > 0",
    })
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(Error::InvalidParameter {
        name,
        value,
        expected: "a finite number >= 0",
    })
}
