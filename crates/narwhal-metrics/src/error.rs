#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("font is not measurable: {font}")]
    UnknownFont { font: String },

    #[error("invalid font identifier: {raw:?} (expected `<family>` or `<family>:style=<style>`)")]
    InvalidFontId { raw: String },

    #[error("unsupported font style: {style:?} (expected Bold, Italic or Bold Italic)")]
    InvalidStyle { style: String },

    #[error("unsupported font style index: {index} (expected 0..=3)")]
    InvalidStyleIndex { index: u8 },

    #[error("font listed twice in metrics table: {font}")]
    DuplicateFont { font: String },

    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("font metrics JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
