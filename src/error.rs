/// Errors for text that cannot be turned into a coordinate
///
/// Numeric operations never return this type. Unparseable DMS text yields
/// `NaN` from [`crate::dms::parse`], and degenerate geometry yields `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid coordinate: {input:?}")]
    InvalidCoordinate { input: String },

    #[error("Unknown DMS format tag: {0:?} (expected \"d\", \"dm\" or \"dms\")")]
    UnknownFormat(String),

    #[error("Malformed point (expected \"<lat>, <lon>\"): {0:?}")]
    MalformedPoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
