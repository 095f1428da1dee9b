use thiserror::Error;

/// Failure talking to the remote Record API or the upload pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// The server reported a logical failure (`status: false`).
    #[error("Rejected by server: {0}")]
    Rejected(String),
    /// The image could not be stored.
    #[error("Upload error: {0}")]
    Upload(String),
}

/// Local input the controllers refuse to act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Page jump outside `[1, total_pages]`.
    #[error("Please enter a page number between 1 and {total_pages}")]
    PageOutOfRange {
        /// Page the user asked for.
        requested: i64,
        /// Upper bound at the time of the request.
        total_pages: usize,
    },
    /// Page jump text that is not an integer.
    #[error("Please enter a page number between 1 and {total_pages}")]
    InvalidPageNumber {
        /// Raw user input.
        input: String,
        /// Upper bound at the time of the request.
        total_pages: usize,
    },
    /// Submit without a title.
    #[error("Title is required")]
    MissingTitle,
    /// Editor operation while the editor is closed.
    #[error("Editor is not open")]
    EditorClosed,
    /// Second submit while one is outstanding.
    #[error("A submission is already in progress")]
    SubmitInFlight,
}
