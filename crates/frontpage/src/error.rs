#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTC offset: {0} hours (expected -23..=23)")]
    InvalidOffset(i32),

    #[error("Page '{0}' does not allow prerendering")]
    PrerenderDisabled(String),
}
