/// Errors produced while emitting a problem.
#[derive(thiserror::Error, Debug)]
pub enum ProblemError {
    /// Serialization failed or the sink refused the body bytes.
    #[error("failed to encode problem details: {source}")]
    Encoding {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ProblemError {
    fn from(source: serde_json::Error) -> Self {
        Self::Encoding { source }
    }
}
