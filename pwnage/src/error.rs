#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed for prefix {prefix}: {source}")]
    Network {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("range API returned HTTP {status} for prefix {prefix}")]
    RemoteStatus { prefix: String, status: u16 },

    #[error("unreadable response body for prefix {prefix}: {source}")]
    RemoteBody {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed breach record: {line:?}")]
    MalformedRecord { line: String },
}
