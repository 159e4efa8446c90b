use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("probe report read failed: {path}: {source}")]
    ProbeRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("probe report parse error for {path}: {detail}")]
    ProbeParse { path: PathBuf, detail: String },

    #[error("invalid OS version '{input}': {detail}")]
    InvalidOsVersion { input: String, detail: String },

    #[error("unknown model identifier: {0}")]
    UnknownModel(String),

    #[error("config error for {path}: {detail}")]
    Config { path: PathBuf, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;
