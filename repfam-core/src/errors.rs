use thiserror::Error;

#[derive(Error, Debug)]
pub enum FamilySetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Failed unmarshaling json for family {index}: {source}")]
    FamilyParse {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid strand: {0}")]
    StrandParseError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
