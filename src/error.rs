use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Source directory not found: {0}")]
    SourceNotFound(String),

    #[error("Source is not a directory: {0}")]
    SourceNotDirectory(String),

    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(String),

    #[error("Unable to write output {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    pub fn output(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Output {
            path: path.display().to_string(),
            source,
        }
    }
}
