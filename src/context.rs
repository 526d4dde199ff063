use crate::error::Error;
use crate::result::Result;
use crate::utils;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Context passed throughout the application containing the resolved invocation
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (print every archived entry)
    pub verbose: bool,

    /// Absolute, canonical source root
    pub source_dir: PathBuf,

    /// Absolute output archive path
    pub output_path: PathBuf,
}

impl Context {
    /// Resolve both paths so behavior does not depend on the working directory.
    ///
    /// The source is validated here, before anything touches the output location.
    pub fn resolve(src: &Path, out: &Path, verbose: bool) -> Result<Self> {
        let source_dir = match fs::canonicalize(src) {
            Ok(path) => path,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::SourceNotFound(src.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        if !source_dir.is_dir() {
            return Err(Error::SourceNotDirectory(source_dir.display().to_string()));
        }

        let output_path = utils::resolve_output(out)?;
        if output_path.is_dir() {
            return Err(Error::OutputIsDirectory(output_path.display().to_string()));
        }

        Ok(Self {
            verbose,
            source_dir,
            output_path,
        })
    }
}
