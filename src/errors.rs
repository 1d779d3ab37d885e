use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("reading a file")]
    Read,
    #[error("creating a directory")]
    Mkdir,
    #[error("creating the parent directory of a file")]
    MkdirParent,
    #[error("creating a file")]
    Create,
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}': {source}")]
#[diagnostic(
    code(hako::io),
    help("Check file permissions, disk space, or that the path is correct.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}
