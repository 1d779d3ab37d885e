use crate::{
    errors::{FileOperation, IoError},
    paths::{PathDict, PathKind},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StructureError {
    #[error("I/O error within structure domain")]
    #[diagnostic(code(hako::structure::io))]
    Io(#[from] IoError),
}

/// Creates every entry of `dict` on disk, in the dictionary's order.
///
/// Directories are created with their missing ancestors. Files get their
/// parent chain created first, so a file never depends on its directory
/// having been visited earlier. Existing files are truncated.
///
/// # Errors
///
/// Stops at the first entry that fails and returns a [`StructureError`] naming
/// its path. Entries created before the failure stay on disk.
pub fn create_structure(dict: &PathDict) -> Result<(), StructureError> {
    log::debug!("creating {} entries", dict.len());

    for (key, entry) in dict {
        log::debug!("processing '{}'", key);

        match entry.kind {
            PathKind::Dir => create_directory(&entry.path)?,
            PathKind::File => create_file(&entry.path)?,
        }
    }

    log::debug!("structure created");

    Ok(())
}

/// Creates `path` and any missing ancestors. Succeeds if it already exists.
pub fn create_directory(path: &Path) -> Result<(), StructureError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    println!("{} {}", "created directory".blue(), path.display());

    Ok(())
}

/// Creates an empty file at `path`, truncating whatever was there.
pub fn create_file(path: &Path) -> Result<(), StructureError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| IoError::new(FileOperation::MkdirParent, path.into(), error))?;
    }

    // dropped immediately, which closes the handle
    fs::File::create(path)
        .map_err(|error| IoError::new(FileOperation::Create, path.into(), error))?;

    println!("{} {}", "created file".green(), path.display());

    Ok(())
}
