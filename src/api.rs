use crate::{
    config::{self, ConfigError},
    paths::{self, PathDict},
    structure::{self, StructureError},
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HakoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structure(#[from] StructureError),
}

/// Loads the layout at `config_path`, flattens it under `out_dir` and creates
/// every entry on disk, returning the dictionary that drove the creation.
///
/// # Errors
///
/// Returns a [`HakoError`] if:
///
/// - The layout file cannot be read or is not valid TOML. Nothing is created.
/// - A directory or file cannot be created. Creation stops at that entry and
///   everything created before it is left in place.
pub fn scaffold<C: AsRef<Path>, O: AsRef<Path>>(
    config_path: C,
    out_dir: O,
) -> Result<PathDict, HakoError> {
    let layout = config::load_config(config_path)?;

    let dict = paths::flatten(&layout, out_dir);

    log::debug!("flattened layout into {} entries", dict.len());

    structure::create_structure(&dict)?;

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathKind;
    use std::fs;

    #[test]
    fn scaffold_creates_layout_and_returns_dict() {
        let root = tempfile::tempdir().unwrap();
        let config = root.path().join("structure.toml");
        fs::write(
            &config,
            r#"
            files = ["README.md"]

            [src]
            files = ["main.rs"]

            [src.bin]
            "#,
        )
        .unwrap();
        let out = root.path().join("new_project");

        let dict = scaffold(&config, &out).unwrap();

        assert_eq!(dict.len(), 4);
        assert_eq!(dict["README"].kind, PathKind::File);
        assert!(out.join("README.md").is_file());
        assert!(out.join("src").join("main.rs").is_file());
        assert!(out.join("src").join("bin").is_dir());
    }

    #[test]
    fn load_failure_touches_nothing() {
        let root = tempfile::tempdir().unwrap();
        let config = root.path().join("broken.toml");
        fs::write(&config, "[src").unwrap();
        let out = root.path().join("new_project");

        let result = scaffold(&config, &out);

        assert!(matches!(result, Err(HakoError::Config(_))));
        assert!(!out.exists());
    }
}
