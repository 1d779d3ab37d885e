use crate::errors::{FileOperation, IoError};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Deserializer};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(hako::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(hako::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A node of the layout document.
///
/// Tables become [`ConfigNode::Group`]s (one directory each), arrays become
/// [`ConfigNode::List`]s holding only their string elements, and anything else
/// is kept as [`ConfigNode::Other`] so the flattening pass can skip it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    Group(IndexMap<String, ConfigNode>),
    List(Vec<String>),
    Other,
}
impl ConfigNode {
    /// Number of direct children when the node is a group, zero otherwise.
    pub fn len(&self) -> usize {
        match self {
            Self::Group(children) => children.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl From<toml::Value> for ConfigNode {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Table(table) => Self::Group(
                table
                    .into_iter()
                    .map(|(key, child)| (key, Self::from(child)))
                    .collect(),
            ),
            toml::Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        toml::Value::String(name) => Some(name),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => Self::Other,
        }
    }
}
impl<'de> Deserialize<'de> for ConfigNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        toml::Value::deserialize(deserializer).map(Self::from)
    }
}
impl FromStr for ConfigNode {
    type Err = toml::de::Error;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content)
    }
}

/// Reads and parses the layout document at `path`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigNode, ConfigError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    let node = content
        .parse::<ConfigNode>()
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "loaded config from {} with {} top-level entries",
        path.display(),
        node.len()
    );

    Ok(node)
}
