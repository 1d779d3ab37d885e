use crate::config::ConfigNode;
use indexmap::{map::Iter, IndexMap};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Reserved key whose array lists the files of the enclosing group.
pub const FILES_KEY: &str = "files";

const KEY_SEPARATOR: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Dir,
    File,
}
impl PathKind {
    fn as_str(&self) -> &str {
        match self {
            Self::Dir => "dir",
            Self::File => "file",
        }
    }
}
impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One filesystem object to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub path: PathBuf,
    pub kind: PathKind,
}
impl PathEntry {
    pub fn dir<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: PathKind::Dir,
        }
    }

    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: PathKind::File,
        }
    }
}

/// Synthesized key to entry. Re-inserting a key replaces the entry in place.
pub type PathDict = IndexMap<String, PathEntry>;

/// Joins `parts` with `_` and strips every `.` from the result.
///
/// Distinct inputs may produce the same key, e.g. `["a.b"]` and `["ab"]`.
pub fn synthesize_key<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(KEY_SEPARATOR)
        .replace('.', "")
}

/// Returns `name` without its final extension.
///
/// The extension starts at the last `.` of the final path segment, so
/// `"lib.tar.gz"` gives `"lib.tar"`, `"README"` is returned unchanged and
/// `".gitignore"` gives an empty stem.
pub fn file_stem(name: &str) -> &str {
    for (index, ch) in name.char_indices().rev() {
        if std::path::is_separator(ch) {
            break;
        }
        if ch == '.' {
            return &name[..index];
        }
    }

    name
}

/// Pending children of one group, with the key parts and path leading to it.
struct Frame<'a> {
    children: Iter<'a, String, ConfigNode>,
    key_parts: Vec<String>,
    path: PathBuf,
}

/// Flattens `node` into a [`PathDict`] rooted at `base`.
///
/// Every nested group yields a [`PathKind::Dir`] entry and every string of a
/// `files` array yields a [`PathKind::File`] entry joined against the group
/// that owns the array. Other shapes are skipped. The walk is depth-first
/// pre-order and keeps its own stack, so nesting depth is not bounded by the
/// call stack. No filesystem access happens here.
pub fn flatten<P: AsRef<Path>>(node: &ConfigNode, base: P) -> PathDict {
    let mut dict = PathDict::new();

    let ConfigNode::Group(root) = node else {
        log::trace!("root node is not a group, nothing to flatten");
        return dict;
    };

    let mut stack = vec![Frame {
        children: root.iter(),
        key_parts: Vec::new(),
        path: base.as_ref().to_path_buf(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some((key, child)) = frame.children.next() else {
            stack.pop();
            continue;
        };

        match child {
            ConfigNode::Group(grandchildren) => {
                let current_path = frame.path.join(key);
                let mut key_parts = frame.key_parts.clone();
                key_parts.push(key.clone());

                insert(
                    &mut dict,
                    synthesize_key(&key_parts),
                    PathEntry::dir(&current_path),
                );

                stack.push(Frame {
                    children: grandchildren.iter(),
                    key_parts,
                    path: current_path,
                });
            }
            ConfigNode::List(file_names) if key == FILES_KEY => {
                for file_name in file_names {
                    let mut key_parts = frame.key_parts.clone();
                    key_parts.push(file_stem(file_name).to_string());

                    insert(
                        &mut dict,
                        synthesize_key(&key_parts),
                        PathEntry::file(frame.path.join(file_name)),
                    );
                }
            }
            _ => {
                log::trace!(
                    "skipping '{}' under {}: not a group or a files list",
                    key,
                    frame.path.display()
                );
            }
        }
    }

    dict
}

fn insert(dict: &mut PathDict, key: String, entry: PathEntry) {
    log::debug!("{} => {} [{}]", key, entry.path.display(), entry.kind);

    if let Some(previous) = dict.get(&key) {
        log::warn!(
            "key '{}' already maps to {}, overwriting with {}",
            key,
            previous.path.display(),
            entry.path.display()
        );
    }

    dict.insert(key, entry);
}
