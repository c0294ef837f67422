// PathManager maps (category, key) pairs to object names and, for the
// filesystem backend, to paths on disk.
//
// The layout in the storage backend is as follows:
//
//	<root>/uidl
//	├── component
//	│   └── <key>.json
//	└── project
//	    └── <key>.json
//
// Object stores without a root (e.g. GCS) use the same layout relative to
// the bucket, i.e. `<category>/<key>.json`. Categories never share a
// directory, so the same key under two categories names two objects.

use std::path::PathBuf;

use crate::storage::Category;

const OBJECT_EXTENSION: &str = "json";

/// Returns the object name of a document relative to the store root,
/// (e.g. `component/<key>.json`).
pub fn object_name(key: &str, category: Category) -> String {
    format!("{}/{}.{}", category, key, OBJECT_EXTENSION)
}

#[derive(Clone, Debug)]
pub struct PathManager {
    root_path: PathBuf,
}

impl PathManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PathManager {
            root_path: root.into(),
        }
    }

    /// Returns the path to the root of all documents,
    /// (e.g. `<root>/uidl`).
    pub fn documents_path(&self) -> PathBuf {
        self.root_path.join("uidl")
    }

    /// Returns the path to the directory of a category,
    /// (e.g. `<root>/uidl/<category>`).
    pub fn category_path(&self, category: Category) -> PathBuf {
        self.documents_path().join(category.as_str())
    }

    /// Returns the path to a single document,
    /// (e.g. `<root>/uidl/<category>/<key>.json`).
    pub fn document_path(&self, key: &str, category: Category) -> PathBuf {
        self.documents_path().join(object_name(key, category))
    }

    /// Returns the staging path a document is written to before it is
    /// renamed into place, (e.g. `<root>/uidl/<category>/.<key>.json.tmp`).
    pub fn staging_path(&self, key: &str, category: Category) -> PathBuf {
        self.category_path(category)
            .join(format!(".{}.{}.tmp", key, OBJECT_EXTENSION))
    }
}
