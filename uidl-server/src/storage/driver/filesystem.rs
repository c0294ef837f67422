use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::paths::PathManager;
use crate::storage::{Category, ObjectStore, StoreError, check_key};

use tokio::{
    fs::{File, create_dir_all, read_to_string, remove_file, rename},
    io::{self, AsyncWriteExt, BufWriter},
};

pub struct FilesystemStorage {
    path_manager: PathManager,
}

impl FilesystemStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FilesystemStorage {
            path_manager: PathManager::new(root.as_ref()),
        }
    }

    async fn create_path(&self, path: PathBuf) -> io::Result<PathBuf> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).await?;
        }
        Ok(path)
    }
}

#[async_trait::async_trait]
impl ObjectStore for FilesystemStorage {
    async fn write(&self, content: &str, key: &str, category: Category) -> Result<(), StoreError> {
        check_key(key)?;

        let staging_path = self
            .create_path(self.path_manager.staging_path(key, category))
            .await?;
        let document_path = self.path_manager.document_path(key, category);

        let written = async {
            let mut file_writer = BufWriter::new(File::create(&staging_path).await?);
            file_writer.write_all(content.as_bytes()).await?;
            file_writer.flush().await?;
            file_writer.into_inner().sync_all().await?;
            // Readers only ever see the complete document.
            rename(&staging_path, &document_path).await?;
            Ok::<_, io::Error>(())
        }
        .await;

        if written.is_err() {
            let _ = remove_file(&staging_path).await;
        }
        written.map_err(StoreError::from)
    }

    async fn read(&self, key: &str, category: Category) -> Result<Option<String>, StoreError> {
        check_key(key)?;

        match read_to_string(self.path_manager.document_path(key, category)).await {
            Ok(content) if content.is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
