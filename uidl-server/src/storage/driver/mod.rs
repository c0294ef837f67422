pub mod filesystem;
pub mod gcs;
pub mod memory;
