use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::cli::Args;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Filesystem { root_dir: PathBuf },
    Memory,
    Gcs {
        bucket: String,
        endpoint: String,
        token: Option<String>,
    },
}

impl StorageKind {
    pub fn name(&self) -> &'static str {
        match self {
            StorageKind::Filesystem { .. } => "FILESYSTEM",
            StorageKind::Memory => "MEMORY",
            StorageKind::Gcs { .. } => "GCS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Bind the listener and serve until shut down.
    Standalone,
    /// Build the application without binding; the host mounts the router.
    Embedded,
}

impl FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standalone" => Ok(RuntimeMode::Standalone),
            "embedded" => Ok(RuntimeMode::Embedded),
            other => Err(format!(
                "UIDL_RUNTIME_MODE `{other}` is unknown, expected `standalone` or `embedded`"
            )),
        }
    }
}

/// Cross-origin policy applied to every route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        CorsPolicy {
            allowed_origins: vec!["*".to_string()],
            allowed_headers: ["Origin", "X-Requested-With", "Content-Type", "Accept"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CorsPolicy {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage: StorageKind,
    pub cors: CorsPolicy,
    pub max_body_bytes: usize,
    pub mode: RuntimeMode,
}

impl Config {
    /// In-memory configuration with default policies, bound to an ephemeral port.
    pub fn in_memory() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            storage: StorageKind::Memory,
            cors: CorsPolicy::default(),
            max_body_bytes: 100 * 1024,
            mode: RuntimeMode::Embedded,
        }
    }
}

/// Turns command line arguments into a [`Config`], reporting every problem
/// found rather than only the first.
pub fn validate_config(args: &Args) -> Result<Config, Vec<String>> {
    let mut validation_errors = Vec::new();

    let storage = match args.storage.to_ascii_uppercase().as_str() {
        "FILESYSTEM" => Some(StorageKind::Filesystem {
            root_dir: PathBuf::from(&args.root),
        }),
        "MEMORY" => Some(StorageKind::Memory),
        "GCS" => match args.gcs_bucket.as_deref().map(str::trim) {
            Some(bucket) if !bucket.is_empty() => Some(StorageKind::Gcs {
                bucket: bucket.to_string(),
                endpoint: args.gcs_endpoint.clone(),
                token: args.gcs_token.clone(),
            }),
            _ => {
                validation_errors
                    .push("UIDL_GCS_BUCKET must be set when UIDL_STORAGE is `GCS`".to_string());
                None
            }
        },
        other => {
            validation_errors.push(format!(
                "UIDL_STORAGE `{other}` is unknown, expected FILESYSTEM, MEMORY or GCS"
            ));
            None
        }
    };

    let mode = args
        .mode
        .parse::<RuntimeMode>()
        .map_err(|err| validation_errors.push(err))
        .ok();

    let allowed_origins: Vec<String> = args
        .cors_allowed_origins
        .iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();
    if allowed_origins.is_empty() {
        validation_errors
            .push("UIDL_CORS_ALLOWED_ORIGINS must name at least one origin".to_string());
    }
    let allowed_headers = args
        .cors_allowed_headers
        .iter()
        .map(|header| header.trim().to_string())
        .filter(|header| !header.is_empty())
        .collect();

    if args.max_body_bytes == 0 {
        validation_errors.push("UIDL_MAX_BODY_BYTES must be greater than zero".to_string());
    }

    match (storage, mode) {
        (Some(storage), Some(mode)) if validation_errors.is_empty() => Ok(Config {
            host: args.host.clone(),
            port: args.port,
            storage,
            cors: CorsPolicy {
                allowed_origins,
                allowed_headers,
            },
            max_body_bytes: args.max_body_bytes,
            mode,
        }),
        _ => Err(validation_errors),
    }
}
