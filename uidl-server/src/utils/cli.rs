use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Listening host
    #[arg(long, env = "UIDL_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listening port
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Storage backend type: FILESYSTEM, MEMORY or GCS
    #[arg(short, long, env = "UIDL_STORAGE", default_value = "FILESYSTEM")]
    pub storage: String,

    /// Root directory of the filesystem backend
    #[arg(long, env = "UIDL_ROOTDIR", default_value = "/var/lib/uidl-server")]
    pub root: String,

    /// Bucket used by the GCS backend
    #[arg(long, env = "UIDL_GCS_BUCKET")]
    pub gcs_bucket: Option<String>,

    /// Base URL of the GCS JSON API
    #[arg(
        long,
        env = "UIDL_GCS_ENDPOINT",
        default_value = "https://storage.googleapis.com"
    )]
    pub gcs_endpoint: String,

    /// Bearer token sent to the GCS JSON API
    #[arg(long, env = "UIDL_GCS_TOKEN", hide_env_values = true)]
    pub gcs_token: Option<String>,

    /// Origins allowed to make cross-origin requests, `*` for any
    #[arg(
        long,
        env = "UIDL_CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub cors_allowed_origins: Vec<String>,

    /// Request headers allowed in cross-origin requests
    #[arg(
        long,
        env = "UIDL_CORS_ALLOWED_HEADERS",
        value_delimiter = ',',
        default_value = "Origin,X-Requested-With,Content-Type,Accept"
    )]
    pub cors_allowed_headers: Vec<String>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "UIDL_MAX_BODY_BYTES", default_value_t = 100 * 1024)]
    pub max_body_bytes: usize,

    /// `standalone` serves HTTP; `embedded` only builds the application
    #[arg(long, env = "UIDL_RUNTIME_MODE", default_value = "standalone")]
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let args = Args::try_parse_from(["uidl-server"]).unwrap();
        assert_eq!(args.storage, "FILESYSTEM");
        assert_eq!(args.cors_allowed_origins, vec!["*"]);
        assert_eq!(
            args.cors_allowed_headers,
            vec!["Origin", "X-Requested-With", "Content-Type", "Accept"]
        );
        assert_eq!(args.max_body_bytes, 102400);
        assert_eq!(args.mode, "standalone");
    }

    #[test]
    fn comma_separated_origins() {
        let args = Args::try_parse_from([
            "uidl-server",
            "--cors-allowed-origins",
            "https://a.example,https://b.example",
        ])
        .unwrap();
        assert_eq!(
            args.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
