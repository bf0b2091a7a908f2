use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_ROOT: &str = "public";
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub public_root: PathBuf,
    /// Deadline for reading the request line from a new connection.
    pub read_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| DEFAULT_LISTEN.to_string());

        let public_root = std::env::var("PUBLIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_ROOT));

        let read_timeout = std::env::var("READ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_READ_TIMEOUT);

        Self {
            listen_addr,
            public_root,
            read_timeout,
        }
    }
}
