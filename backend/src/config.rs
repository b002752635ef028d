//! Command line and environment configuration of the console host.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "shim-console-host",
    about = "Serve the shim console and forward its API calls to a shim server"
)]
pub struct HostConfig {
    /// Interface to bind.
    #[arg(long, env = "SHIM_CONSOLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "SHIM_CONSOLE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the shim server receiving `/api/*` requests.
    #[arg(long, env = "SHIM_SERVER_URL", default_value = "http://localhost:8083")]
    pub shim_server: String,

    /// Do not open the console in the default browser on startup.
    #[arg(long, env = "SHIM_CONSOLE_NO_BROWSER")]
    pub no_browser: bool,
}

impl HostConfig {
    pub fn console_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_shim_server() {
        let config = HostConfig::try_parse_from(["shim-console-host"]).unwrap();
        assert_eq!(config.console_url(), "http://127.0.0.1:8080");
        assert_eq!(config.shim_server, "http://localhost:8083");
        assert!(!config.no_browser);
    }

    #[test]
    fn flags_override_defaults() {
        let config = HostConfig::try_parse_from([
            "shim-console-host",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--shim-server",
            "https://shims.example.org",
            "--no-browser",
        ])
        .unwrap();

        assert_eq!(config.console_url(), "http://0.0.0.0:9000");
        assert_eq!(config.shim_server, "https://shims.example.org");
        assert!(config.no_browser);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(HostConfig::try_parse_from(["shim-console-host", "--port", "http"]).is_err());
    }
}
