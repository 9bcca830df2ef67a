//! Watch-file loading.
//!
//! The watch file is a JSON document listing proxied interfaces and the
//! subnet rules configured on each, e.g.:
//!
//! ```json
//! { "proxies": [ { "iface": "eth0", "ifindex": 2,
//!                  "rules": ["2001:db8::/32", "fd00:1::/64"] } ] }
//! ```

use crate::models::Ipv6Cidr;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Default watch file, overridable with the WATCH_FILE environment variable.
const DEFAULT_WATCH_FILE: &str = "watch.json";

/// Rules configured for one proxied interface.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProxyConfig {
    /// Interface name (e.g., "eth0").
    pub iface: String,
    /// Kernel interface index, if known.
    #[serde(default)]
    pub ifindex: u32,
    /// Subnet rules; an observed address matching any of these belongs to
    /// this proxy.
    pub rules: Vec<Ipv6Cidr>,
}

/// Parsed watch file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WatchFile {
    pub proxies: Vec<ProxyConfig>,
}

/// Read and parse the watch file.
///
/// # Arguments
/// * `path` - Optional path to a specific watch file. If None, uses the
///   WATCH_FILE environment variable or the default name.
///
/// # Returns
/// * `Ok(WatchFile)` - The parsed proxy configurations
/// * `Err` - If the file is missing, unreadable, or not valid JSON
pub fn read_watch_file(path: Option<&str>) -> Result<WatchFile, Box<dyn Error>> {
    let path = match path {
        Some(p) => p.to_string(),
        None => std::env::var("WATCH_FILE").unwrap_or_else(|_| DEFAULT_WATCH_FILE.to_string()),
    };

    if !Path::new(&path).exists() {
        return Err(format!("Watch file does not exist: {path}").into());
    }
    log::info!("Reading watch file: {path}");

    let json = std::fs::read_to_string(&path)
        .map_err(|e| format!("Error reading watch file {path}: {e}"))?;

    // serde_path_to_error reports which JSON path failed, not just the error.
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let watch: WatchFile = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing watch file {path} at '{}': {}", e.path(), e.inner()))?;

    log::info!("Loaded {} proxies from {path}", watch.proxies.len());
    Ok(watch)
}
