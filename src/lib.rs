// cargo watch -x 'fmt' -x 'run'  // 'run -- 2001:db8::1'

mod config;
pub mod models;
pub mod output;
pub mod processing;

use models::Ipv6Cidr;
use std::collections::HashSet;
use std::error::Error;

pub use config::{read_watch_file, ProxyConfig, WatchFile};

/// Load the watch file and de-duplicate every proxy's rule list.
pub fn get_watch_rules(path: Option<&str>) -> Result<WatchFile, Box<dyn Error>> {
    let mut watch = read_watch_file(path)?;
    for proxy in watch.proxies.iter_mut() {
        let rules = std::mem::take(&mut proxy.rules);
        proxy.rules = processing::de_duplicate_rules(rules);
    }
    Ok(watch)
}

// return error if duplicate rules found
pub fn check_for_duplicate_rules(watch: &WatchFile) -> Result<(), Box<dyn Error>> {
    let mut seen: HashSet<(&str, Ipv6Cidr)> = HashSet::new();

    for proxy in watch.proxies.iter() {
        for rule in proxy.rules.iter() {
            if !seen.insert((proxy.iface.as_str(), *rule)) {
                return Err(format!("Duplicate rule found: {rule} on {}", proxy.iface).into());
            }
        }
    }
    Ok(())
}
