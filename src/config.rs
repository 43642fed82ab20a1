//! Runtime configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;

/// Configuration for the skill server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    pub host: IpAddr,
    pub port: u16,
    /// JSON file with template overrides
    pub templates_path: Option<PathBuf>,
    /// Expected skill application id; unchecked when unset
    pub application_id: Option<String>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            templates_path: None,
            application_id: None,
        }
    }
}

impl SkillConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("DIAPERING_HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("DIAPERING_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            templates_path: lookup("DIAPERING_TEMPLATES")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            application_id: lookup("DIAPERING_APPLICATION_ID").filter(|id| !id.is_empty()),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
