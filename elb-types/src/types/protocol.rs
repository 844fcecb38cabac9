use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The protocols a listener or a health check target can use.
///
/// Listener and health check members keep the protocol as a string, exactly
/// as the service reports it. Parsing into this enum is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Http,
    Https,
    Tcp,
    Ssl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown protocol: {0}")]
pub struct ParseProtocolError(pub String);

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Https => "HTTPS",
            Protocol::Tcp => "TCP",
            Protocol::Ssl => "SSL",
        }
    }

    /// HTTPS and SSL terminate TLS on the load balancer and need a certificate.
    pub fn is_secure(&self) -> bool {
        matches!(self, Protocol::Https | Protocol::Ssl)
    }

    /// HTTP and HTTPS are handled at the application layer, TCP and SSL are
    /// passed through.
    pub fn is_layer7(&self) -> bool {
        matches!(self, Protocol::Http | Protocol::Https)
    }
}

impl FromStr for Protocol {
    type Err = ParseProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HTTP" => Ok(Protocol::Http),
            "HTTPS" => Ok(Protocol::Https),
            "TCP" => Ok(Protocol::Tcp),
            "SSL" => Ok(Protocol::Ssl),
            _ => Err(ParseProtocolError(s.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("https".parse::<Protocol>(), Ok(Protocol::Https));
        assert_eq!("Tcp".parse::<Protocol>(), Ok(Protocol::Tcp));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "UDP".parse::<Protocol>(),
            Err(ParseProtocolError("UDP".to_string()))
        );
    }

    #[test]
    fn test_layers() {
        assert!(Protocol::Https.is_secure() && Protocol::Https.is_layer7());
        assert!(Protocol::Ssl.is_secure() && !Protocol::Ssl.is_layer7());
        assert!(!Protocol::Http.is_secure());
        assert!(!Protocol::Tcp.is_layer7());
    }
}
