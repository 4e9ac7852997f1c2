//! Discovery payload handling

use url::{Host, Url};

/// Payload handed over by the host when it discovers a Lara device
///
/// The first element is the discovery source; the second is the device
/// URL. Only the hostname of the URL is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryInfo(pub String, pub String);

impl DiscoveryInfo {
    pub fn new(source: impl Into<String>, url: impl Into<String>) -> Self {
        Self(source.into(), url.into())
    }

    pub fn url(&self) -> &str {
        &self.1
    }

    /// Hostname of the discovered device URL
    ///
    /// Domains come back lower-cased and IPv6 addresses without brackets.
    /// Returns `None` if the URL does not parse or carries no host.
    pub fn hostname(&self) -> Option<String> {
        let url = Url::parse(self.url()).ok()?;
        match url.host()? {
            Host::Domain(domain) => Some(domain.to_ascii_lowercase()),
            Host::Ipv4(addr) => Some(addr.to_string()),
            Host::Ipv6(addr) => Some(addr.to_string()),
        }
    }
}
