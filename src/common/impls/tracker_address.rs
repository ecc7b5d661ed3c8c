use std::fmt;
use std::fmt::Formatter;
use std::net::SocketAddr;
use log::debug;
use crate::common::enums::address_error::AddressError;
use crate::common::structs::tracker_address::TrackerAddress;

impl TrackerAddress {
    pub fn new(host: &str, port: u16) -> TrackerAddress {
        TrackerAddress { host: host.to_string(), port }
    }

    /// Parses `udp://host[:port][/path]` or a bare `host[:port]`.
    ///
    /// `default_port` is used when the authority has no port.
    pub fn parse(url: &str, default_port: u16) -> Result<TrackerAddress, AddressError> {
        let url = url.trim();
        let rest = match url.split_once("://") {
            Some((scheme, rest)) => {
                if !scheme.eq_ignore_ascii_case("udp") {
                    return Err(AddressError::UnsupportedScheme(scheme.to_string()));
                }
                rest
            }
            None => url,
        };

        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let authority = match authority.rsplit_once('@') {
            Some((_, host)) => host,
            None => authority,
        };
        if authority.starts_with('[') || authority.matches(':').count() > 1 {
            return Err(AddressError::Ipv6Unsupported(authority.to_string()));
        }

        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>()
                    .ok()
                    .filter(|port| *port != 0)
                    .ok_or_else(|| AddressError::InvalidPort(port.to_string()))?;
                (host, port)
            }
            None => (authority, default_port),
        };
        if host.is_empty() {
            return Err(AddressError::MissingHost);
        }

        Ok(TrackerAddress::new(host, port))
    }

    /// Resolves the host and returns the first IPv4 address found.
    pub async fn resolve(&self) -> Result<SocketAddr, AddressError> {
        let unresolvable = || AddressError::Unresolvable(self.to_string());
        let addresses = tokio::net::lookup_host((self.host.as_str(), self.port)).await.map_err(|error| {
            debug!("[RESOLVE] {self}: {error}");
            unresolvable()
        })?;
        let mut addresses = addresses.filter(|address| address.is_ipv4());
        addresses.next().ok_or_else(unresolvable)
    }
}

impl fmt::Display for TrackerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
