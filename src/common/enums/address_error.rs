use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("unsupported tracker scheme: {0}")]
    UnsupportedScheme(String),

    #[error("tracker address has no host")]
    MissingHost,

    #[error("invalid tracker port: {0}")]
    InvalidPort(String),

    #[error("IPv6 trackers are not supported: {0}")]
    Ipv6Unsupported(String),

    #[error("could not resolve tracker {0} to an IPv4 address")]
    Unresolvable(String),
}
