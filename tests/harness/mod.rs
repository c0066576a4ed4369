use std::net::SocketAddr;
use std::time::Duration;

use hickory_resolver::{
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    Resolver, TokioResolver,
};


/// Static SRV record definition served by the mock DNS server.
#[derive(Clone, Debug)]
pub struct MockSrv {
    /// The SRV name (e.g., "_http._tcp.example.com")
    pub name: &'static str,
    /// Priority value
    pub priority: u16,
    /// Weight value
    pub weight: u16,
    /// Port number
    pub port: u16,
    /// Target hostname
    pub target: &'static str,
    /// TTL in seconds
    pub ttl: u32,
}

impl MockSrv {
    /// Create a new SRV record.
    pub const fn new(
        name: &'static str,
        priority: u16,
        weight: u16,
        port: u16,
        target: &'static str,
        ttl: u32,
    ) -> Self {
        Self {
            name,
            priority,
            weight,
            port,
            target,
            ttl,
        }
    }
}

/// Builds a resolver that only queries the mock DNS server at `addr`, once,
/// without caching answers between lookups.
pub fn resolver_for(addr: SocketAddr) -> TokioResolver {
    let name_servers = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
    let config = ResolverConfig::from_parts(None, vec![], name_servers);
    let mut opts = ResolverOpts::default();
    opts.attempts = 1;
    opts.timeout = Duration::from_secs(2);
    opts.cache_size = 0;
    opts.ndots = 0;
    Resolver::builder_with_config(config, TokioConnectionProvider::default())
        .with_options(opts)
        .build()
}
