//! SRV resolvers.

use crate::{order::RandomSource, SrvRecord};
use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(feature = "hickory")]
mod hickory;

/// Error produced when the underlying SRV lookup fails. The lookup's own
/// error is carried unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("srv lookup failed: {0}")]
pub struct LookupError<E: Debug>(#[source] pub E);

impl<E: Debug> LookupError<E> {
    /// Gets the underlying lookup error.
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Builds the name queried for a service, protocol, and domain, e.g.
/// `_http._tcp.example.com`. If both `service` and `protocol` are empty,
/// `domain` is queried as is.
///
/// ```
/// use srv_order::resolver::srv_name;
/// assert_eq!(srv_name("http", "tcp", "example.com."), "_http._tcp.example.com.");
/// assert_eq!(srv_name("", "", "_ldap._tcp.example.com"), "_ldap._tcp.example.com");
/// ```
pub fn srv_name(service: &str, protocol: &str, domain: &str) -> String {
    if service.is_empty() && protocol.is_empty() {
        domain.to_string()
    } else {
        format!("_{}._{}.{}", service, protocol, domain)
    }
}

/// Represents the ability to act as a SRV resolver.
#[async_trait]
pub trait SrvResolver: Send + Sync {
    /// SRV record representation produced by the resolver.
    type Record: SrvRecord + Send;

    /// Errors encountered during SRV resolution.
    type Error: std::error::Error + Send + 'static;

    /// Gets the records corresponding to a srv name without sorting by priority
    /// or shuffling based on weight.
    async fn get_srv_records_unordered(&self, srv: &str) -> Result<Vec<Self::Record>, Self::Error>;

    /// Gets the records corresponding to a srv name, sorting by priority and
    /// shuffling based on weight.
    async fn get_srv_records(&self, srv: &str) -> Result<Vec<Self::Record>, Self::Error> {
        let records = self.get_srv_records_unordered(srv).await?;
        let (_, records) = Self::order_srv_records(records, &mut rand::rng());
        Ok(records)
    }

    /// Looks up the records for `service` over `protocol` in `domain`,
    /// returning how many were found along with the records in the order they
    /// should be tried.
    ///
    /// Lookup failures are returned as a [`LookupError`] wrapping the
    /// resolver's error and are never retried.
    async fn resolve_ordered(
        &self,
        service: &str,
        protocol: &str,
        domain: &str,
    ) -> Result<(usize, Vec<Self::Record>), LookupError<Self::Error>> {
        let srv = srv_name(service, protocol, domain);
        match self.get_srv_records_unordered(&srv).await {
            Ok(records) => {
                let (count, records) = Self::order_srv_records(records, &mut rand::rng());
                #[cfg(feature = "log")]
                tracing::debug!(srv = %srv, count, "resolved srv records");
                Ok((count, records))
            }
            Err(err) => {
                #[cfg(feature = "log")]
                tracing::debug!(srv = %srv, error = %err, "srv lookup failed");
                Err(LookupError(err))
            }
        }
    }

    /// Orders SRV records by priority and weight per RFC 2782.
    fn order_srv_records<G: RandomSource + ?Sized>(
        records: Vec<Self::Record>,
        rng: &mut G,
    ) -> (usize, Vec<Self::Record>) {
        crate::order::order_records_with_rng(records, rng)
    }
}
