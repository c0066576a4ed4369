//! SRV resolver backed by [`hickory_resolver`].

use super::SrvResolver;
use crate::{ServiceRecord, SrvRecord};
use async_trait::async_trait;
use hickory_resolver::{
    name_server::ConnectionProvider, proto::rr::rdata::SRV, Name, ResolveError, Resolver,
};

#[async_trait]
impl<P> SrvResolver for Resolver<P>
where
    P: ConnectionProvider,
{
    type Record = SRV;
    type Error = ResolveError;

    async fn get_srv_records_unordered(&self, srv: &str) -> Result<Vec<Self::Record>, Self::Error> {
        let lookup = self.srv_lookup(srv).await?;
        Ok(lookup.into_iter().collect())
    }
}

impl SrvRecord for SRV {
    type Target = Name;

    fn target(&self) -> &Self::Target {
        self.target()
    }

    fn port(&self) -> u16 {
        self.port()
    }

    fn priority(&self) -> u16 {
        self.priority()
    }

    fn weight(&self) -> u16 {
        self.weight()
    }
}

impl From<&SRV> for ServiceRecord {
    fn from(srv: &SRV) -> Self {
        Self::new(srv.priority(), srv.weight(), srv.port(), srv.target().to_string())
    }
}
