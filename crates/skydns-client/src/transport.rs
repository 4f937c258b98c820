//! DNS query construction and the resolver pinned to the directory's DNS server.

use hickory_proto::op::{Query, ResponseCode};
use hickory_proto::rr::{Name, Record, RecordType};
use hickory_proto::xfer::Protocol;
use hickory_proto::ProtoErrorKind;
use hickory_resolver::config::{NameServerConfig, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{ResolveError, ResolveErrorKind, TokioResolver};
use skydns_core::{Result, SkydnsError};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

/// Build the question for `name` and `record_type`.
pub(crate) fn new_query(name: &str, record_type: RecordType) -> Result<Query> {
    let name = Name::from_ascii(name)
        .map_err(|e| SkydnsError::Dns(format!("invalid query name {name}: {e}")))?;
    Ok(Query::query(name, record_type))
}

/// Sends queries to the directory's DNS interface
#[derive(Debug, Clone)]
pub(crate) struct DnsTransport {
    server: String,
    timeout: Duration,
}

impl DnsTransport {
    pub(crate) const fn new(server: String, timeout: Duration) -> Self {
        Self { server, timeout }
    }

    /// Ask the directory for the records answering `query`.
    ///
    /// A name that does not exist, or exists without records of the asked
    /// type, yields no records.
    pub(crate) async fn lookup(&self, query: &Query) -> Result<Vec<Record>> {
        let server = self.resolve_server().await?;
        debug!(
            name = %query.name(),
            record_type = %query.query_type(),
            server = %server,
            "DNS lookup"
        );

        match self
            .resolver(server)
            .lookup(query.name().clone(), query.query_type())
            .await
        {
            Ok(lookup) => Ok(lookup.records().to_vec()),
            Err(e) if is_empty_answer(&e) => {
                debug!(name = %query.name(), error = %e, "no records");
                Ok(Vec::new())
            }
            Err(e) => Err(SkydnsError::Dns(format!("{}: {e}", query.name()))),
        }
    }

    async fn resolve_server(&self) -> Result<SocketAddr> {
        lookup_host(self.server.as_str())
            .await
            .map_err(|e| SkydnsError::Dns(format!("cannot resolve {}: {e}", self.server)))?
            .next()
            .ok_or_else(|| SkydnsError::Dns(format!("no address for {}", self.server)))
    }

    /// A resolver that only talks to `server`: UDP first, TCP when the
    /// answer is truncated. No search list, no cache.
    fn resolver(&self, server: SocketAddr) -> TokioResolver {
        let name_servers: Vec<NameServerConfig> = [Protocol::Udp, Protocol::Tcp]
            .into_iter()
            .map(|protocol| {
                let mut name_server = NameServerConfig::new(server, protocol);
                name_server.trust_negative_responses = true;
                name_server
            })
            .collect();
        let config = ResolverConfig::from_parts(None, vec![], name_servers);

        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        opts.attempts = 1;
        opts.cache_size = 0;
        opts.edns0 = true;

        TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(opts)
            .build()
    }
}

/// NXDOMAIN, or NOERROR with an empty answer section
fn is_empty_answer(error: &ResolveError) -> bool {
    match error.kind() {
        ResolveErrorKind::Proto(proto) => matches!(
            proto.kind(),
            ProtoErrorKind::NoRecordsFound {
                response_code: ResponseCode::NXDomain | ResponseCode::NoError,
                ..
            }
        ),
        _ => false,
    }
}
