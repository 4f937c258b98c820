//! DNS data-plane queries.

use crate::transport::new_query;
use crate::SkydnsClient;
use hickory_proto::rr::{RData, RecordType};
use skydns_core::{NameCount, Result, SrvRecord};

/// DNS data-plane queries
pub struct DnsApi<'a> {
    client: &'a SkydnsClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) fn new(client: &'a SkydnsClient) -> Self {
        Self { client }
    }

    /// Look up SRV records for `name`.
    ///
    /// A name without a trailing dot is taken relative to the directory
    /// domain, so `"regions"` queries `regions.skydns.local.`. A name that
    /// does not exist yields no records.
    pub async fn lookup_srv(&self, name: &str) -> Result<Vec<SrvRecord>> {
        let qname = if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{name}{}", self.client.config().domain())
        };

        let query = new_query(&qname, RecordType::SRV)?;
        let records = self.client.dns_transport().lookup(&query).await?;

        Ok(records
            .iter()
            .filter_map(|record| match record.data() {
                RData::SRV(srv) => Some(SrvRecord {
                    priority: srv.priority(),
                    weight: srv.weight(),
                    port: srv.port(),
                    target: srv.target().to_string(),
                }),
                _ => None,
            })
            .collect())
    }

    /// Number of registered services per region, as seen by the DNS interface.
    ///
    /// Every SRV answer for `regions` counts once towards the region named
    /// by its target.
    pub async fn regions(&self) -> Result<NameCount> {
        let records = self.lookup_srv("regions").await?;
        Ok(count_targets(&records, self.client.config().domain()))
    }
}

fn count_targets(records: &[SrvRecord], domain: &str) -> NameCount {
    let mut counts = NameCount::new();
    for record in records {
        *counts.entry(target_label(&record.target, domain)).or_default() += 1;
    }
    counts
}

/// Strip the directory domain (and root label) from an SRV target.
fn target_label(target: &str, domain: &str) -> String {
    let split = target.len().saturating_sub(domain.len());
    if domain.len() > 1 && split > 0 {
        if let (Some(head), Some(tail)) = (target.get(..split), target.get(split..)) {
            if tail.eq_ignore_ascii_case(domain) {
                return head.to_string();
            }
        }
    }
    target.trim_end_matches('.').to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
    use hickory_proto::rr::rdata::{A, SRV};
    use hickory_proto::rr::{Name, Record};
    use skydns_core::SkydnsError;
    use std::net::Ipv4Addr;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, UdpSocket};
    use tokio::task::JoinHandle;

    fn answer(query: &Message, code: ResponseCode, targets: &[&str]) -> Message {
        let qname = query.queries()[0].name().clone();

        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(query.recursion_desired())
            .set_response_code(code)
            .add_queries(query.queries().to_vec());

        for target in targets {
            let srv = SRV::new(10, 20, 8080, Name::from_ascii(target).unwrap());
            response.add_answer(Record::from_rdata(qname.clone(), 30, RData::SRV(srv)));
        }
        if !targets.is_empty() {
            response.add_answer(Record::from_rdata(
                qname,
                30,
                RData::A(A::from(Ipv4Addr::new(10, 0, 0, 1))),
            ));
        }
        response
    }

    /// Answers one UDP query with the given SRV targets, optionally preceded
    /// by a datagram carrying the wrong id.
    async fn responder(
        targets: &'static [&'static str],
        code: ResponseCode,
        send_decoy: bool,
    ) -> (u16, JoinHandle<Message>) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
            let query = Message::from_vec(&buf[..len]).unwrap();
            let response = answer(&query, code, targets);

            if send_decoy {
                let mut decoy = response.clone();
                decoy.set_id(query.id().wrapping_add(1));
                socket.send_to(&decoy.to_vec().unwrap(), peer).await.unwrap();
            }

            socket.send_to(&response.to_vec().unwrap(), peer).await.unwrap();
            query
        });

        (port, handle)
    }

    /// Answers over UDP with only the first target and the TC bit set, and
    /// over TCP (same port) with every target.
    async fn truncating_responder(
        targets: &'static [&'static str],
    ) -> (u16, JoinHandle<Message>, JoinHandle<()>) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();

        let udp = tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
            let query = Message::from_vec(&buf[..len]).unwrap();

            let mut response = answer(&query, ResponseCode::NoError, &targets[..1]);
            response.set_truncated(true);
            socket.send_to(&response.to_vec().unwrap(), peer).await.unwrap();
            query
        });

        let tcp = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let len = stream.read_u16().await.unwrap();
            let mut buf = vec![0u8; usize::from(len)];
            stream.read_exact(&mut buf).await.unwrap();
            let query = Message::from_vec(&buf).unwrap();

            let bytes = answer(&query, ResponseCode::NoError, targets).to_vec().unwrap();
            stream.write_u16(u16::try_from(bytes.len()).unwrap()).await.unwrap();
            stream.write_all(&bytes).await.unwrap();
            stream.flush().await.unwrap();
        });

        (port, udp, tcp)
    }

    fn client_for(port: u16) -> SkydnsClient {
        SkydnsClient::builder(format!("http://127.0.0.1:{port}"))
            .domain("skydns.local")
            .dns_port(port)
            .dns_timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn regions_counts_targets() {
        let (port, handle) = responder(
            &["east.skydns.local.", "west.skydns.local.", "east.skydns.local."],
            ResponseCode::NoError,
            false,
        )
        .await;

        let regions = client_for(port).dns().regions().await.unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions["east"], 2);
        assert_eq!(regions["west"], 1);

        let query = handle.await.unwrap();
        let question = &query.queries()[0];
        assert_eq!(question.query_type(), RecordType::SRV);
        assert_eq!(question.name().to_string(), "regions.skydns.local.");
    }

    #[tokio::test]
    async fn truncated_answer_is_retried_over_tcp() {
        let (port, udp, tcp) = truncating_responder(&[
            "east.skydns.local.",
            "west.skydns.local.",
            "east.skydns.local.",
        ])
        .await;

        let regions = client_for(port).dns().regions().await.unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions["east"], 2);
        assert_eq!(regions["west"], 1);

        let query = udp.await.unwrap();
        let edns = query.extensions().as_ref().expect("query advertises EDNS");
        assert!(edns.max_payload() > 512);
        tcp.await.unwrap();
    }

    #[tokio::test]
    async fn lookup_srv_returns_records() {
        let (port, _handle) =
            responder(&["web.east.skydns.local."], ResponseCode::NoError, false).await;

        let records = client_for(port).dns().lookup_srv("web.skydns.local.").await.unwrap();
        assert_eq!(
            records,
            vec![SrvRecord {
                priority: 10,
                weight: 20,
                port: 8080,
                target: "web.east.skydns.local.".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn ignores_datagrams_with_other_ids() {
        let (port, _handle) =
            responder(&["east.skydns.local."], ResponseCode::NoError, true).await;

        let regions = client_for(port).dns().regions().await.unwrap();
        assert_eq!(regions["east"], 1);
    }

    #[tokio::test]
    async fn nxdomain_is_empty() {
        let (port, _handle) = responder(&[], ResponseCode::NXDomain, false).await;
        let regions = client_for(port).dns().regions().await.unwrap();
        assert!(regions.is_empty());
    }

    #[tokio::test]
    async fn server_failure_is_dns_error() {
        let (port, _handle) = responder(&[], ResponseCode::ServFail, false).await;
        let err = client_for(port).dns().regions().await.unwrap_err();
        assert!(matches!(err, SkydnsError::Dns(_)));
    }

    #[test]
    fn target_labels() {
        assert_eq!(target_label("east.skydns.local.", ".skydns.local."), "east");
        assert_eq!(target_label("EAST.SkyDNS.local.", ".skydns.local."), "EAST");
        assert_eq!(target_label("host.other.org.", ".skydns.local."), "host.other.org");
        assert_eq!(target_label(".skydns.local.", ".skydns.local."), ".skydns.local");
        assert_eq!(target_label("east.", "."), "east");
    }
}
