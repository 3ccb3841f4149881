// Copyright 2026 skydns-client authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! The client facade: request building, response interpretation and the
//! public operation set over both transports.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::records::{Callback, ErrorEnvelope, NameCount, ServerResource, Service, Zone};
use crate::transport::{DnsExchange, HttpExchange, HttpResponse, ReqwestExchange, UdpExchange};

/// API key attached to every HTTP request.
const API_KEY: &str = "SOMEKEY";

/// Server name used when an operation does not take one.
const DEFAULT_SERVER: &str = "localhost";

/// Conflict message used when a 422 body carries no usable envelope.
const CONFLICT_FALLBACK: &str = "resource already exists";

/// Client for a service-record catalog reachable over an HTTP JSON API and,
/// for listing, directly over DNS.
///
/// The client is stateless: every operation performs exactly one transport
/// exchange against immutable configuration, so one instance is safe to
/// share across tasks. Both transports are injectable; production code uses
/// the defaults via [`Client::new`].
#[derive(Debug)]
pub struct Client<H = ReqwestExchange, D = UdpExchange> {
    base: String,
    secret: Option<String>,
    /// Always fully qualified; normalized once at construction.
    domain: String,
    dns_server: String,
    http: H,
    dns: D,
}

impl Client {
    /// Creates a client with the default transports.
    ///
    /// `base` is the HTTP API address, `dns_server` the `host:port` of the
    /// DNS backend; both are required. `secret`, when present and non-empty,
    /// is sent verbatim as the `Authorization` header. `domain` is
    /// normalized to its fully-qualified form here, once.
    pub fn new(
        base: &str,
        secret: Option<&str>,
        domain: &str,
        dns_server: &str,
    ) -> Result<Self> {
        Self::with_transports(
            base,
            secret,
            domain,
            dns_server,
            ReqwestExchange::new(),
            UdpExchange::new(),
        )
    }
}

impl<H: HttpExchange, D: DnsExchange> Client<H, D> {
    /// Creates a client over caller-supplied transports. Used by tests to
    /// run operations against fixtures; semantics match [`Client::new`].
    pub fn with_transports(
        base: &str,
        secret: Option<&str>,
        domain: &str,
        dns_server: &str,
        http: H,
        dns: D,
    ) -> Result<Self> {
        if base.is_empty() {
            return Err(Error::Configuration("no HTTP address specified"));
        }
        if dns_server.is_empty() {
            return Err(Error::Configuration("no DNS address specified"));
        }
        Ok(Self {
            base: base.to_string(),
            secret: secret.filter(|s| !s.is_empty()).map(str::to_string),
            domain: fqdn(domain),
            dns_server: dns_server.to_string(),
            http,
            dns,
        })
    }

    /// GET /servers
    pub async fn servers(&self) -> Result<Vec<ServerResource>> {
        let resp = self
            .execute(Method::GET, self.join_url("servers"), None)
            .await?;
        match resp.status {
            200 => decode(&resp.body),
            status => Err(Error::InvalidResponse { status }),
        }
    }

    /// GET /servers/:server_id
    pub async fn server(&self, uuid: &str) -> Result<ServerResource> {
        let resp = self
            .execute(Method::GET, self.join_url(&format!("servers/{uuid}")), None)
            .await?;
        match resp.status {
            200 => decode(&resp.body),
            status => Err(Error::InvalidResponse { status }),
        }
    }

    /// GET /servers/:server_id/config
    ///
    /// Placeholder until the server-side config endpoints stabilize;
    /// succeeds without issuing a request.
    pub async fn server_configs(&self) -> Result<()> {
        Ok(())
    }

    /// GET /servers/:server_id/config/:config_setting_name
    ///
    /// Placeholder, see [`Client::server_configs`].
    pub async fn server_config(&self, _uuid: &str) -> Result<()> {
        Ok(())
    }

    /// GET /servers/localhost/zones
    ///
    /// The server parameter is a literal constant, not caller-supplied.
    pub async fn zones(&self) -> Result<Vec<Zone>> {
        let url = self.join_url(&format!("servers/{DEFAULT_SERVER}/zones"));
        let resp = self.execute(Method::GET, url, None).await?;
        match resp.status {
            200 => decode(&resp.body),
            status => Err(Error::InvalidResponse { status }),
        }
    }

    /// POST /servers/:server/zones
    ///
    /// Creates a `Native` zone with empty master and nameserver lists; the
    /// interface does not let callers control those at creation time.
    /// `server` defaults to `localhost`.
    pub async fn add_zone(&self, zone: &str, server: Option<&str>) -> Result<Zone> {
        let server = server.unwrap_or(DEFAULT_SERVER);
        let body = serde_json::to_string(&Zone::native(zone))?;
        let url = self.join_url(&format!("servers/{server}/zones"));
        let resp = self.execute(Method::POST, url, Some(body)).await?;
        match resp.status {
            200 | 201 => decode(&resp.body),
            400 => Err(Error::InvalidResponse { status: 400 }),
            422 => Err(conflict(&resp.body)),
            status => Err(Error::InvalidResponse { status }),
        }
    }

    /// Registers a service by creating a zone named after its version.
    ///
    /// The UUID identifies the service to callers but does not shape the
    /// request. A failure is returned as-is from the underlying add-zone.
    pub async fn add_service(&self, uuid: &str, service: &Service) -> Result<()> {
        debug!(uuid, name = %service.name, "add service");
        if let Err(err) = self.add_zone(&service.version, None).await {
            warn!(uuid, %err, "add service failed");
            return Err(err);
        }
        Ok(())
    }

    /// DELETE /:uuid
    ///
    /// Fire-and-forget: any reachable response counts as success and the
    /// body is discarded. Only transport failures surface. Callers depend on
    /// this permissive contract; do not tighten it.
    pub async fn delete_service(&self, uuid: &str) -> Result<()> {
        debug!(uuid, "delete service");
        self.execute(Method::DELETE, self.join_url(uuid), None)
            .await?;
        Ok(())
    }

    /// GET /:uuid
    pub async fn get_service(&self, uuid: &str) -> Result<Service> {
        debug!(uuid, "get service");
        let resp = self
            .execute(Method::GET, self.join_url(uuid), None)
            .await?;
        match resp.status {
            200 => decode(&resp.body),
            404 => Err(Error::NotFound),
            status => Err(Error::InvalidResponse { status }),
        }
    }

    /// PATCH /:uuid with body `{"TTL": n}`
    ///
    /// Fire-and-forget like [`Client::delete_service`].
    pub async fn update_ttl(&self, uuid: &str, ttl: u32) -> Result<()> {
        let body = serde_json::json!({ "TTL": ttl }).to_string();
        debug!(uuid, ttl, "update service ttl");
        self.execute(Method::PATCH, self.join_url(uuid), Some(body))
            .await?;
        Ok(())
    }

    /// GET /
    ///
    /// A non-200 answer yields an empty list rather than an error.
    pub async fn all_services(&self) -> Result<Vec<Service>> {
        let resp = self.execute(Method::GET, self.join_url(""), None).await?;
        if resp.status == 200 {
            return decode(&resp.body);
        }
        Ok(Vec::new())
    }

    /// Lists services by querying SRV records for the configured domain.
    ///
    /// A response with no SRV answers is an empty list, not an error.
    /// Answers of other record types are skipped.
    pub async fn all_services_dns(&self) -> Result<Vec<Service>> {
        let query = self.dns_question("", RecordType::SRV)?;
        debug!(domain = %self.domain, server = %self.dns_server, "dns srv lookup");
        let response = self.dns.exchange(query, &self.dns_server).await?;
        Ok(response
            .answers()
            .iter()
            .filter_map(service_from_answer)
            .collect())
    }

    /// GET /skydns/regions/ returning region names with service counts.
    pub async fn regions(&self) -> Result<NameCount> {
        let url = format!("{}/skydns/regions/", self.base);
        let resp = self.execute(Method::GET, url, None).await?;
        decode(&resp.body)
    }

    /// GET /skydns/environments/ returning environment names with service
    /// counts.
    pub async fn environments(&self) -> Result<NameCount> {
        let url = format!("{}/skydns/environments/", self.base);
        let resp = self.execute(Method::GET, url, None).await?;
        decode(&resp.body)
    }

    /// PUT /skydns/callbacks/:uuid
    pub async fn add_callback(&self, uuid: &str, callback: &Callback) -> Result<()> {
        let body = serde_json::to_string(callback)?;
        let url = format!("{}/skydns/callbacks/{}", self.base, uuid);
        let resp = self.execute(Method::PUT, url, Some(body)).await?;
        match resp.status {
            201 => Ok(()),
            404 => Err(Error::NotFound),
            status => Err(Error::InvalidResponse { status }),
        }
    }

    /// Runs one HTTP exchange with the standing headers attached.
    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<HttpResponse> {
        debug!(%method, %url, "http exchange");
        let headers = self.headers()?;
        self.http.request(method, url, headers, body).await
    }

    /// Joins the base address and a relative path as `{base}/{path}`,
    /// verbatim. No escaping, no slash normalization.
    fn join_url(&self, action: &str) -> String {
        format!("{}/{}", self.base, action)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-Key", HeaderValue::from_static(API_KEY));
        if let Some(secret) = &self.secret {
            let value = HeaderValue::from_str(secret).map_err(|_| {
                Error::Configuration("secret is not a valid header value")
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Builds a question for `{name}.{domain}`, or the bare domain when
    /// `name` is empty. Generic over query type, though the facade only
    /// issues SRV lookups.
    fn dns_question(&self, name: &str, qtype: RecordType) -> Result<Message> {
        let qname = if name.is_empty() {
            Name::from_ascii(&self.domain)?
        } else {
            Name::from_ascii(format!("{}.{}", name, self.domain))?
        };
        let mut message = Message::new();
        message
            .set_id(rand::random())
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(qname, qtype));
        Ok(message)
    }
}

/// Extracts `scheme://host[:port]` from an absolute URL, as needed when
/// following a `Location` header back to a server base address.
pub fn base_from_location(location: &str) -> Result<String> {
    let url = Url::parse(location)?;
    let host = url.host_str().ok_or(url::ParseError::EmptyHost)?;
    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// A 422 body carries `{"error": "<message>"}`. The message is surfaced
/// verbatim when present and non-empty; anything else becomes the generic
/// fallback.
fn conflict(body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.is_empty() => Error::Conflict(envelope.error),
        _ => Error::Conflict(CONFLICT_FALLBACK.to_string()),
    }
}

/// Maps one SRV answer into a service record. The model has no fields for
/// priority and weight, so they ride along in the display name.
fn service_from_answer(record: &Record) -> Option<Service> {
    let RData::SRV(srv) = record.data()? else {
        return None;
    };
    Some(Service {
        name: format!(
            "{} (Priority: {}, Weight: {})",
            record.name(),
            srv.priority(),
            srv.weight()
        ),
        host: srv.target().to_string(),
        port: srv.port(),
        ttl: record.ttl(),
        version: String::new(),
    })
}

/// Appends the root label unless the name already carries one.
fn fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(
            "http://127.0.0.1:8081",
            None,
            "skydns.local",
            "127.0.0.1:53",
        )
        .unwrap()
    }

    #[test]
    fn construction_normalizes_domain_to_fqdn() {
        assert_eq!(client().domain, "skydns.local.");

        let already = Client::new("http://x", None, "skydns.local.", "127.0.0.1:53").unwrap();
        assert_eq!(already.domain, "skydns.local.");
    }

    #[test]
    fn construction_rejects_empty_http_address() {
        let err = Client::new("", None, "skydns.local", "127.0.0.1:53").unwrap_err();
        assert!(matches!(err, Error::Configuration("no HTTP address specified")));
    }

    #[test]
    fn construction_rejects_empty_dns_address() {
        let err = Client::new("http://127.0.0.1:8081", None, "skydns.local", "").unwrap_err();
        assert!(matches!(err, Error::Configuration("no DNS address specified")));
    }

    #[test]
    fn join_url_is_verbatim() {
        let c = client();
        assert_eq!(c.join_url("servers"), "http://127.0.0.1:8081/servers");
        // a trailing slash on the base is not collapsed
        let slashed = Client::new("http://x/", None, "d", "127.0.0.1:53").unwrap();
        assert_eq!(slashed.join_url("servers"), "http://x//servers");
        // the empty action addresses the API root
        assert_eq!(c.join_url(""), "http://127.0.0.1:8081/");
    }

    #[test]
    fn headers_carry_api_key_and_optional_secret() {
        let anonymous = client().headers().unwrap();
        assert_eq!(anonymous.get("X-API-Key").unwrap(), API_KEY);
        assert!(anonymous.get(AUTHORIZATION).is_none());

        let secretive =
            Client::new("http://x", Some("t0ps3cret"), "d", "127.0.0.1:53").unwrap();
        let headers = secretive.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "t0ps3cret");
    }

    #[test]
    fn empty_secret_sends_no_authorization() {
        let c = Client::new("http://x", Some(""), "d", "127.0.0.1:53").unwrap();
        assert!(c.headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn dns_question_uses_domain_for_empty_name() {
        let message = client().dns_question("", RecordType::SRV).unwrap();
        let query = &message.queries()[0];
        assert_eq!(query.name().to_ascii(), "skydns.local.");
        assert_eq!(query.query_type(), RecordType::SRV);
        assert!(message.recursion_desired());
    }

    #[test]
    fn dns_question_prefixes_name_onto_domain() {
        let message = client().dns_question("api", RecordType::SRV).unwrap();
        assert_eq!(message.queries()[0].name().to_ascii(), "api.skydns.local.");
    }

    #[test]
    fn conflict_surfaces_server_message_verbatim() {
        let err = conflict(r#"{"error":"uuid conflict"}"#);
        assert_eq!(err.to_string(), "uuid conflict");
    }

    #[test]
    fn conflict_falls_back_on_unparseable_body() {
        assert_eq!(conflict("<html>teapot</html>").to_string(), CONFLICT_FALLBACK);
        assert_eq!(conflict(r#"{"error":""}"#).to_string(), CONFLICT_FALLBACK);
    }

    #[test]
    fn base_from_location_extracts_scheme_and_host() {
        assert_eq!(
            base_from_location("http://pdns.example.org:8081/servers/localhost").unwrap(),
            "http://pdns.example.org:8081"
        );
        assert_eq!(
            base_from_location("https://pdns.example.org/x").unwrap(),
            "https://pdns.example.org"
        );
        assert!(base_from_location("/servers/localhost").is_err());
    }
}
