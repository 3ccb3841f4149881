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

//! Wire data model for both backends.
//!
//! Every type here is a transient value object decoded fresh from a response
//! body; the client holds no cache. Wire field names are fixed, and fields
//! absent from a body decode to their zero value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One discoverable service instance.
///
/// The UUID a service is registered under is the HTTP path key; it is never
/// part of the record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    pub host: String,
    pub port: u16,
    /// TTL in seconds. Only meaningful to the server at update time; a
    /// looked-up record reflects server-side state.
    pub ttl: u32,
    /// Doubles as the zone name when the service is added.
    pub version: String,
}

/// One authoritative server instance, as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerResource {
    pub r#type: String,
    pub id: String,
    pub url: String,
    pub daemon_type: String,
    pub version: String,
    pub config_url: String,
    pub zones_url: String,
}

/// One resource record inside a [`Zone`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRecord {
    pub name: String,
    pub r#type: String,
    pub ttl: u32,
    pub disabled: bool,
    pub content: String,
}

/// A DNS zone container.
///
/// All fields serialize, zero values included, so a posted zone always
/// carries the complete shape the server expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    /// Server-assigned identifier; empty on a zone built client-side.
    pub id: String,
    pub name: String,
    pub r#type: String,
    pub url: String,
    pub kind: String,
    pub serial: u32,
    pub notified_serial: u32,
    pub masters: Vec<String>,
    pub dnssec: bool,
    pub nsec3param: String,
    pub nsec3narrow: bool,
    pub presigned: bool,
    pub soa_edit: String,
    pub soa_edit_api: String,
    pub account: String,
    pub nameservers: Vec<String>,
    pub servers: Vec<String>,
    pub recursion_desired: bool,
    pub records: Vec<ZoneRecord>,
    pub comments: Vec<String>,
}

impl Zone {
    /// The zone shape posted by add-zone: kind `Native`, no masters or
    /// nameservers. Everything else is left for the server to assign.
    pub fn native(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "Native".to_string(),
            ..Self::default()
        }
    }
}

/// Region or environment identifiers mapped to how many services carry each.
pub type NameCount = HashMap<String, i64>;

/// Opaque payload registered against a service UUID to trigger server-side
/// effects. The server owns its shape; this client passes it through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Callback(pub serde_json::Value);

/// Error envelope carried by 422 responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorEnvelope {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_decodes_with_missing_fields_as_zero_values() {
        let svc: Service = serde_json::from_str(r#"{"name":"api"}"#).unwrap();
        assert_eq!(svc.name, "api");
        assert_eq!(svc.host, "");
        assert_eq!(svc.port, 0);
        assert_eq!(svc.ttl, 0);
        assert_eq!(svc.version, "");
    }

    #[test]
    fn service_round_trips() {
        let svc = Service {
            name: "api".into(),
            host: "10.0.0.1".into(),
            port: 8080,
            ttl: 60,
            version: "1.0.0".into(),
        };
        let json = serde_json::to_string(&svc).unwrap();
        assert_eq!(serde_json::from_str::<Service>(&json).unwrap(), svc);
    }

    #[test]
    fn native_zone_serializes_complete_shape() {
        let value = serde_json::to_value(Zone::native("1.0.0")).unwrap();
        assert_eq!(value["name"], "1.0.0");
        assert_eq!(value["kind"], "Native");
        assert_eq!(value["masters"], serde_json::json!([]));
        assert_eq!(value["nameservers"], serde_json::json!([]));
        // zero-value fields are present, not skipped
        assert_eq!(value["serial"], 0);
        assert_eq!(value["dnssec"], false);
        assert_eq!(value["type"], "");
    }

    #[test]
    fn zone_with_records_round_trips() {
        let zone = Zone {
            records: vec![ZoneRecord {
                name: "www.example.org".into(),
                r#type: "A".into(),
                ttl: 300,
                disabled: false,
                content: "192.0.2.1".into(),
            }],
            ..Zone::native("example.org")
        };
        let json = serde_json::to_string(&zone).unwrap();
        let back: Zone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, zone);
        assert_eq!(back.records[0].content, "192.0.2.1");
    }

    #[test]
    fn server_resource_uses_wire_names() {
        let json = r#"{
            "type": "Server",
            "id": "localhost",
            "url": "/servers/localhost",
            "daemon_type": "authoritative",
            "version": "3.4.1",
            "config_url": "/servers/localhost/config{/config_setting}",
            "zones_url": "/servers/localhost/zones{/zone}"
        }"#;
        let server: ServerResource = serde_json::from_str(json).unwrap();
        assert_eq!(server.r#type, "Server");
        assert_eq!(server.daemon_type, "authoritative");
        assert_eq!(server.zones_url, "/servers/localhost/zones{/zone}");
    }

    #[test]
    fn error_envelope_tolerates_unknown_shape() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(envelope.error, "");
    }
}
