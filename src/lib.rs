//! Client for DNS-backed service records.
//!
//! Talks to a PowerDNS-style HTTP JSON API for management and to a DNS
//! server directly for SRV-based discovery, behind one record model and one
//! error taxonomy.
//!
//! Supported features:
//! - Service lookup, registration, deletion and TTL updates over HTTP
//! - Service listing over either backend, selected at the call site
//! - Zone and server inspection, zone creation, callback registration
//! - Injectable transports for fixture-driven testing
//!
//! # Example
//! ```no_run
//! use skydns_client::Client;
//!
//! # async fn run() -> Result<(), skydns_client::Error> {
//! let client = Client::new(
//!     "http://127.0.0.1:8081",
//!     Some("s3cr3t"),
//!     "skydns.local",
//!     "127.0.0.1:53",
//! )?;
//! let services = client.all_services_dns().await?;
//! # Ok(())
//! # }
//! ```

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

pub mod client;
pub mod error;
pub mod records;
pub mod transport;

pub use client::{Client, base_from_location};
pub use error::{Error, Result};
pub use records::{Callback, NameCount, ServerResource, Service, Zone, ZoneRecord};
pub use transport::{DnsExchange, HttpExchange, HttpResponse, ReqwestExchange, UdpExchange};
