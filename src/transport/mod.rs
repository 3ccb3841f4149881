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

//! Transport traits and their default implementations.
//!
//! Both backends sit behind injectable traits so the client can be exercised
//! against fixtures without touching the network. Each trait performs exactly
//! one exchange per call; retries and cancellation belong to the caller.

pub mod dns;
pub mod http;

pub use dns::{DnsExchange, UdpExchange};
pub use http::{HttpExchange, HttpResponse, ReqwestExchange};
