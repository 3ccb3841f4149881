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

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use hickory_proto::op::Message;
use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::error::{Error, Result};

/// Receive timeout for a single exchange. A transport default, not a client
/// retry policy; injected transports may choose differently.
const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest UDP payload accepted from the server.
const MAX_PAYLOAD: usize = 4096;

/// Sends one DNS query message and returns the server's response.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(&self, message: Message, server: &str) -> Result<Message>;
}

/// Default transport: one UDP datagram out, one in.
#[derive(Debug, Default)]
pub struct UdpExchange;

impl UdpExchange {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsExchange for UdpExchange {
    async fn exchange(&self, message: Message, server: &str) -> Result<Message> {
        let wire = message.to_vec()?;
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(server).await?;
        socket.send(&wire).await?;

        let mut buf = [0u8; MAX_PAYLOAD];
        let read = timeout(EXCHANGE_TIMEOUT, socket.recv(&mut buf))
            .await
            .map_err(|_| Error::Io(io::ErrorKind::TimedOut.into()))??;
        Ok(Message::from_vec(&buf[..read])?)
    }
}
