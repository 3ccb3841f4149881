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

use reqwest::{Client, Method, header::HeaderMap};

use crate::error::Result;

/// A completed HTTP round-trip as seen by the response interpreter.
///
/// The body is already fully read; classification happens on the status code
/// first and only then decodes the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a single HTTP round-trip.
pub trait HttpExchange: Send + Sync {
    fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug)]
pub struct ReqwestExchange {
    inner: Client,
}

impl ReqwestExchange {
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }
}

impl Default for ReqwestExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpExchange for ReqwestExchange {
    async fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<HttpResponse> {
        let mut req = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        // Draining the body releases the connection on every exit path.
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
