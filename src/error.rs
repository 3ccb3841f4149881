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

use hickory_proto::error::ProtoError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// The first five variants classify responses the transport delivered;
/// `Http`, `Proto` and `Io` pass transport failures through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// A required construction input was missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    /// The server answered with a status code no classification rule maps.
    #[error("invalid HTTP response (status {status})")]
    InvalidResponse {
        /// The unmapped status code, kept for diagnostics.
        status: u16,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("service not found")]
    NotFound,

    /// The resource already exists (HTTP 422).
    ///
    /// Carries the server-supplied message verbatim when the error envelope
    /// held one, otherwise a generic fallback.
    #[error("{0}")]
    Conflict(String),

    /// A response body could not be decoded where one was required.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP transport failure (connection, TLS, timeout).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// DNS message encoding, decoding or exchange failure.
    #[error(transparent)]
    Proto(#[from] ProtoError),

    /// Socket-level failure during a DNS exchange.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A URL could not be parsed.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
