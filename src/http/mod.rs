//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 surface: one GET request per connection,
//! answered and closed. There is no keep-alive, no pipelining, and no
//! method besides GET.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving the three phases below
//! - **`parser`**: Parses the request line off the connection's byte stream
//! - **`request`**: HTTP request representation (method and path)
//! - **`resource`**: Maps request paths to opened files, resolving directories to `index.html`
//! - **`response`**: HTTP response representation and its three constructors
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`error`**: The error taxonomy shared by all of the above
//!
//! # Request lifecycle
//!
//! Each client connection passes through three strictly sequential phases:
//!
//! ```text
//!        ┌─────────────┐
//!        │    Parse    │ ← Read and validate the request line,
//!        └──────┬──────┘   discard headers up to the blank line
//!               │ invalid → 400, close
//!               ▼
//!        ┌──────────────────┐
//!        │  Resolve + Build │ ← Open the file under the root
//!        └──────┬───────────┘   (directory → index.html)
//!               │ missing → 404 response instead
//!               ▼
//!        ┌──────────────────┐
//!        │      Write       │ ← Status line, headers, body;
//!        └──────┬───────────┘   Content-Length must match exactly
//!               │
//!               └─ Close (every response is `Connection: close`)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use staticd::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("0.0.0.0:80").await?;
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, peer, "./static".into());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;
