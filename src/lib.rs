//! staticd - Static File HTTP Server
//!
//! Core library for serving a local directory tree over HTTP/1.1.

pub mod config;
pub mod http;
pub mod server;
