use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::io::{BufReader, BufWriter};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::http::error::HttpError;
use crate::http::parser;
use crate::http::resource;
use crate::http::response::Response;
use crate::http::writer;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    root: PathBuf,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, root: PathBuf) -> Self {
        Self { stream, peer, root }
    }

    /// Handles the connection's single request: parse, resolve, write.
    ///
    /// Malformed requests and failed lookups are answered with 400/404 and
    /// are not errors of this function; whatever it does return could not
    /// be turned into a response and is logged by the caller. The stream
    /// (and any file handle picked up along the way) closes when this
    /// returns, on every path.
    pub async fn run(mut self) -> Result<(), HttpError> {
        let (rd, wr) = self.stream.split();
        let mut reader = BufReader::new(rd);
        let mut writer = BufWriter::new(wr);

        let request = match parser::read_request(&mut reader).await {
            Ok(request) => request,
            Err(e @ HttpError::MalformedRequest(_)) => {
                warn!("400 from {}: {}", self.peer, e);
                if let Err(e) = writer::write_response(Response::bad_request(), &mut writer).await {
                    warn!("cannot send 400 to {}: {}", self.peer, e);
                }
                return Ok(());
            }
            // stream failure: no response can reach the client
            Err(e) => return Err(e),
        };

        let response = match resource::resolve(&self.root, &request.path).await {
            Ok(resource) => Response::from_resource(resource),
            Err(e @ HttpError::NotFound { .. }) => {
                warn!("404 from {}: {}", self.peer, e);
                Response::not_found()
            }
            Err(e) => return Err(e),
        };

        writer::write_response(response, &mut writer).await?;

        debug!("connection from {} closed", self.peer);
        Ok(())
    }
}
