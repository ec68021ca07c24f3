//! tiny_http server adapter
//!
//! Reads the request body, hands it to the router and converts the reply
//! into a tiny_http response. Requests are served one at a time.

use std::io::{Cursor, Read as _};

use anyhow::anyhow;
use log::{info, warn};
use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::api::ApiError;
use crate::core::QuestionRepository;
use crate::core::ports::DocumentStore;

use super::router::{HttpReply, error_reply, route};

/// Bind a server to an address such as `127.0.0.1:3000`
pub fn bind(addr: &str) -> anyhow::Result<Server> {
    Server::http(addr).map_err(|e| anyhow!("Failed to start server on {addr}: {e}"))
}

/// Bind and serve until the process is stopped
pub fn serve<S: DocumentStore>(addr: &str, repo: &QuestionRepository<S>) -> anyhow::Result<()> {
    let server = bind(addr)?;
    info!("Listening on {addr}, document at {}", repo.store().location());
    serve_on(&server, repo);
    Ok(())
}

/// Serve requests from an already bound server until it is unblocked
pub fn serve_on<S: DocumentStore>(server: &Server, repo: &QuestionRepository<S>) {
    for mut request in server.incoming_requests() {
        let response = handle_request(repo, &mut request);
        if let Err(e) = request.respond(response) {
            warn!("Failed to send response: {e}");
        }
    }
}

/// Handle one request and build its response
pub fn handle_request<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    request: &mut Request,
) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = match read_body(request) {
        Ok(body) => route(repo, &method, &url, &body),
        Err(e) => error_reply(&e),
    };

    if reply.status >= 500 {
        warn!("{method} {url} -> {}", reply.status);
    } else {
        info!("{method} {url} -> {}", reply.status);
    }
    to_response(reply)
}

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

fn to_response(reply: HttpReply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
