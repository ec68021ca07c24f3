//! End-to-end HTTP tests against a live tiny_http listener

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;

use responder::adapters::JsonFileStore;
use responder::core::QuestionRepository;
use responder::server;
use tiny_http::Server;

use crate::common::fixtures::{QuestionBuilder, TempDocument, answer};

/// Send one request and return `(status, body)`
fn request(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, serde_json::Value) {
    let mut stream = TcpStream::connect(addr).unwrap();
    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    )
    .unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();

    let status: u16 = raw
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    let payload = raw.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or_default();
    (status, serde_json::from_str(payload).unwrap())
}

/// Stops the serve loop even when an assertion panics
struct Unblock<'a>(&'a Server);

impl Drop for Unblock<'_> {
    fn drop(&mut self) {
        self.0.unblock();
    }
}

/// Serve `doc` on an ephemeral port while `f` runs
fn with_server(doc: &TempDocument, f: impl FnOnce(SocketAddr)) {
    let server = server::bind("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let repo = QuestionRepository::new(JsonFileStore::new(doc.path()));

    thread::scope(|s| {
        s.spawn(|| server::serve_on(&server, &repo));
        let _stop = Unblock(&server);
        f(addr);
    });
}

#[test]
fn test_http_question_lifecycle() {
    let doc = TempDocument::with_questions(&[QuestionBuilder::new("q1")
        .answer(answer("a1", "Yes"))
        .build()]);

    with_server(&doc, |addr| {
        let (status, body) = request(addr, "GET", "/", "");
        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Welcome to responder!");

        let (status, body) = request(addr, "GET", "/questions", "");
        assert_eq!(status, 200);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, body) =
            request(addr, "POST", "/questions", r#"{"author":"Io","summary":"test"}"#);
        assert_eq!(status, 201);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = request(addr, "GET", &format!("/questions/{id}"), "");
        assert_eq!(status, 200);
        assert_eq!(body["data"]["author"], "Io");
        assert_eq!(body["data"]["answers"], serde_json::json!([]));

        let (status, _) = request(
            addr,
            "POST",
            &format!("/questions/{id}/answers"),
            r#"{"author":"Mr Anderson","summary":"I do not know"}"#,
        );
        assert_eq!(status, 201);

        let (status, body) = request(addr, "GET", &format!("/questions/{id}/answers"), "");
        assert_eq!(status, 200);
        assert_eq!(body["data"][0]["summary"], "I do not know");

        let (status, body) = request(addr, "GET", "/questions/q1/answers/a1", "");
        assert_eq!(status, 200);
        assert_eq!(body["data"]["summary"], "Yes");
    });

    let stored: serde_json::Value = serde_json::from_str(&doc.contents()).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 2);
}

#[test]
fn test_http_errors() {
    let doc = TempDocument::with_questions(&[QuestionBuilder::new("q1").build()]);

    with_server(&doc, |addr| {
        let (status, body) = request(addr, "GET", "/questions/nope", "");
        assert_eq!(status, 404);
        assert_eq!(body["error"]["message"], "Question does not exist.");

        let (status, body) = request(addr, "GET", "/questions/q1/answers/ghost", "");
        assert_eq!(status, 404);
        assert_eq!(body["error"]["message"], "Answer does not exist.");

        let (status, body) = request(addr, "POST", "/questions", r#"{"author":"Io"}"#);
        assert_eq!(status, 400);
        assert_eq!(body["error"]["message"], "Author and summary are required");

        let (status, _) =
            request(addr, "POST", "/questions/ghost/answers", r#"{"author":"A","summary":"S"}"#);
        assert_eq!(status, 404);

        let (status, body) = request(addr, "GET", "/elsewhere", "");
        assert_eq!(status, 404);
        assert_eq!(body["error"]["message"], "Couldn't find a page");
    });
}
