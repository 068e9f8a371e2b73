//! Mock compiler service for E2E testing
//!
//! A `tiny_http` server on an ephemeral port answering `POST /compile` with a
//! scripted response. Every request's `code` field is recorded.

use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Header, Response, Server};

type Responder = dyn Fn(&str) -> (u16, String) + Send + Sync;

pub struct MockCompiler {
    server: Arc<Server>,
    url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl MockCompiler {
    /// Start a server answering each request with `respond(code)`
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind mock compiler"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock compiler listens on TCP");
        let url = format!("http://{}/compile", addr);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Responder> = Arc::new(respond);

        let handle = {
            let server = server.clone();
            let requests = requests.clone();
            thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let code = serde_json::from_str::<serde_json::Value>(&body)
                        .ok()
                        .and_then(|v| v["code"].as_str().map(str::to_string))
                        .unwrap_or_default();
                    requests.lock().unwrap().push(code.clone());

                    let (status, payload) = respond(&code);
                    let header =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap();
                    let response = Response::from_string(payload)
                        .with_status_code(status)
                        .with_header(header);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            url,
            requests,
            handle: Some(handle),
        }
    }

    /// Answers every request with a successful translation of `cpp`
    pub fn translating(cpp: &str) -> Self {
        let body = serde_json::json!({ "success": true, "cpp_code": cpp }).to_string();
        Self::start(move |_| (200, body.clone()))
    }

    /// Answers every request with a compiler rejection
    pub fn rejecting(message: &str) -> Self {
        let body = serde_json::json!({ "success": false, "error": message }).to_string();
        Self::start(move |_| (200, body.clone()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Source texts received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockCompiler {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
