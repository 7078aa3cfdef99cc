// mvnfetch-net/tests/common/mod.rs
//! A tiny HTTP/1.1 server on 127.0.0.1 that serves an in-memory repository
//! tree and records every request it sees.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use md5::{Digest, Md5};
use mvnfetch_net::{Fetcher, Repository};

const REPO_PREFIX: &str = "/repo/";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct Route {
    status: u16,
    body: Vec<u8>,
}

pub struct FixtureServer {
    addr: SocketAddr,
    routes: Arc<Mutex<HashMap<String, Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FixtureServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        let routes: Arc<Mutex<HashMap<String, Route>>> = Arc::default();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();

        let thread_routes = Arc::clone(&routes);
        let thread_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle(stream, &thread_routes, &thread_requests);
            }
        });

        Self {
            addr,
            routes,
            requests,
        }
    }

    /// Repository base URL, without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, REPO_PREFIX.trim_end_matches('/'))
    }

    /// Full URL of a repository-relative path.
    pub fn url_of(&self, rel: &str) -> String {
        format!("http://{}{}{}", self.addr, REPO_PREFIX, rel)
    }

    pub fn serve(&self, rel: &str, body: impl Into<Vec<u8>>) {
        self.routes.lock().unwrap().insert(
            rel.to_string(),
            Route {
                status: 200,
                body: body.into(),
            },
        );
    }

    pub fn serve_status(&self, rel: &str, status: u16) {
        self.routes.lock().unwrap().insert(
            rel.to_string(),
            Route {
                status,
                body: Vec::new(),
            },
        );
    }

    /// Serves `body` at `rel` together with its `rel.md5`.
    pub fn publish(&self, rel: &str, body: &[u8]) {
        self.serve(rel, body.to_vec());
        self.serve(&format!("{rel}.md5"), md5_hex(body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, rel: &str) -> usize {
        let wanted = format!("{REPO_PREFIX}{rel}");
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == wanted)
            .count()
    }
}

/// A fetcher whose client ignores proxy settings from the environment.
pub fn fetcher(repository: Repository) -> Fetcher {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client");
    Fetcher::with_client(client, repository)
}

pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

fn handle(
    mut stream: TcpStream,
    routes: &Mutex<HashMap<String, Route>>,
    requests: &Mutex<Vec<RecordedRequest>>,
) {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }
    let head = String::from_utf8_lossy(&raw).to_string();
    let mut lines = head.lines();
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let authorization = lines
        .take_while(|l| !l.is_empty())
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("authorization")
                .then(|| value.trim().to_string())
        });
    requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        authorization,
    });

    let route = path
        .strip_prefix(REPO_PREFIX)
        .and_then(|rel| routes.lock().unwrap().get(rel).cloned())
        .unwrap_or(Route {
            status: 404,
            body: b"not found".to_vec(),
        });
    let reason = match route.status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        route.status,
        reason,
        route.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}
