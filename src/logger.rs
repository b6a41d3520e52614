// Logging helpers
// Everything goes to stderr: stdout carries exactly one line (the bound
// port number) that the parent test process reads as a handshake.

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    eprintln!("======================================");
    eprintln!("Fixture server started successfully");
    eprintln!("Listening on: http://{addr}");
    eprintln!("Fixture directory: {}", config.fixtures.dir);
    eprintln!("Search variant: {:?}", config.fixtures.search_variant);
    eprintln!("Using Tokio runtime for concurrency");
    eprintln!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    eprintln!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    eprintln!("[Request] {method} {uri} {version:?}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        eprintln!("[Headers] Count: {count}");
    }
}

pub fn log_response(size: usize) {
    eprintln!("[Response] Sent 200 OK ({size} bytes)\n");
}

pub fn log_request_failed(message: &str, status: u16) {
    eprintln!("[Response] {status} - {message}\n");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
