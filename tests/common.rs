// Common test utilities shared by the integration suites

use std::io::{Read, Write};
use std::net::{IpAddr, Ipv4Addr, TcpStream};
use std::thread;
use std::time::Duration;

use authlisten::application::config::models::ListenerConfig;
use authlisten::application::server::redirect_listener::{RedirectListener, RunOutcome};
use authlisten::common::error::ListenerError;

/// Create a test configuration for the given port
pub fn test_config(port: u16) -> ListenerConfig {
    ListenerConfig {
        bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port,
        accept_timeout_secs: None,
    }
}

/// Run a listener in a background thread and hand back its outcome
pub fn start_listener(
    config: ListenerConfig,
) -> thread::JoinHandle<Result<RunOutcome, ListenerError>> {
    thread::spawn(move || RedirectListener::new(config).run())
}

/// Connect to the listener, retrying while it binds in the background
pub fn connect_with_retry(port: u16) -> TcpStream {
    for _ in 0..100 {
        if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)) {
            return stream;
        }
        thread::sleep(Duration::from_millis(20));
    }
    panic!("listener on port {} never became reachable", port);
}

/// Send a raw request and read the full response
#[allow(dead_code)] // Used in listener_tests.rs
pub fn send_request(port: u16, request: &str) -> String {
    let mut stream = connect_with_retry(port);

    stream.write_all(request.as_bytes()).unwrap();
    stream.flush().unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}
