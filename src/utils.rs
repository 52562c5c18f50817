use std::{
    net::{TcpStream, ToSocketAddrs},
    time::Duration,
};

use crate::config::API_URL;

/// Checks if something is already listening on `address`
///
/// # Arguments
/// * `address` host and port, e.g. `localhost:5900`
pub fn is_server_running(address: &str) -> Result<bool, Box<dyn std::error::Error>> {
    for addr in address.to_socket_addrs()? {
        if TcpStream::connect_timeout(&addr, Duration::from_millis(200)).is_ok() {
            return Ok(true);
        }
    }

    Ok(false)
}

pub fn make_api_url(resource: &str) -> String {
    format!("http://{}/api/{}", API_URL.as_str(), resource)
}
