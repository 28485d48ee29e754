use log::{debug, info};
use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{PriceError, Result};

/// Query parameters sent with every request.
pub fn query_params(config: &Config) -> [(&'static str, &str); 3] {
    [
        ("out", "xml"),
        ("code", config.report_code.as_str()),
        ("area", config.area_code.as_str()),
    ]
}

/// Fetch the raw XML body of the recent regional average price report.
pub fn fetch_prices(config: &Config) -> Result<Vec<u8>> {
    info!("fetching {} (area {})", config.endpoint, config.area_code);

    let client = Client::new();
    let response = client
        .get(&config.endpoint)
        .query(&query_params(config))
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(PriceError::Status(status));
    }

    let body = response.bytes()?;
    debug!("received {} bytes", body.len());
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer one request with `status_line` and hand back the request line.
    fn serve_once(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }
            let mut stream = stream;
            write!(
                stream,
                "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            )
            .unwrap();
            request_line
        });
        (format!("http://{}/api/areaAvgRecentPrice.do", addr), handle)
    }

    #[test]
    fn server_error_status_is_a_network_error() {
        let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error");
        let config = Config {
            endpoint,
            ..Config::default()
        };

        let err = fetch_prices(&config).unwrap_err();
        assert!(matches!(err, PriceError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert!(err.is_network_error());

        let request_line = server.join().unwrap();
        assert!(
            request_line.starts_with("GET /api/areaAvgRecentPrice.do?out=xml&code=F250713595&area=05 "),
            "unexpected request: {}",
            request_line
        );
    }

    #[test]
    fn query_carries_fixed_parameters() {
        let config = Config::default();
        assert_eq!(
            query_params(&config),
            [("out", "xml"), ("code", "F250713595"), ("area", "05")]
        );
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let config = Config {
            endpoint: "http://127.0.0.1:1/api/areaAvgRecentPrice.do".to_string(),
            ..Config::default()
        };
        let err = fetch_prices(&config).unwrap_err();
        assert!(err.is_network_error());
        assert!(!err.is_parse_error());
    }
}
