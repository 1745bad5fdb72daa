use anyhow::Context;
use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::content::{Content, ContentType, Grade, Module, Topic};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server returned an error: {status}")]
    Server { status: u16 },
}

/// Blocking client for the curriculum backend.
pub struct ContentClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ContentClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn grades(&self) -> anyhow::Result<Vec<Grade>> {
        self.get_json("/api/grades")?
            .context("grades endpoint not found")
    }

    pub fn topics(&self, grade_id: &str) -> anyhow::Result<Vec<Topic>> {
        self.get_json(&format!("/api/grades/{}/topics", grade_id))?
            .context(format!("grade '{}' not found", grade_id))
    }

    pub fn modules(&self, topic_id: &str) -> anyhow::Result<Vec<Module>> {
        self.get_json(&format!("/api/topics/{}/modules", topic_id))?
            .context(format!("topic '{}' not found", topic_id))
    }

    /// `None` when the module has no content of that type.
    pub fn content(
        &self,
        module_id: &str,
        content_type: ContentType,
    ) -> anyhow::Result<Option<Content>> {
        self.get_json(&format!(
            "/api/modules/{}/content/{}",
            module_id, content_type
        ))
        .context(format!(
            "failed to fetch {} for module '{}'",
            content_type, module_id
        ))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = match self.agent.get(url.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Ok(None),
            Err(e) => {
                return Err(match e {
                    ureq::Error::Status(code, _) => RequestError::Server { status: code },
                    other => RequestError::Http(other),
                })
                .context("Failed to send request")
            }
        };

        let body = response
            .into_json::<T>()
            .map_err(RequestError::Io)
            .context("Failed to read response body")?;
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    // answers a single request with a canned response, returns the base url
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        format!("http://{}", addr)
    }

    fn client(base_url: String) -> ContentClient {
        ContentClient::new(&Config {
            backend_url: base_url,
            timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn missing_content_is_none() {
        let url = serve_once("HTTP/1.1 404 Not Found", r#"{"detail": "Content not found"}"#);
        let content = client(url).content("m", ContentType::Quiz).unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn server_error_keeps_status() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}");
        let err = client(url).content("m", ContentType::Quiz).unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Server returned an error: 500"), "{}", message);
        assert!(message.contains("failed to fetch quiz for module 'm'"), "{}", message);
    }

    #[test]
    fn decodes_content() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"module_id": "m", "content_type": "theory", "title": "Teoría",
                "theory_content": "- uno"}"#,
        );
        let content = client(url)
            .content("m", ContentType::Theory)
            .unwrap()
            .unwrap();
        assert_eq!(content.theory_content.as_deref(), Some("- uno"));
    }
}
