//! Minimal `multipart/form-data` encoder for single-file uploads.

use std::io::Read;
use uuid::Uuid;

/// Form field the attachment endpoints read the file from.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Reads `reader` to the end and wraps it as the single `file` part.
    pub fn single_file<R: Read>(file_name: &str, mut reader: R) -> std::io::Result<Self> {
        let boundary = format!("backlog-{}", Uuid::new_v4().simple());

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        let mut bytes = Vec::with_capacity(content.len() + 256);
        bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        bytes.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                FILE_FIELD,
                escape_quotes(file_name)
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        bytes.extend_from_slice(&content);
        bytes.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Ok(Self { boundary, bytes })
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn escape_quotes(file_name: &str) -> String {
    file_name.replace('\\', "\\\\").replace('"', "\\\"")
}
