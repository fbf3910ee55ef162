//! Media payloads: files sent with messages and images fetched from the server.
//!
//! Outgoing media is described by [`MediaFile`], either pointing at a URL or
//! carrying base64 data inline. A [`MediaSource::Path`] is turned into inline
//! data by reading the file and guessing its MIME type from the extension.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::response::Payload;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";
pub const DEFAULT_VOICE_MIME: &str = "audio/ogg; codecs=opus";
pub const DEFAULT_FILE_MIME: &str = "application/octet-stream";

/// File attached to a message, in the shape the WAHA API expects
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64-encoded content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl MediaFile {
    /// File the server downloads from `url`
    pub fn from_url<U: Into<String>, M: Into<String>>(url: U, mimetype: M) -> Self {
        MediaFile {
            mimetype: Some(mimetype.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// File sent inline as base64 data
    pub fn from_base64<D: Into<String>, M: Into<String>, F: Into<String>>(
        data: D,
        mimetype: M,
        filename: F,
    ) -> Self {
        MediaFile {
            mimetype: Some(mimetype.into()),
            filename: Some(filename.into()),
            data: Some(data.into()),
            ..Default::default()
        }
    }

    /// File sent inline, encoding `bytes` as base64
    pub fn from_bytes<M: Into<String>, F: Into<String>>(bytes: &[u8], mimetype: M, filename: F) -> Self {
        Self::from_base64(STANDARD.encode(bytes), mimetype, filename)
    }

    /// Name shown to the recipient
    pub fn with_filename<F: Into<String>>(mut self, filename: F) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Read a local file. The MIME type is guessed from the extension,
    /// falling back to `default_mime`.
    pub fn from_path<P: AsRef<Path>>(path: P, default_mime: &str) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;

        let mimetype = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(default_mime)
            .to_string();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        debug!("Loaded {} ({} bytes, {})", path.display(), bytes.len(), mimetype);
        Ok(Self::from_bytes(&bytes, mimetype, filename))
    }
}

/// Where the content of an outgoing media message comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A URL or inline data, sent as-is
    File(MediaFile),
    /// A local file, read and base64-encoded before sending
    Path(PathBuf),
}

impl MediaSource {
    pub(crate) fn resolve(self, default_mime: &str) -> Result<MediaFile, Error> {
        match self {
            MediaSource::File(file) => Ok(file),
            MediaSource::Path(path) => MediaFile::from_path(&path, default_mime),
        }
    }
}

impl From<MediaFile> for MediaSource {
    fn from(file: MediaFile) -> Self {
        MediaSource::File(file)
    }
}

impl From<PathBuf> for MediaSource {
    fn from(path: PathBuf) -> Self {
        MediaSource::Path(path)
    }
}

impl From<&Path> for MediaSource {
    fn from(path: &Path) -> Self {
        MediaSource::Path(path.to_path_buf())
    }
}

/// How binary-capable endpoints should answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Raw image bytes
    #[default]
    Binary,
    /// JSON wrapping base64 data
    Json,
}

impl ResponseMode {
    /// Value for the `Accept` header
    pub fn accept(&self) -> &'static str {
        match self {
            ResponseMode::Binary => "image/*",
            ResponseMode::Json => "application/json",
        }
    }
}

impl Payload {
    /// Media content of a binary-capable response, whichever mode it came in.
    ///
    /// Raw bodies are returned unchanged; JSON bodies must carry base64 `data`.
    pub fn into_media_bytes(self) -> Result<Vec<u8>, Error> {
        match self {
            Payload::Bytes(bytes) => Ok(bytes),
            Payload::Json(value) => {
                let data = value
                    .get("data")
                    .and_then(|d| d.as_str())
                    .ok_or_else(|| Error::client("JSON media response has no 'data' field"))?;
                trace!("Decoding {} bytes of base64 media", data.len());
                STANDARD
                    .decode(data)
                    .map_err(|e| Error::client(format!("Invalid base64 media data: {}", e)))
            }
            Payload::Text(_) => Err(Error::client("Expected media, got a text response")),
        }
    }
}
