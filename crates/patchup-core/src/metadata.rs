//! Sanity check for the downloaded server metadata file.
//!
//! The first line of the metadata payload is the patch directory URL; the
//! rest of the file is opaque here and handed to the metadata parser
//! downstream. Validation is a gate, not a transformer: the full decoded
//! text is returned unchanged on success.

use thiserror::Error;
use url::Url;

/// Error raised when the server metadata fails the sanity check.
///
/// Non-recoverable locally: the caller should abort the update attempt and
/// treat the server data as corrupt.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The first line of the metadata file is not an absolute http(s) URL.
    #[error("first line of server metadata is not an absolute http(s) URL: {line:?}")]
    MalformedPatchDirectory {
        /// The rejected candidate line, for diagnostics.
        line: String,
    },
}

/// Checks that the received metadata buffer starts with a usable patch
/// directory URL and returns the full decoded text if it does.
///
/// The buffer is decoded as-is (lossy where not valid UTF-8; the server
/// produces ASCII-compatible text and no transcoding is attempted), trimmed
/// as a whole, and split on `\n`. Only the first segment is inspected: it
/// must parse as an absolute URL with scheme `http` or `https`. Anything
/// else, including an empty buffer or an `ftp` URL, fails with
/// [`MetadataError::MalformedPatchDirectory`].
pub fn sanity_check_patch_directory(data: &[u8]) -> Result<String, MetadataError> {
    let text = String::from_utf8_lossy(data).into_owned();
    // CRLF payloads leave a trailing \r on the candidate after splitting.
    let candidate = text
        .trim()
        .split('\n')
        .next()
        .unwrap_or("")
        .trim_end_matches('\r');

    match Url::parse(candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(text),
        _ => {
            tracing::warn!(candidate, "metadata sanity check failed");
            Err(MetadataError::MalformedPatchDirectory {
                line: candidate.to_string(),
            })
        }
    }
}
