//! Document fetcher
//!
//! Resolves the source argument into the document text: anything starting
//! with `http` is fetched with a single blocking GET and buffered, anything
//! else is read from disk. The engine never sees where the text came from.

use std::fs;

use crate::error::TextStatError;

/// Fetch the document behind `source`, a local path or an http(s) URL.
pub fn fetch(source: &str) -> Result<String, TextStatError> {
    if source.starts_with("http") {
        fetch_url(source)
    } else {
        log::debug!("reading local file {source}");
        Ok(fs::read_to_string(source)?)
    }
}

/// One GET-and-buffer round trip. Any status other than 200 is an error,
/// even other 2xx codes.
fn fetch_url(url: &str) -> Result<String, TextStatError> {
    log::debug!("fetching {url}");
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if status.as_u16() != 200 {
        return Err(TextStatError::Status(status.as_u16()));
    }
    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_local_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Hello, world!").unwrap();

        let content = fetch(file.path().to_str().unwrap()).unwrap();
        assert_eq!(content, "Hello, world!");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = fetch("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, TextStatError::Io(_)));
    }
}
