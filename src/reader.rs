use std::path::{Path, PathBuf};

use memchr::memchr_iter;
use thiserror::Error;

use crate::script::{ScriptCommand, ScriptError, parse_line};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: line {line} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf, line: usize },

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Read and parse a whole event script
pub async fn read_script<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptCommand>, ReadError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_script(path, &bytes)
}

/// Parse script bytes, one command per line. Line numbers start at 1.
pub fn parse_script(path: &Path, bytes: &[u8]) -> Result<Vec<ScriptCommand>, ReadError> {
    let mut commands = Vec::new();
    let mut start = 0;
    let mut line_number = 0;

    let ends = memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len()));
    for end in ends {
        line_number += 1;

        let line = std::str::from_utf8(&bytes[start..end]).map_err(|_| ReadError::Encoding {
            path: path.to_path_buf(),
            line: line_number,
        })?;
        if let Some(command) = parse_line(line_number, line)? {
            commands.push(command);
        }
        start = end + 1;
    }

    Ok(commands)
}
