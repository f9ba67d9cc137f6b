use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AppError;

/// Read a whole JSON file. A missing file yields `T::default()`.
pub fn read_or_default<T>(path: &Path) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(AppError::Storage {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with `value`, pretty-printed with a 4-space indent.
///
/// Not atomic: the file is truncated and rewritten in place.
pub fn write_pretty<T>(path: &Path, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).map_err(|source| AppError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, buf).map_err(|source| AppError::Storage {
        path: path.to_path_buf(),
        source,
    })
}
