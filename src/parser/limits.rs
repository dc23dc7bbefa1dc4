use crate::error::{CheckerError, CheckerErrorKind, CheckerResult};
use crate::parser::JsonSource;

/// Check the source size before attempting to read or parse the JSON.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size(source: &JsonSource, max_file_size: u64) -> CheckerResult<()> {
    if let Some(size) = source.estimated_size() {
        if size > max_file_size {
            return Err(CheckerError::checker(CheckerErrorKind::FileTooLarge {
                size,
                limit: max_file_size,
            }));
        }
    }

    Ok(())
}

/// Parse a size string such as `100MB`, `512KB`, `1GB` or a plain byte count
pub fn parse_size(limit: &str) -> Result<u64, String> {
    let limit = limit.trim();
    let upper = limit.to_ascii_uppercase();
    let (number, multiplier) = if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024.0)
    } else if let Some(n) = upper.strip_suffix('B') {
        (n, 1.0)
    } else {
        (upper.as_str(), 1.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("Invalid size '{}'. Use e.g. 512KB, 10MB or 1GB", limit))?;
    if !value.is_finite() {
        return Err(format!("Size must be a finite number: '{}'", limit));
    }
    if value < 0.0 {
        return Err(format!("Size must not be negative: '{}'", limit));
    }

    let bytes = value * multiplier;
    if bytes.fract() != 0.0 {
        return Err(format!("Size must be a whole number of bytes: '{}'", limit));
    }
    if bytes >= u64::MAX as f64 {
        return Err(format!("Size is too large: '{}'", limit));
    }

    Ok(bytes as u64)
}
