//! Parsing of Kubernetes resource quantity strings
//!
//! CPU quantities normalize to millicores, memory quantities to bytes.

use thiserror::Error;

/// Quantity parse failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Invalid CPU quantity: {0}")]
    Cpu(String),

    #[error("Invalid memory quantity: {0}")]
    Memory(String),
}

/// Parse a CPU quantity into millicores.
///
/// A trailing `m` marks millicores (`"500m"` -> 500); anything else is a
/// core count, decimal allowed (`"2"` -> 2000, `"0.5"` -> 500).
pub fn parse_cpu(token: &str) -> Result<u64, QuantityError> {
    let token = token.trim();

    if let Some(millis) = token.strip_suffix('m') {
        return millis
            .parse::<u64>()
            .map_err(|_| QuantityError::Cpu(token.to_string()));
    }

    let cores: f64 = token
        .parse()
        .map_err(|_| QuantityError::Cpu(token.to_string()))?;
    if cores < 0.0 || !cores.is_finite() {
        return Err(QuantityError::Cpu(token.to_string()));
    }

    Ok((cores * 1000.0) as u64)
}

/// Parse a memory quantity into bytes.
///
/// Accepts binary suffixes (`Ki`, `Mi`, `Gi`, `Ti`, `Pi`, `Ei`), decimal
/// suffixes (`k`, `M`, `G`, `T`, `P`, `E`) and plain byte counts. The
/// numeric part may carry a decimal point (`"1.5Gi"`).
pub fn parse_mem(token: &str) -> Result<u64, QuantityError> {
    let token = token.trim();

    let (number, multiplier) = split_suffix(token);
    let value: f64 = number
        .parse()
        .map_err(|_| QuantityError::Memory(token.to_string()))?;
    if value < 0.0 || !value.is_finite() {
        return Err(QuantityError::Memory(token.to_string()));
    }

    Ok((value * multiplier as f64) as u64)
}

fn split_suffix(token: &str) -> (&str, u64) {
    const BINARY: [(&str, u64); 6] = [
        ("Ki", 1 << 10),
        ("Mi", 1 << 20),
        ("Gi", 1 << 30),
        ("Ti", 1 << 40),
        ("Pi", 1 << 50),
        ("Ei", 1 << 60),
    ];
    const DECIMAL: [(&str, u64); 6] = [
        ("k", 1_000),
        ("M", 1_000_000),
        ("G", 1_000_000_000),
        ("T", 1_000_000_000_000),
        ("P", 1_000_000_000_000_000),
        ("E", 1_000_000_000_000_000_000),
    ];

    // Two-character binary suffixes must win over their one-character
    // decimal prefixes ("Mi" vs "M").
    for (suffix, multiplier) in BINARY {
        if let Some(number) = token.strip_suffix(suffix) {
            return (number, multiplier);
        }
    }
    for (suffix, multiplier) in DECIMAL {
        if let Some(number) = token.strip_suffix(suffix) {
            return (number, multiplier);
        }
    }

    (token, 1)
}
