//! Display formatting for normalized quantities

/// Format millicores for display, in cores.
///
/// Below 10 cores the fractional part is kept (six digits); from 10 cores
/// up the value is truncated to whole cores.
pub fn cpu_pretty(millicores: u64) -> String {
    if millicores < 10_000 {
        format!("{:.6}", millicores as f64 / 1000.0)
    } else {
        format!("{}", millicores / 1000)
    }
}

/// Format a byte count with binary prefixes.
pub fn mem_pretty(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;
    const TIB: u64 = GIB * 1024;
    const PIB: u64 = TIB * 1024;

    if bytes >= PIB {
        format!("{:.2} PiB", bytes as f64 / PIB as f64)
    } else if bytes >= TIB {
        format!("{:.2} TiB", bytes as f64 / TIB as f64)
    } else if bytes >= GIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_pretty_fractional_below_ten_cores() {
        assert_eq!(cpu_pretty(5000), "5.000000");
        assert_eq!(cpu_pretty(500), "0.500000");
        assert_eq!(cpu_pretty(8000), "8.000000");
        assert_eq!(cpu_pretty(0), "0.000000");
    }

    #[test]
    fn test_cpu_pretty_integer_from_ten_cores() {
        assert_eq!(cpu_pretty(10_000), "10");
        assert_eq!(cpu_pretty(10_500), "10");
        assert_eq!(cpu_pretty(64_000), "64");
    }

    #[test]
    fn test_mem_pretty_binary_prefixes() {
        assert_eq!(mem_pretty(1024 * 1024 * 1024), "1.00 GiB");
        assert_eq!(mem_pretty(8 * 1024 * 1024 * 1024), "8.00 GiB");
        assert_eq!(mem_pretty(1536 * 1024), "1.50 MiB");
        assert_eq!(mem_pretty(512), "512 B");
    }
}
