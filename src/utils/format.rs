/// Format a money amount for display
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format an optional string, returning a default if None or empty
pub fn format_optional(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Format a backend timestamp (naive isoformat) as YYYY-MM-DD
pub fn format_fecha(fecha: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(fecha) {
        dt.format("%Y-%m-%d").to_string()
    } else if fecha.len() >= 10 {
        fecha.chars().take(10).collect()
    } else {
        fecha.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25000.0), "$25000.00");
        assert_eq!(format_money(12.5), "$12.50");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Camiseta", 12), "Camiseta");
        assert_eq!(truncate("Camiseta blanca manga larga", 12), "Camiseta ...");
        assert_eq!(truncate("ab", 2), "ab");
    }

    #[test]
    fn test_format_fecha() {
        // Backend ships naive isoformat timestamps
        assert_eq!(format_fecha("2025-01-15T14:30:00"), "2025-01-15");
        assert_eq!(format_fecha("2025-01-15T14:30:00+00:00"), "2025-01-15");
        assert_eq!(format_fecha("n/a"), "n/a");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(&Some("ropa".to_string()), "-"), "ropa");
        assert_eq!(format_optional(&Some(String::new()), "-"), "-");
        assert_eq!(format_optional(&None, "-"), "-");
    }
}
