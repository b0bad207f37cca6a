//! Formatting utilities used for CLI and export outputs.

/// `390` → `"06h 30m"`.
pub fn mins2readable(mins: u32) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_durations() {
        assert_eq!(mins2readable(390), "06h 30m");
        assert_eq!(mins2readable(0), "00h 00m");
        assert_eq!(mins2readable(1440), "24h 00m");
    }
}
