//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Rendering contract for command results.
///
/// Implementors provide the human form; the JSON form and the stdout
/// dispatch come for free. The `--json` flag selects between them.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Print this result to stdout in the selected mode.
    fn print(&self, json_mode: bool) {
        if json_mode {
            println!(
                "{}",
                serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
            );
        } else {
            println!("{}", self.to_human());
        }
    }
}

/// Truncate a string to at most `max_len` bytes, appending "..." if
/// truncated. Cuts on a char boundary so multibyte text cannot panic.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn test_truncate_long_string_bounded() {
        let long = "x".repeat(100);
        let cut = truncate(&long, 20);
        assert_eq!(cut.len(), 20);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Each snowman is 3 bytes; a naive byte slice would panic.
        let snowmen = "☃".repeat(50);
        let cut = truncate(&snowmen, 20);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 20);
    }

    #[derive(serde::Serialize)]
    struct Sample {
        value: u32,
    }

    impl CommandOutput for Sample {
        fn to_human(&self) -> String {
            format!("value is {}", self.value)
        }
    }

    #[test]
    fn test_default_to_json_serializes_fields() {
        let sample = Sample { value: 7 };
        assert_eq!(sample.to_json()["value"], 7);
        assert_eq!(sample.to_human(), "value is 7");
    }
}
