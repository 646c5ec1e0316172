//! Common utilities for output formatters

use serde::Serialize;

use crate::error::{BigipError, Result};

/// Render any serializable value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(BigipError::from)
}

/// Render any serializable value as YAML
pub fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .map_err(|e| BigipError::Config(format!("Failed to serialize YAML: {}", e)))
}

/// Print pre-rendered lines to stdout
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json_pretty() {
        let out = render_json(&json!({ "name": "web-pool" })).unwrap();
        assert!(out.contains("\"name\": \"web-pool\""));
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_render_yaml_has_no_trailing_newline() {
        let out = render_yaml(&json!({ "current": "prod" })).unwrap();
        assert_eq!(out, "current: prod");
    }
}
