//! JSON output.

use crate::models::ShuffleResult;
use std::error::Error;

/// Pretty-printed JSON of the whole result.
pub fn render_json(result: &ShuffleResult) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, ProcessingStats};

    #[test]
    fn test_render_json_fields() {
        let result = ShuffleResult {
            columns: vec![Column::new(1, vec!["8.8.8.8".to_string()])],
            stats: ProcessingStats {
                total_input: 2,
                valid_unique: 1,
                spam_removed: 1,
                total_groups: 1,
            },
        };
        let json = render_json(&result).expect("Error rendering JSON");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
        assert_eq!(value["columns"][0]["id"], 1);
        assert_eq!(value["columns"][0]["ips"][0], "8.8.8.8");
        assert_eq!(value["columns"][0]["total_ips"], 1);
        assert_eq!(value["stats"]["total_input"], 2);
        assert_eq!(value["stats"]["spam_removed"], 1);
    }
}
