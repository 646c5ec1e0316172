//! Pool output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::render_json;
use crate::bigip::{Pool, StatsBag};
use crate::error::Result;

/// One line per pool: the name, or the raw JSON representation when verbose
pub fn render_pools(pools: &[Pool], verbose: bool) -> Result<Vec<String>> {
    if verbose {
        pools.iter().map(render_json).collect()
    } else {
        Ok(pools.iter().map(|p| p.name.clone()).collect())
    }
}

/// Two-column table of every pool statistic
pub fn render_pool_stats(stats: &StatsBag) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["STAT", "VALUE"]);

    for (name, value) in stats.iter() {
        table.add_row(vec![name.clone(), value.to_string()]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pools() -> Vec<Pool> {
        serde_json::from_value(json!([
            { "name": "web-pool", "partition": "Common", "loadBalancingMode": "round-robin" },
            { "name": "api-pool", "partition": "Common" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_render_pool_names() {
        let lines = render_pools(&pools(), false).unwrap();
        assert_eq!(lines, vec!["web-pool", "api-pool"]);
    }

    #[test]
    fn test_render_pools_verbose_is_raw_json() {
        let lines = render_pools(&pools(), true).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"loadBalancingMode\": \"round-robin\""));
        let parsed: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(parsed["name"], "api-pool");
    }

    #[test]
    fn test_render_pool_stats_table() {
        let stats = StatsBag::from_response(&json!({
            "entries": {
                "curSessions": { "value": 5 },
                "status.availabilityState": { "description": "available" }
            }
        }));
        let table = render_pool_stats(&stats);
        assert!(table.contains("STAT"));
        assert!(table.contains("curSessions"));
        assert!(table.contains("available"));
    }
}
