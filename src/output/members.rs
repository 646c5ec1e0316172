//! Member output formatter

use comfy_table::{presets::NOTHING, Table};
use console::Color;
use std::collections::{BTreeMap, BTreeSet};

use crate::bigip::{Member, MemberState};

/// Serverside statistics of one member, prefix already stripped
#[derive(Debug, Clone)]
pub struct MemberStatsRow {
    pub member: String,
    pub values: BTreeMap<String, u64>,
}

/// `name [state]` line for `member list`
pub fn member_line(member: &Member) -> String {
    format!("{} [{}]", member.name, member.state)
}

/// Colour of a member line: green when up, red when down
pub fn state_color(state: &MemberState) -> Option<Color> {
    match state {
        MemberState::Up => Some(Color::Green),
        MemberState::Down => Some(Color::Red),
        _ => None,
    }
}

/// Styled `member list` lines in enumeration order
pub fn render_members(members: &[Member]) -> Vec<String> {
    members
        .iter()
        .map(|member| {
            let line = member_line(member);
            match state_color(&member.state) {
                Some(color) => console::style(line).fg(color).to_string(),
                None => line,
            }
        })
        .collect()
}

/// Table keyed by member name with one column per metric
pub fn render_member_stats(rows: &[MemberStatsRow]) -> String {
    let columns: BTreeSet<&String> = rows.iter().flat_map(|r| r.values.keys()).collect();

    let mut table = Table::new();
    table.load_preset(NOTHING);

    let mut header = vec!["member".to_string()];
    header.extend(columns.iter().map(|c| c.to_string()));
    table.set_header(header);

    for row in rows {
        let mut cells = vec![row.member.clone()];
        cells.extend(columns.iter().map(|c| {
            row.values
                .get(*c)
                .map(|v| v.to_string())
                .unwrap_or_default()
        }));
        table.add_row(cells);
    }

    table.to_string()
}
