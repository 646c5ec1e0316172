//! Output formatting module
//!
//! Renderers return strings so handlers can gather all output before
//! printing anything.

mod common;
mod members;
mod pools;

pub use common::{print_lines, render_json, render_yaml};
pub use members::{
    member_line, render_member_stats, render_members, state_color, MemberStatsRow,
};
pub use pools::{render_pool_stats, render_pools};
