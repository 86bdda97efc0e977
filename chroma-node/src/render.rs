//! Plain-text rendering of palettes and tally snapshots for the terminal.

use std::fmt::Write;

use chroma_common::Palette;
use chroma_tally::TallySnapshot;

const BAR_WIDTH: usize = 20;

pub fn render_palette(palette: &Palette) -> String {
    let mut out = String::new();
    for option in palette {
        let _ = writeln!(out, "{:<8} {}", option.name, option.color_value);
    }
    out
}

pub fn render_snapshot(snapshot: &TallySnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results ({} total votes)", snapshot.total_votes);

    if snapshot.total_votes == 0 {
        out.push_str("No votes yet! Be the first to vote for your favorite color.\n");
        return out;
    }

    if let Some(leader) = &snapshot.leader {
        let _ = writeln!(out, "🏆 Current winner: {} ({} votes)", leader.name, leader.votes);
    }

    for row in &snapshot.options {
        let filled = usize::from(row.percentage) * BAR_WIDTH / 100;
        let _ = writeln!(
            out,
            "{:<8} {}{} {} votes ({}%)",
            row.name,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            row.votes,
            row.percentage
        );
    }
    out
}
