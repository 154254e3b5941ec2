//! Plain-text results table.

use std::fmt::Write as _;

use crate::types::ScoredCandidate;

/// Shown instead of a table when nothing survived filtering and scoring.
pub const NO_MATCHES_NOTICE: &str = "No matching hotels found for the selected city or search term.";

const HEADERS: [&str; 5] = ["Hotel", "Noise", "Air Quality", "Rating", "Score"];

/// Renders candidates as a fixed-width table, one row per hotel in the
/// given order. An empty slice renders [`NO_MATCHES_NOTICE`].
#[must_use]
pub fn render_table(candidates: &[ScoredCandidate]) -> String {
    if candidates.is_empty() {
        return format!("{NO_MATCHES_NOTICE}\n");
    }

    let rows: Vec<[String; 5]> = candidates
        .iter()
        .map(|c| {
            [
                c.hotel.name.clone(),
                c.noise_label.to_string(),
                c.air_quality_label.to_string(),
                c.display_rating().to_string(),
                format!("{:.2}", c.score),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Text columns are left-aligned; Rating and Score are right-aligned.
fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }
        let cell = cell.as_ref();
        if idx >= 3 {
            let _ = write!(line, "{cell:>width$}");
        } else {
            let _ = write!(line, "{cell:<width$}");
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
