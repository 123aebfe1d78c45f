//! Formatting of solved instances into the legacy output file format.

use crate::point::Point;
use crate::result::Assignment;

/// Render a solved assignment into the output file format: one line per
/// well listing its assigned houses, followed by a `Total Cost:` line.
///
/// The sign convention matches the legacy tool's output writer
/// byte-for-byte: the printed total is the *negative* of the distance,
/// reflecting the solver's internal maximisation rather than the
/// minimisation the caller asked for.
#[must_use]
pub fn write_output(wells: &[Point], houses: &[Point], assignment: &Assignment) -> String {
    let mut out = String::new();
    for (w, house_indices) in assignment.pairs.iter().enumerate() {
        let well = &wells[w];
        out.push_str(&format!("W{}({:.2},{:.2}) -> ", w + 1, well.x, well.y));
        let rendered: Vec<String> = house_indices
            .iter()
            .map(|&h| {
                let house = &houses[h];
                format!("H{}({:.2},{:.2})", h + 1, house.x, house.y)
            })
            .collect();
        out.push_str(&rendered.join(","));
        out.push('\n');
    }
    out.push_str(&format!("Total Cost: {:.2}\n", -assignment.total_distance));
    out
}
