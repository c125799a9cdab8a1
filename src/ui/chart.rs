// Step-after waveform chart drawn with box characters.
//
// Every scheme gets its own three-row lane (+1 / 0 / -1). Levels hold
// until the next sample column, where a transition bends the trace with
// corner glyphs. A shared time axis under the lanes labels each column.

use crate::encoding::{SamplePoint, Scheme, SignalLevel};
use crate::utils::consts::{COLUMN_WIDTH, GUTTER_WIDTH, LANE_GAP};

const GUTTER: [&str; 3] = ["+1 ", " 0 ", "-1 "];

fn row_of(level: SignalLevel) -> usize {
    match level {
        SignalLevel::High => 0,
        SignalLevel::Zero => 1,
        SignalLevel::Low => 2,
    }
}

/// Draws one scheme as three rows of box characters, top row = +1.
fn render_lane(points: &[SamplePoint], scheme: Scheme) -> [String; 3] {
    let width = points.len().saturating_sub(1) * COLUMN_WIDTH + 1;
    let mut rows: [Vec<char>; 3] = std::array::from_fn(|_| vec![' '; width]);

    if let Some(first) = points.first() {
        let mut prev = row_of(first.level(scheme));
        rows[prev][0] = '─';
        for (k, point) in points.iter().enumerate().skip(1) {
            let col = k * COLUMN_WIDTH;
            let row = row_of(point.level(scheme));
            for c in (col - COLUMN_WIDTH + 1)..col {
                rows[prev][c] = '─';
            }
            if row == prev {
                rows[prev][col] = '─';
            } else {
                if row > prev {
                    rows[prev][col] = '┐';
                    rows[row][col] = '└';
                } else {
                    rows[prev][col] = '┘';
                    rows[row][col] = '┌';
                }
                for r in (prev.min(row) + 1)..prev.max(row) {
                    rows[r][col] = '│';
                }
                prev = row;
            }
        }
    }

    rows.map(|cells| {
        let row: String = cells.into_iter().collect();
        row.trim_end().to_string()
    })
}

fn axis_row(points: &[SamplePoint]) -> String {
    let mut cells: Vec<char> = Vec::new();
    for (k, point) in points.iter().enumerate() {
        let col = k * COLUMN_WIDTH;
        let label = point.position.axis_label();
        if cells.len() < col + label.len() {
            cells.resize(col + label.len(), ' ');
        }
        for (i, ch) in label.chars().enumerate() {
            cells[col + i] = ch;
        }
    }
    cells.into_iter().collect()
}

/// Renders the selected schemes over one encoding run, axis last.
pub fn render(points: &[SamplePoint], schemes: &[Scheme]) -> String {
    let mut out = String::new();
    for &scheme in schemes {
        out.push_str(scheme.name());
        out.push('\n');
        let lane = render_lane(points, scheme);
        for (gutter, row) in GUTTER.iter().zip(lane) {
            let line = format!("{}{}", gutter, row);
            out.push_str(line.trim_end());
            out.push('\n');
        }
        for _ in 0..LANE_GAP {
            out.push('\n');
        }
    }
    out.push_str(&" ".repeat(GUTTER_WIDTH));
    out.push_str(&axis_row(points));
    out.push('\n');
    out
}
