// src/render/bars.rs
//! Horizontal bar chart of a degree ranking, as plain text.

pub const TITLE: &str = "Connections per cognitive scientist";

/// One row per entry, in the given order; the longest bar is `width` cells.
#[must_use]
pub fn render_bars(ranking: &[(String, usize)], width: usize) -> String {
    let mut out = format!("{TITLE}\n");
    let label_width = ranking.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = ranking.iter().map(|(_, d)| *d).max().unwrap_or(0);

    for (label, degree) in ranking {
        let cells = if max == 0 { 0 } else { degree * width / max };
        out.push_str(&format!(
            "{label:>label_width$} | {} {degree}\n",
            "█".repeat(cells)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_bar_fills_width() {
        let ranking = vec![("Ann".to_string(), 1), ("Bartholomew".to_string(), 4)];
        let chart = render_bars(&ranking, 8);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], "        Ann | ██ 1");
        assert_eq!(lines[2], "Bartholomew | ████████ 4");
    }

    #[test]
    fn empty_ranking_is_just_title() {
        assert_eq!(render_bars(&[], 10), format!("{TITLE}\n"));
    }
}
