// src/render/graphviz.rs
//! Layout by an external Graphviz program (`neato`, `dot`, ...).

use std::io::Write;
use std::process::{Command, Stdio};

use super::layout::{Layout, Point, Positions};
use crate::error::{HistoryError, Result};
use crate::graph::AbstractGraph;

/// Graphviz reports inches; positions are returned in points.
const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone)]
pub struct GraphvizLayout {
    program: String,
}

impl Default for GraphvizLayout {
    fn default() -> Self {
        Self::new("neato")
    }
}

impl GraphvizLayout {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Layout for GraphvizLayout {
    fn positions(&self, graph: &AbstractGraph) -> Result<Positions> {
        if graph.is_empty() {
            return Ok(Positions::new());
        }

        let fail = |msg: String| HistoryError::Layout(format!("{}: {msg}", self.program));

        let mut child = Command::new(&self.program)
            .arg("-Tplain")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| fail(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(to_dot(graph).as_bytes())
                .map_err(|e| fail(e.to_string()))?;
        }

        let output = child.wait_with_output().map_err(|e| fail(e.to_string()))?;
        if !output.status.success() {
            return Err(fail(String::from_utf8_lossy(&output.stderr).trim().to_string()));
        }

        parse_plain(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Renders the graph in DOT syntax.
#[must_use]
pub fn to_dot(graph: &AbstractGraph) -> String {
    let mut out = String::from("graph history {\n");
    for label in graph.labels() {
        out.push_str(&format!("  {};\n", quote(label)));
    }
    for (a, b) in graph.edges() {
        out.push_str(&format!("  {} -- {};\n", quote(a), quote(b)));
    }
    out.push_str("}\n");
    out
}

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Reads `node` lines out of `-Tplain` output.
fn parse_plain(text: &str) -> Result<Positions> {
    let mut out = Positions::new();
    for line in text.lines() {
        let fields = split_fields(line);
        if fields.first().map(String::as_str) != Some("node") {
            continue;
        }
        let (Some(name), Some(x), Some(y)) = (fields.get(1), fields.get(2), fields.get(3)) else {
            return Err(HistoryError::Layout(format!("short node line: {line}")));
        };
        let parse = |v: &str| {
            v.parse::<f64>()
                .map_err(|_| HistoryError::Layout(format!("bad coordinate `{v}` in: {line}")))
        };
        out.insert(
            name,
            Point::new(parse(x.as_str())? * POINTS_PER_INCH, parse(y.as_str())? * POINTS_PER_INCH),
        );
    }
    Ok(out)
}

/// Splits on whitespace, keeping double-quoted fields (with `\"` escapes) whole.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        let mut field = String::new();
        if c == '"' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            field.push(escaped);
                        }
                    }
                    '"' => break,
                    _ => field.push(c),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                field.push(c);
                chars.next();
            }
        }
        fields.push(field);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_quotes_labels() {
        let mut g = AbstractGraph::new();
        g.add_edge("Alan Turing", "Say \"Hi\"");
        let dot = to_dot(&g);
        assert!(dot.contains("\"Alan Turing\" -- \"Say \\\"Hi\\\"\";"));
    }

    #[test]
    fn parses_plain_output() {
        let text = "graph 1 2.5 3\n\
                    node \"Alan Turing\" 1.5 2 0.75 0.5 \"Alan Turing\" solid ellipse black lightgrey\n\
                    node Shannon 0.5 0.25 0.75 0.5 Shannon solid ellipse black lightgrey\n\
                    edge \"Alan Turing\" Shannon 4 1 1 1 1 1 1 1 1 solid black\n\
                    stop\n";
        let pos = parse_plain(text).unwrap();
        assert_eq!(pos.len(), 2);
        assert_eq!(pos.get("Alan Turing"), Some(Point::new(108.0, 144.0)));
        assert_eq!(pos.get("Shannon"), Some(Point::new(36.0, 18.0)));
    }

    #[test]
    fn bad_coordinate_is_a_layout_error() {
        let err = parse_plain("node A x 1\n").unwrap_err();
        assert!(matches!(err, HistoryError::Layout(_)));
    }

    #[test]
    fn missing_program_is_a_layout_error() {
        let mut g = AbstractGraph::new();
        g.add_edge("A", "B");
        let err = GraphvizLayout::new("no-such-graphviz-binary")
            .positions(&g)
            .unwrap_err();
        assert!(matches!(err, HistoryError::Layout(_)));
    }
}
