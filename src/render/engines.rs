// src/render/engines.rs
//! Built-in layout engines.

use std::collections::HashMap;
use std::f64::consts::TAU;

use super::layout::{rescale, Layout, Point, Positions};
use crate::error::Result;
use crate::graph::AbstractGraph;

/// Nodes evenly spaced on the unit circle, in graph order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularLayout;

impl Layout for CircularLayout {
    fn positions(&self, graph: &AbstractGraph) -> Result<Positions> {
        let labels: Vec<&str> = graph.labels().collect();
        let mut out = Positions::new();
        for (label, p) in labels.iter().zip(ring(labels.len(), 1.0)) {
            out.insert(label, p);
        }
        Ok(out)
    }
}

/// One shell holding every node in graph order, rotated half a turn from
/// [`CircularLayout`]. A lone node sits at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellLayout;

impl Layout for ShellLayout {
    fn positions(&self, graph: &AbstractGraph) -> Result<Positions> {
        let labels: Vec<&str> = graph.labels().collect();
        let mut out = Positions::new();
        for (label, p) in labels.iter().zip(ring(labels.len(), 1.0)) {
            out.insert(label, Point::new(-p.x, -p.y));
        }
        Ok(out)
    }
}

/// Force-directed (Fruchterman-Reingold) placement from a fixed seed, so
/// the same graph always gets the same picture.
#[derive(Debug, Clone, Copy)]
pub struct SpringLayout {
    pub iterations: usize,
    pub seed: u64,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 42,
        }
    }
}

impl Layout for SpringLayout {
    #[allow(clippy::cast_precision_loss)]
    fn positions(&self, graph: &AbstractGraph) -> Result<Positions> {
        let labels: Vec<&str> = graph.labels().collect();
        let n = labels.len();
        if n < 2 {
            return CircularLayout.positions(graph);
        }

        let edges = edge_indices(graph, &labels);
        let mut rng = Lcg(self.seed);
        let mut pos: Vec<Point> = (0..n).map(|_| Point::new(rng.next_f64(), rng.next_f64())).collect();

        let k = (1.0 / n as f64).sqrt();
        let mut temperature = 0.1;
        let cooling = temperature / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut disp = vec![Point::new(0.0, 0.0); n];

            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let (dx, dy, dist) = delta(pos[i], pos[j]);
                    let force = k * k / dist;
                    disp[i].x += dx / dist * force;
                    disp[i].y += dy / dist * force;
                }
            }

            for &(a, b) in &edges {
                if a == b {
                    continue;
                }
                let (dx, dy, dist) = delta(pos[a], pos[b]);
                let force = dist * dist / k;
                disp[a].x -= dx / dist * force;
                disp[a].y -= dy / dist * force;
                disp[b].x += dx / dist * force;
                disp[b].y += dy / dist * force;
            }

            for (p, d) in pos.iter_mut().zip(&disp) {
                let len = d.x.hypot(d.y).max(0.01);
                let step = len.min(temperature);
                p.x += d.x / len * step;
                p.y += d.y / len * step;
            }
            temperature -= cooling;
        }

        rescale(&mut pos);
        Ok(collect(&labels, pos))
    }
}

/// Coordinates from the second and third smallest eigenvectors of the
/// graph Laplacian.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralLayout;

impl Layout for SpectralLayout {
    fn positions(&self, graph: &AbstractGraph) -> Result<Positions> {
        let labels: Vec<&str> = graph.labels().collect();
        let n = labels.len();
        if n < 3 {
            return CircularLayout.positions(graph);
        }

        let mut laplacian = vec![vec![0.0; n]; n];
        for (a, b) in edge_indices(graph, &labels) {
            if a == b {
                continue;
            }
            laplacian[a][b] -= 1.0;
            laplacian[b][a] -= 1.0;
            laplacian[a][a] += 1.0;
            laplacian[b][b] += 1.0;
        }

        let (values, vectors) = jacobi_eigen(laplacian);
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

        let (cx, cy) = (order[1], order[2]);
        let mut pos: Vec<Point> = (0..n)
            .map(|row| Point::new(vectors[row][cx], vectors[row][cy]))
            .collect();
        rescale(&mut pos);
        Ok(collect(&labels, pos))
    }
}

fn ring(count: usize, radius: f64) -> Vec<Point> {
    match count {
        0 => Vec::new(),
        1 => vec![Point::new(0.0, 0.0)],
        _ => (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let theta = TAU * i as f64 / count as f64;
                Point::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect(),
    }
}

fn edge_indices(graph: &AbstractGraph, labels: &[&str]) -> Vec<(usize, usize)> {
    let index: HashMap<&str, usize> = labels.iter().enumerate().map(|(i, l)| (*l, i)).collect();
    graph
        .edges()
        .filter_map(|(a, b)| Some((*index.get(a)?, *index.get(b)?)))
        .collect()
}

fn collect(labels: &[&str], points: Vec<Point>) -> Positions {
    let mut out = Positions::new();
    for (label, p) in labels.iter().zip(points) {
        out.insert(label, p);
    }
    out
}

fn delta(a: Point, b: Point) -> (f64, f64, f64) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx, dy, dx.hypot(dy).max(0.01))
}

/// Small deterministic generator for initial spring positions.
struct Lcg(u64);

impl Lcg {
    #[allow(clippy::cast_precision_loss)]
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Cyclic Jacobi eigen-decomposition of a symmetric matrix.
/// Returns eigenvalues and a matrix whose columns are the eigenvectors.
fn jacobi_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for _ in 0..100 {
        let off: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off < 1e-18 {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[p][q].abs() < 1e-12 {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                let t = sign / (theta.abs() + theta.mul_add(theta, 1.0).sqrt());
                let c = 1.0 / t.mul_add(t, 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
                for k in 0..n {
                    let (pk, qk) = (a[p][k], a[q][k]);
                    a[p][k] = c * pk - s * qk;
                    a[q][k] = s * pk + c * qk;
                }
                for row in v.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
            }
        }
    }

    let values = (0..n).map(|i| a[i][i]).collect();
    (values, v)
}
