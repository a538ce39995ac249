//! DIMACS graph format: the input `Graph` model and its line-oriented
//! ASCII parser.
//!
//! Recognised lines: `c ...` (comment, ignored), `p edge N M` / `p col N M`
//! (problem line, exactly once, defines the vertex count), `e a b` (an
//! edge, 1-indexed). Anything else — an out-of-range vertex, a self-loop,
//! a missing problem line, or a line matching none of the above — is a
//! [`GraphError::Parse`] rather than a panic.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space1};
use nom::combinator::{eof, map_res};
use nom::sequence::{separated_pair, terminated};
use nom::IResult;

use crate::error::GraphError;

/// An undirected, simple graph: `size` vertices (0-indexed internally) and,
/// for each vertex, the unordered set of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    edges: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Builds an edgeless graph over `size` vertices.
    pub fn new(size: usize) -> Self {
        Self { size, edges: vec![BTreeSet::new(); size] }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Neighbours of `v` (0-indexed).
    pub fn neighbors(&self, v: usize) -> &BTreeSet<usize> {
        &self.edges[v]
    }

    /// Adds the undirected edge `{u, v}`. Idempotent.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.edges[u].insert(v);
        self.edges[v].insert(u);
    }

    /// Total number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Parses a DIMACS file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GraphError::Parse {
            line: 0,
            reason: format!("unable to read {}: {e}", path.display()),
        })?;
        Self::parse(&text)
    }

    /// Parses a DIMACS document already held in memory.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut size: Option<usize> = None;
        let mut graph = Graph::new(0);

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            if let Ok((_, ())) = parse_comment(line) {
                continue;
            }

            if let Ok((_, (n, _m))) = parse_problem(line) {
                if size.is_some() {
                    return Err(GraphError::Parse { line: line_no, reason: "multiple 'p' lines encountered".into() });
                }
                size = Some(n);
                graph = Graph::new(n);
                continue;
            }

            if let Ok((_, (a, b))) = parse_edge(line) {
                let n = size.ok_or_else(|| GraphError::Parse {
                    line: line_no,
                    reason: "edge given before a 'p' line".into(),
                })?;
                if a == 0 || b == 0 || a > n || b > n {
                    return Err(GraphError::Parse { line: line_no, reason: format!("edge index out of bounds in '{line}'") });
                }
                if a == b {
                    return Err(GraphError::Parse { line: line_no, reason: format!("'{line}' contains a loop") });
                }
                graph.add_edge(a - 1, b - 1);
                continue;
            }

            return Err(GraphError::Parse { line: line_no, reason: format!("cannot parse line '{line}'") });
        }

        Ok(graph)
    }
}

fn parse_comment(line: &str) -> IResult<&str, ()> {
    let (rest, _) = tag("c")(line)?;
    if rest.is_empty() {
        return Ok((rest, ()));
    }
    let (rest, _) = space1(rest)?;
    Ok(("", ()))
}

fn parse_problem(line: &str) -> IResult<&str, (usize, usize)> {
    let (rest, _) = terminated(tag("p"), space1)(line)?;
    let (rest, _) = terminated(alt((tag("edge"), tag("col"))), space1)(rest)?;
    let (rest, (n, m)) = separated_pair(parse_usize, space1, parse_usize)(rest)?;
    let (rest, _) = eof(rest)?;
    Ok((rest, (n, m)))
}

fn parse_edge(line: &str) -> IResult<&str, (usize, usize)> {
    let (rest, _) = terminated(tag("e"), space1)(line)?;
    let (rest, (a, b)) = separated_pair(parse_usize, space1, parse_usize)(rest)?;
    let (rest, _) = eof(rest)?;
    Ok((rest, (a, b)))
}

fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(input)
}
