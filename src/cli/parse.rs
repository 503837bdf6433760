use duograph_core::error::DuographError;
use duograph_core::format::OutputFormat;
use duograph_core::graph::Weight;

use super::directed::DirectedEdgeSpec;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_vertex(spec: &str, field: &str) -> Result<usize, DuographError> {
    field
        .trim()
        .parse::<usize>()
        .map_err(|_| DuographError::invalid_edge(spec, format!("'{}' is not a vertex index", field)))
}

/// Weights below 1 are passed through as 0 so the graph ignores the edge.
fn parse_weight(spec: &str, field: &str) -> Result<Weight, DuographError> {
    let raw = field
        .trim()
        .parse::<i64>()
        .map_err(|_| DuographError::invalid_edge(spec, format!("'{}' is not a weight", field)))?;
    if raw < 1 {
        return Ok(0);
    }
    Weight::try_from(raw)
        .map_err(|_| DuographError::invalid_edge(spec, format!("weight {} is too large", raw)))
}

fn directed_edge(s: &str) -> Result<DirectedEdgeSpec, DuographError> {
    let fields: Vec<&str> = s.split(':').collect();
    match fields.as_slice() {
        [src, dst] => Ok(DirectedEdgeSpec {
            src: parse_vertex(s, src)?,
            dst: parse_vertex(s, dst)?,
            weight: None,
        }),
        [src, dst, weight] => Ok(DirectedEdgeSpec {
            src: parse_vertex(s, src)?,
            dst: parse_vertex(s, dst)?,
            weight: Some(parse_weight(s, weight)?),
        }),
        _ => Err(DuographError::invalid_edge(
            s,
            "expected SRC:DST or SRC:DST:WEIGHT",
        )),
    }
}

/// Parse a directed edge: `SRC:DST` or `SRC:DST:WEIGHT`
pub fn parse_directed_edge(s: &str) -> std::result::Result<DirectedEdgeSpec, String> {
    directed_edge(s).map_err(|e| e.to_string())
}

fn directed_endpoints(s: &str) -> Result<(usize, usize), DuographError> {
    match s.split_once(':') {
        Some((src, dst)) => Ok((parse_vertex(s, src)?, parse_vertex(s, dst)?)),
        None => Err(DuographError::invalid_edge(s, "expected SRC:DST")),
    }
}

/// Parse a directed edge to remove: `SRC:DST`
pub fn parse_directed_endpoints(s: &str) -> std::result::Result<(usize, usize), String> {
    directed_endpoints(s).map_err(|e| e.to_string())
}

fn undirected_edge(s: &str) -> Result<(String, String), DuographError> {
    if let Some((u, v)) = s.split_once('-') {
        let (u, v) = (u.trim(), v.trim());
        if u.is_empty() || v.is_empty() {
            return Err(DuographError::invalid_edge(s, "both endpoints must be named"));
        }
        return Ok((u.to_string(), v.to_string()));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(u), Some(v), None) => Ok((u.to_string(), v.to_string())),
        _ => Err(DuographError::invalid_edge(
            s,
            "expected U-V, or two single-character labels such as AB",
        )),
    }
}

/// Parse an undirected edge: `U-V`, or `AB` for single-character labels
pub fn parse_undirected_edge(s: &str) -> std::result::Result<(String, String), String> {
    undirected_edge(s).map_err(|e| e.to_string())
}
