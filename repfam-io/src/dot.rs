use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::EdgeRef;

use crate::error::Result;

///
/// Render a directed overlap graph in DOT format.
///
/// Nodes are labelled with their family id and every edge carries its
/// overlap ratio as a `weight` attribute.
///
pub fn render_dot(graph: &DiGraphMap<usize, f64>) -> String {
    format!(
        "{:?}",
        Dot::with_attr_getters(
            graph,
            &[Config::EdgeNoLabel],
            &|_, e| format!("weight = {}", e.weight()),
            &|_, _| String::new(),
        )
    )
}

///
/// Write a directed overlap graph to disk as a DOT file.
///
/// # Arguments
/// - path: the path to the file to dump to
/// - graph: the scored edges as a directed graph
pub fn write_dot<T: AsRef<Path>>(path: T, graph: &DiGraphMap<usize, f64>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_dot(graph).as_bytes())?;
    writer.flush()?;
    Ok(())
}
