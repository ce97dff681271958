//! Line-by-line graph construction.

use std::io::BufRead;

use crate::config::LoaderConfig;
use crate::error::{GraphError, GraphResult};
use crate::model::Graph;

use super::header::{clean, parse_header};
use super::line::apply_line;

/// Builds a graph from lines fed one at a time.
///
/// The first non-blank line is the header. Line numbers are 1-based and count
/// every line fed, blank ones included, so errors point at the file line.
#[derive(Debug, Default)]
pub struct GraphLoader {
    config: LoaderConfig,
    graph: Option<Graph>,
    line: usize,
}

impl GraphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            graph: None,
            line: 0,
        }
    }

    /// Number of lines fed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Graph built so far, if the header has been seen.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Process one raw line.
    ///
    /// # Errors
    /// Any parse error, wrapped in `GraphError::Line` with the line number
    /// and cleaned content.
    pub fn feed(&mut self, raw: &str) -> GraphResult<()> {
        self.line += 1;
        let number = self.line;
        let line = clean(raw);

        if line.is_empty() {
            if self.config.skip_blank_lines {
                return Ok(());
            }
            let err = if self.graph.is_none() {
                GraphError::EmptyInput
            } else {
                GraphError::Malformed("line is empty".to_string())
            };
            return Err(err.at_line(number, line));
        }

        if let Some(graph) = self.graph.as_mut() {
            return apply_line(graph, line).map_err(|e| e.at_line(number, line));
        }

        self.graph = Some(parse_header(line).map_err(|e| e.at_line(number, line))?);
        Ok(())
    }

    /// Finish loading.
    ///
    /// # Errors
    /// * `GraphError::EmptyInput` - no header was ever seen
    pub fn finish(self) -> GraphResult<Graph> {
        let graph = self.graph.ok_or(GraphError::EmptyInput)?;
        tracing::debug!(
            lines = self.line,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Feed every line and finish, stopping at the first error.
    pub fn load_lines<I, S>(mut self, lines: I) -> GraphResult<Graph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref())?;
        }
        self.finish()
    }

    /// Read lines from `reader` until EOF, stopping at the first error.
    pub fn load_reader<R: BufRead>(mut self, reader: R) -> GraphResult<Graph> {
        for line in reader.lines() {
            let line = line.map_err(|e| GraphError::from(e).at_line(self.line + 1, ""))?;
            self.feed(&line)?;
        }
        self.finish()
    }
}

/// Build a graph from lines with default settings.
pub fn load_lines<I, S>(lines: I) -> GraphResult<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GraphLoader::new().load_lines(lines)
}

/// Build a graph from text with default settings.
pub fn load_str(text: &str) -> GraphResult<Graph> {
    load_lines(text.lines())
}

/// Build a graph from a reader with default settings.
pub fn load_reader<R: BufRead>(reader: R) -> GraphResult<Graph> {
    GraphLoader::new().load_reader(reader)
}
