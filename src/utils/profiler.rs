//! A hierarchical wall-clock profiler.
//!
//! Sections are opened with [`begin`] and closed with [`end`]. A section opened while another
//! one is open becomes its child, and reopening a section under the same parent accumulates
//! into the same entry.
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use colshape3d::utils::profiler;
//!
//! profiler::start();
//! profiler::begin("bounds").unwrap();
//! profiler::begin("aabb").unwrap();
//! profiler::end("aabb").unwrap();
//! profiler::end("bounds").unwrap();
//! profiler::stop().unwrap();
//!
//! let mut report = Vec::new();
//! profiler::status(&mut report).unwrap();
//! # }
//! ```

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use core::time::Duration;
use std::time::Instant;

/// Errors reported by the profiler when sections are not properly nested.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ProfilerError {
    /// A section was opened or closed while the profiler was stopped.
    #[error("the profiler is not running")]
    NotRunning,
    /// `end` was called with a name that is not the innermost open section.
    #[error("cannot end section `{found}`: the innermost open section is `{expected}`")]
    Mismatch {
        /// The innermost open section.
        expected: String,
        /// The name given to `end`.
        found: String,
    },
    /// `end` was called while no section was open.
    #[error("cannot end section `{0}`: no section is open")]
    NoOpenSection(String),
    /// `stop` was called while some sections were still open.
    #[error("{0} section(s) still open")]
    Unclosed(usize),
}

/// The accumulated statistics of one profiled section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionStats {
    /// The name given to [`Profiler::begin`].
    pub name: String,
    /// The nesting depth, zero for top-level sections.
    pub depth: usize,
    /// How many times the section was closed.
    pub calls: u64,
    /// The total time spent inside the section.
    pub total: Duration,
}

#[derive(Clone, Debug)]
struct Node {
    stats: SectionStats,
    parent: Option<usize>,
}

/// The state of a hierarchical profiler.
///
/// Most users go through the process-wide instance with the free functions of this module.
#[derive(Debug, Default)]
pub struct Profiler {
    running: bool,
    nodes: Vec<Node>,
    open: Vec<(usize, Instant)>,
}

impl Profiler {
    /// Creates a stopped profiler with no recorded sections.
    pub const fn new() -> Self {
        Self {
            running: false,
            nodes: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Is this profiler currently recording?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Discards every recorded section and starts recording.
    pub fn start(&mut self) {
        if self.running {
            log::trace!("profiler restarted, dropping {} section(s)", self.nodes.len());
        } else {
            log::trace!("profiler started");
        }

        self.nodes.clear();
        self.open.clear();
        self.running = true;
    }

    /// Stops recording.
    ///
    /// Fails if some sections are still open. The profiler is stopped in both cases and
    /// the open sections are discarded.
    pub fn stop(&mut self) -> Result<(), ProfilerError> {
        if !self.running {
            return Err(ProfilerError::NotRunning);
        }

        self.running = false;
        let unclosed = self.open.len();
        self.open.clear();
        log::trace!("profiler stopped");

        if unclosed != 0 {
            Err(ProfilerError::Unclosed(unclosed))
        } else {
            Ok(())
        }
    }

    /// Opens a section nested inside the innermost open one.
    pub fn begin(&mut self, name: &str) -> Result<(), ProfilerError> {
        if !self.running {
            return Err(ProfilerError::NotRunning);
        }

        let parent = self.open.last().map(|(id, _)| *id);
        let existing = self
            .nodes
            .iter()
            .position(|node| node.parent == parent && node.stats.name == name);

        let id = match existing {
            Some(id) => id,
            None => {
                let depth = parent.map_or(0, |p| self.nodes[p].stats.depth + 1);
                self.nodes.push(Node {
                    stats: SectionStats {
                        name: name.to_owned(),
                        depth,
                        calls: 0,
                        total: Duration::ZERO,
                    },
                    parent,
                });
                self.nodes.len() - 1
            }
        };

        self.open.push((id, Instant::now()));
        Ok(())
    }

    /// Closes the innermost open section, which must be called `name`.
    pub fn end(&mut self, name: &str) -> Result<(), ProfilerError> {
        if !self.running {
            return Err(ProfilerError::NotRunning);
        }

        let (id, started) = match self.open.last() {
            Some(top) => *top,
            None => return Err(ProfilerError::NoOpenSection(name.to_owned())),
        };

        let stats = &mut self.nodes[id].stats;
        if stats.name != name {
            return Err(ProfilerError::Mismatch {
                expected: stats.name.clone(),
                found: name.to_owned(),
            });
        }

        let elapsed = started.elapsed();
        stats.calls += 1;
        stats.total += elapsed;
        let _ = self.open.pop();
        log::debug!("section `{}` closed after {:?}", name, elapsed);
        Ok(())
    }

    /// A snapshot of every recorded section, children listed right after their parent.
    pub fn sections(&self) -> Vec<SectionStats> {
        let mut result = Vec::with_capacity(self.nodes.len());
        self.visit(None, &mut |node| result.push(node.stats.clone()));
        result
    }

    /// Writes one line per recorded section, indented by nesting depth.
    pub fn status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Profiler {}, {} section(s):",
            if self.running { "running" } else { "stopped" },
            self.nodes.len()
        )?;

        let mut result = Ok(());
        self.visit(None, &mut |node| {
            if result.is_ok() {
                let stats = &node.stats;
                result = writeln!(
                    out,
                    "{:indent$}{}: {} call(s), {:?}",
                    "",
                    stats.name,
                    stats.calls,
                    stats.total,
                    indent = 2 * (stats.depth + 1)
                );
            }
        });
        result
    }

    // Depth-first, siblings in creation order.
    fn visit(&self, parent: Option<usize>, f: &mut impl FnMut(&Node)) {
        for (id, node) in self.nodes.iter().enumerate() {
            if node.parent == parent {
                f(node);
                self.visit(Some(id), f);
            }
        }
    }
}

static PROFILER: Mutex<Profiler> = Mutex::new(Profiler::new());

fn global() -> MutexGuard<'static, Profiler> {
    // The state stays consistent even if a holder panicked.
    PROFILER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears and starts the process-wide profiler.
pub fn start() {
    global().start()
}

/// Stops the process-wide profiler. See [`Profiler::stop`].
pub fn stop() -> Result<(), ProfilerError> {
    global().stop()
}

/// Opens a section of the process-wide profiler. See [`Profiler::begin`].
pub fn begin(name: &str) -> Result<(), ProfilerError> {
    global().begin(name)
}

/// Closes a section of the process-wide profiler. See [`Profiler::end`].
pub fn end(name: &str) -> Result<(), ProfilerError> {
    global().end(name)
}

/// Writes the report of the process-wide profiler. See [`Profiler::status`].
pub fn status<W: Write>(out: &mut W) -> io::Result<()> {
    global().status(out)
}

/// A snapshot of the sections of the process-wide profiler.
pub fn sections() -> Vec<SectionStats> {
    global().sections()
}
