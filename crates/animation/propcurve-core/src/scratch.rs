//! Reusable path buffer for the writer.
//!
//! Holds the accumulated dotted path plus a stack recording how much each open level
//! appended, so leaving a level truncates instead of re-joining.

use crate::config::WriterConfig;

#[derive(Debug, Default)]
pub struct PathScratch {
    path: String,
    /// Length of `path` before each open level; `None` for unnamed levels.
    marks: Vec<Option<usize>>,
}

impl PathScratch {
    pub fn new(cfg: &WriterConfig) -> Self {
        Self {
            path: String::with_capacity(cfg.path_capacity),
            marks: Vec::with_capacity(cfg.depth_capacity),
        }
    }

    /// Reset for a new walk; keeps allocations.
    #[inline]
    pub fn begin(&mut self) {
        self.path.clear();
        self.marks.clear();
    }

    pub fn push(&mut self, name: Option<&str>) {
        let Some(name) = name else {
            self.marks.push(None);
            return;
        };
        self.marks.push(Some(self.path.len()));
        if !self.path.is_empty() {
            self.path.push('.');
        }
        self.path.push_str(name);
    }

    pub fn pop(&mut self) {
        if let Some(Some(len)) = self.marks.pop() {
            self.path.truncate(len);
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.marks.len()
    }
}
