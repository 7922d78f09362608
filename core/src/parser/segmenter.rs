//! # Block Segmenter
//!
//! Splits a fabric dump into device blocks in a single forward pass.
//!
//! A block opens on a line containing `vendid=` and closes on the first line
//! that is exactly empty. Lines outside a block (the dump's `#` header, stray
//! text between blocks) are skipped. A block still open at end of file is
//! emitted as the last element, so a dump without a trailing blank line keeps
//! its final device.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const BLOCK_MARKER: &str = "vendid=";

/// The trimmed lines of one device, marker line first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBlock {
    /// 1-based line number of the marker in the source file.
    pub start_line: usize,
    pub lines: Vec<String>,
}

impl DeviceBlock {
    fn open(start_line: usize, marker: &str) -> Self {
        Self {
            start_line,
            lines: vec![marker.trim().to_string()],
        }
    }
}

pub struct BlockSegmenter<R> {
    reader: R,
    buffer: String,
    line_number: usize,
    current: Option<DeviceBlock>,
    exhausted: bool,
}

impl BlockSegmenter<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> BlockSegmenter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
            current: None,
            exhausted: false,
        }
    }
}

impl<R: BufRead> Iterator for BlockSegmenter<R> {
    type Item = io::Result<DeviceBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.exhausted = true;
                    return self.current.take().map(Ok);
                }
                Ok(_) => self.line_number += 1,
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }

            let line = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);
            let line = line.strip_suffix('\r').unwrap_or(line);

            if self.current.is_none() {
                if line.contains(BLOCK_MARKER) {
                    self.current = Some(DeviceBlock::open(self.line_number, line));
                }
                continue;
            }

            if line.is_empty() {
                return self.current.take().map(Ok);
            }

            if let Some(block) = self.current.as_mut() {
                block.lines.push(line.trim().to_string());
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
