// indentree - indentation-to-tree template front end
//
// Copyright (c) 2026 indentree contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Single-pass indentation parser.
//!
//! The parser walks the input byte by byte through a three-phase
//! line automaton (Prefix / Content / Suffix) and, at each end of
//! line, resolves the finished line's parent against a stack of
//! still-open nesting levels:
//!
//! - equal width to the previous line: sibling (the previous level
//!   closes);
//! - greater width: child of the previous line;
//! - lesser width: every open level whose width is `>=` the new
//!   width closes, and the line attaches under the nearest surviving
//!   ancestor.
//!
//! The Suffix phase makes trailing-whitespace stripping a one-pass
//! decision: a run of whitespace is provisionally trailing, and is
//! folded back into the content the moment another non-whitespace
//! byte appears on the same line.

use crate::error::{CompileError, CompileResult};
use crate::options::CompileOptions;
use crate::tree::{Node, Tree};

/// Initial indent-stack capacity; growth beyond this is amortized doubling.
const STACK_INITIAL_CAPACITY: usize = 100;

/// Which part of the current line the scanner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Leading whitespace, before any content byte.
    Prefix,
    /// Line content.
    Content,
    /// A run of whitespace after content, provisionally trailing.
    Suffix,
}

/// A still-open nesting level: the node whose children are being collected.
#[derive(Debug)]
struct Frame {
    indent: usize,
    node: Node,
}

/// Reusable parser configured with [`CompileOptions`].
///
/// Each [`compile`](IndentParser::compile) call is an independent run
/// with its own state; a single parser may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct IndentParser {
    options: CompileOptions,
}

impl IndentParser {
    /// Create a parser with the given options.
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Whether trailing whitespace is stripped from content.
    pub fn strip(&self) -> bool {
        self.options.strip
    }

    /// Whether blank lines are materialized as empty nodes.
    pub fn track_empty_lines(&self) -> bool {
        self.options.track_empty_lines
    }

    /// The resolved options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a byte sequence into its indentation tree.
    ///
    /// The input is scanned as though a single newline were appended,
    /// so the final line finalizes even without a trailing newline in
    /// the source. Carriage returns are discarded wherever they occur,
    /// giving CRLF input LF semantics.
    pub fn compile(&self, source: &[u8]) -> CompileResult<Tree> {
        let max = self.options.limits.max_input_size;
        if source.len() > max {
            return Err(CompileError::InputTooLarge {
                size: source.len(),
                max,
            });
        }

        let mut run = Run::new(source, &self.options);
        for (offset, &byte) in source.iter().enumerate() {
            run.process(offset, byte)?;
        }
        run.process(source.len(), b'\n')?;
        Ok(run.finish())
    }
}

/// Compile with default options.
pub fn compile(source: &[u8]) -> CompileResult<Tree> {
    IndentParser::default().compile(source)
}

/// Compile with custom options.
pub fn compile_with_options(source: &[u8], options: CompileOptions) -> CompileResult<Tree> {
    IndentParser::new(options).compile(source)
}

/// Transient per-run state: the line automaton plus the indent stack.
struct Run<'a> {
    source: &'a [u8],
    strip: bool,
    track_empty_lines: bool,
    max_depth: usize,
    phase: Phase,
    /// Leading whitespace bytes seen on the current line.
    prefix_len: usize,
    /// Byte offset of the first content byte on the current line.
    content_start: usize,
    /// Content bytes captured so far on the current line.
    content_len: usize,
    /// Length of the pending provisionally-trailing whitespace run.
    suffix_len: usize,
    /// Indent width of the previous completed line.
    last_prefix: usize,
    /// Blank lines seen since the last non-blank line.
    pending_blanks: usize,
    /// 1-based line number, for error reporting.
    line: usize,
    stack: Vec<Frame>,
    root: Vec<Node>,
}

impl<'a> Run<'a> {
    fn new(source: &'a [u8], options: &CompileOptions) -> Self {
        Self {
            source,
            strip: options.strip,
            track_empty_lines: options.track_empty_lines,
            max_depth: options.limits.max_indent_depth,
            phase: Phase::Prefix,
            prefix_len: 0,
            content_start: 0,
            content_len: 0,
            suffix_len: 0,
            last_prefix: 0,
            pending_blanks: 0,
            line: 1,
            stack: Vec::with_capacity(STACK_INITIAL_CAPACITY),
            root: Vec::new(),
        }
    }

    /// Feed one byte through the line automaton.
    fn process(&mut self, offset: usize, byte: u8) -> CompileResult<()> {
        match byte {
            // CR never reaches the automaton; CRLF behaves as LF.
            b'\r' => {}
            b'\n' => match self.phase {
                Phase::Prefix => self.blank_line(),
                Phase::Content | Phase::Suffix => self.finalize_line()?,
            },
            b' ' | b'\t' => match self.phase {
                Phase::Prefix => self.prefix_len += 1,
                Phase::Content => {
                    if self.strip {
                        self.phase = Phase::Suffix;
                        self.suffix_len = 1;
                    } else {
                        self.content_len += 1;
                    }
                }
                Phase::Suffix => self.suffix_len += 1,
            },
            _ => match self.phase {
                Phase::Prefix => {
                    self.content_start = offset;
                    self.content_len = 1;
                    self.phase = Phase::Content;
                }
                Phase::Content => self.content_len += 1,
                Phase::Suffix => {
                    // The whitespace run turned out to be interior;
                    // fold it back into the content.
                    self.content_len += self.suffix_len + 1;
                    self.suffix_len = 0;
                    self.phase = Phase::Content;
                }
            },
        }
        Ok(())
    }

    /// End of a line that never left the Prefix phase.
    fn blank_line(&mut self) {
        if self.track_empty_lines {
            self.pending_blanks += 1;
        }
        self.reset_line();
    }

    /// End of a line with content: flush pending blank lines, resolve
    /// the parent, create the node, and open its nesting level.
    fn finalize_line(&mut self) -> CompileResult<()> {
        // Blank lines materialize at the width of the line being
        // finalized. Parent detection runs for each of them, exactly
        // as it does for the line itself, so a blank after a dedent
        // closes levels before the line attaches. Blanks never open
        // nesting levels of their own.
        for _ in 0..self.pending_blanks {
            self.resolve_parent();
            let blank = Node::new(self.prefix_len, "");
            self.open_children().push(blank);
        }
        self.pending_blanks = 0;

        self.resolve_parent();
        let start = self.content_start;
        let captured = &self.source[start..start + self.content_len];
        let node = Node::new(
            self.prefix_len,
            String::from_utf8_lossy(captured).into_owned(),
        );
        self.push_frame(node)?;
        self.reset_line();
        Ok(())
    }

    /// Pop frames until the top of the stack (or the root) is the
    /// parent for the line currently being finalized.
    fn resolve_parent(&mut self) {
        if self.stack.is_empty() {
            // Only the root is open; no comparison basis.
            return;
        }
        if self.prefix_len == self.last_prefix {
            // Sibling of the previous line: its level closes.
            self.pop_frame();
        } else if self.prefix_len < self.last_prefix {
            // Dedent: close every level at or beyond the new width.
            // The scan runs from the outermost frame, so a width equal
            // to some ancestor's replaces that ancestor at its own
            // level rather than nesting under it.
            if let Some(pos) = self
                .stack
                .iter()
                .position(|frame| frame.indent >= self.prefix_len)
            {
                while self.stack.len() > pos {
                    self.pop_frame();
                }
            }
        }
        // Greater width: the previous line stays open and becomes the
        // parent.
    }

    /// Close the innermost level, attaching its node to the level below.
    fn pop_frame(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.open_children().push(frame.node);
        }
    }

    /// The child container currently receiving appends.
    fn open_children(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.node.children,
            None => &mut self.root,
        }
    }

    /// Open a nesting level for the line just finalized.
    fn push_frame(&mut self, node: Node) -> CompileResult<()> {
        let depth = self.stack.len() + 1;
        if depth > self.max_depth {
            return Err(CompileError::IndentTooDeep {
                depth,
                max: self.max_depth,
                line: self.line,
            });
        }
        self.stack.push(Frame {
            indent: self.prefix_len,
            node,
        });
        Ok(())
    }

    /// Shared line reset: remember the finished line's indent width and
    /// zero the per-line counters.
    fn reset_line(&mut self) {
        self.last_prefix = self.prefix_len;
        self.prefix_len = 0;
        self.content_len = 0;
        self.suffix_len = 0;
        self.phase = Phase::Prefix;
        self.line += 1;
    }

    /// Close all remaining levels and hand the tree to the caller.
    ///
    /// Pending blank lines at end of input are dropped: blanks only
    /// materialize when a later non-blank line finalizes.
    fn finish(mut self) -> Tree {
        while !self.stack.is_empty() {
            self.pop_frame();
        }
        Tree {
            children: self.root,
        }
    }
}
