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

//! Compile options.

use crate::limits::Limits;

/// Options controlling a compile run, resolved once at construction.
///
/// # Creating CompileOptions
///
/// ## Using the builder pattern (recommended)
///
/// ```
/// use indentree_core::CompileOptions;
///
/// let opts = CompileOptions::builder()
///     .strip(false)
///     .track_empty_lines(true)
///     .max_indent_depth(100)
///     .build();
/// assert!(!opts.strip);
/// ```
///
/// ## Direct field access
///
/// ```
/// use indentree_core::CompileOptions;
///
/// let mut opts = CompileOptions::default();
/// opts.track_empty_lines = false;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Strip trailing horizontal whitespace from line content.
    ///
    /// When `false`, interior and trailing whitespace after the first
    /// non-whitespace byte is always content.
    pub strip: bool,
    /// Materialize blank input lines as empty-text nodes.
    ///
    /// When `false`, blank lines leave no trace in the output tree.
    pub track_empty_lines: bool,
    /// Resource limits.
    pub limits: Limits,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            strip: true,
            track_empty_lines: true,
            limits: Limits::default(),
        }
    }
}

impl CompileOptions {
    /// Create a new builder for CompileOptions.
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`CompileOptions`].
#[derive(Debug, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: CompileOptions::default(),
        }
    }

    /// Enable or disable trailing-whitespace stripping (default: true).
    pub fn strip(mut self, strip: bool) -> Self {
        self.options.strip = strip;
        self
    }

    /// Enable or disable blank-line tracking (default: true).
    pub fn track_empty_lines(mut self, track: bool) -> Self {
        self.options.track_empty_lines = track;
        self
    }

    /// Set the maximum input size in bytes (default: 1GB).
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.options.limits.max_input_size = size;
        self
    }

    /// Set the maximum nesting depth (default: 500).
    pub fn max_indent_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_indent_depth = depth;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Build the CompileOptions.
    pub fn build(self) -> CompileOptions {
        self.options
    }
}

impl Default for CompileOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
