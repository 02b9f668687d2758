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

//! Core parser and tree model for indentation-structured text.
//!
//! This crate turns text whose nesting is expressed purely by leading
//! whitespace width (one logical unit per line, as in whitespace-significant
//! template languages) into an ordered [`Tree`] of [`Node`]s mirroring the
//! nesting implied by relative indentation. It is the lexical/structural
//! front end of a template-compilation pipeline; interpreting line content
//! is the consumer's concern.
//!
//! # Quick start
//!
//! ```
//! use indentree_core::compile;
//!
//! let tree = compile(b"a\n  b\n  c\nd").unwrap();
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.get(0).unwrap().children.len(), 2);
//! ```
//!
//! # Configuration
//!
//! Parsing behavior is controlled by [`CompileOptions`] (trailing-whitespace
//! stripping, blank-line tracking) and bounded by [`Limits`] (input size,
//! nesting depth). Both switches default to enabled.

mod error;
mod limits;
mod options;
mod parser;
mod tree;

pub use error::{CompileError, CompileResult};
pub use limits::Limits;
pub use options::{CompileOptions, CompileOptionsBuilder};
pub use parser::{compile, compile_with_options, IndentParser};
pub use tree::{Node, Tree};
