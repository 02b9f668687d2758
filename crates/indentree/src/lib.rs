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

//! # indentree
//!
//! indentree converts indentation-structured text (one logical unit per
//! line, nesting expressed purely by leading whitespace width, as in
//! whitespace-significant template languages) into an ordered tree that
//! mirrors the nesting implied by relative indentation.
//!
//! It is built as the lexical/structural front end of a template
//! compiler: the produced [`Tree`] carries each line's indent width and
//! captured text, and downstream stages interpret the content.
//!
//! ## Quick start
//!
//! ```rust
//! use indentree::compile;
//!
//! let tree = compile(b"html\n  body\n    p hello\n  footer").unwrap();
//!
//! let html = tree.get(0).unwrap();
//! assert_eq!(html.text, "html");
//! assert_eq!(html.children.len(), 2); // body, footer
//! assert_eq!(html.children[0].children[0].text, "p hello");
//! ```
//!
//! ## Options
//!
//! Two independent switches, both enabled by default:
//!
//! - `strip`: drop trailing horizontal whitespace from captured text;
//! - `track_empty_lines`: materialize blank lines as empty-text nodes
//!   at the indent width of the next non-blank line.
//!
//! ```rust
//! use indentree::{compile_with_options, CompileOptions};
//!
//! let opts = CompileOptions::builder()
//!     .strip(false)
//!     .track_empty_lines(false)
//!     .build();
//! let tree = compile_with_options(b"code \n\nmore", opts).unwrap();
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.get(0).unwrap().text, "code ");
//! ```
//!
//! ## Structural rules
//!
//! Nesting is decided purely by comparison with the immediately
//! preceding line, never by an absolute step size:
//!
//! - equal width: sibling under the same parent;
//! - greater width: child of the preceding line;
//! - lesser width: closes every open level at or beyond the new width
//!   and attaches under the nearest surviving ancestor.
//!
//! ```rust
//! use indentree::compile;
//!
//! // Dedent to a width between two open levels.
//! let tree = compile(b"a\n ca\n     caa\n    cab").unwrap();
//! let ca = &tree.get(0).unwrap().children[0];
//! assert_eq!(ca.children[0].text, "caa");
//! assert_eq!(ca.children[1].text, "cab"); // sibling of caa, not child
//! ```

pub use indentree_core::{
    // Functions
    compile,
    compile_with_options,
    // Main types
    CompileError,
    CompileOptions,
    CompileOptionsBuilder,
    CompileResult,
    IndentParser,
    Limits,
    Node,
    Tree,
};
