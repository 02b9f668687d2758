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

//! Error types for compilation.
//!
//! Compilation is a total function over its input domain: any byte
//! sequence produces some tree. The only fatal conditions are resource
//! limit violations, which abort the run and propagate to the caller.

use thiserror::Error;

/// An error aborting a compile run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompileError {
    /// Input exceeds the configured size limit.
    #[error("input too large: {size} bytes exceeds maximum {max}")]
    InputTooLarge { size: usize, max: usize },

    /// The indent stack would exceed the configured depth limit.
    #[error("line {line}: indent depth {depth} exceeds maximum {max}")]
    IndentTooDeep {
        depth: usize,
        max: usize,
        /// 1-based line number of the offending line.
        line: usize,
    },
}

/// Result type for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;
