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

//! Deterministic document generators for benchmarking the parser.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x1d3_7ee;

fn random_word(rng: &mut StdRng) -> String {
    let len = rng.gen_range(3..12);
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

/// A flat document: `lines` root-level lines, no nesting.
pub fn flat_document(lines: usize) -> String {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = String::new();
    for _ in 0..lines {
        out.push_str(&random_word(&mut rng));
        out.push('\n');
    }
    out
}

/// A document that repeatedly indents to `depth` and dedents back,
/// exercising the indent stack.
pub fn nested_document(blocks: usize, depth: usize) -> String {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = String::new();
    for _ in 0..blocks {
        for level in 0..depth {
            out.push_str(&"  ".repeat(level));
            out.push_str(&random_word(&mut rng));
            out.push('\n');
        }
    }
    out
}

/// A document where every other line is blank, exercising the
/// pending-blank-line path.
pub fn blank_heavy_document(lines: usize) -> String {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = String::new();
    for _ in 0..lines {
        out.push_str(&random_word(&mut rng));
        out.push_str("\n\n");
    }
    out
}

/// A document whose lines carry trailing whitespace, exercising the
/// suffix phase.
pub fn trailing_whitespace_document(lines: usize) -> String {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = String::new();
    for _ in 0..lines {
        out.push_str(&random_word(&mut rng));
        out.push(' ');
        out.push_str(&random_word(&mut rng));
        out.push_str("   \n");
    }
    out
}
