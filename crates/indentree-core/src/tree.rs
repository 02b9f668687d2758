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

//! Tree structure produced by compilation.

/// One parsed line.
///
/// The tree is append-only: nodes are created once, at the moment their
/// originating line completes, and a node's children only grow while the
/// node is still the innermost open nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Count of leading whitespace bytes on the originating line.
    pub indent: usize,
    /// Captured content bytes (subject to the stripping policy).
    pub text: String,
    /// Lines nested under this one, in input order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new leaf node.
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create a new node with children.
    pub fn with_children(indent: usize, text: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            indent,
            text: text.into(),
            children,
        }
    }

    /// Whether this node stands in for a blank input line.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// The root container: an ordered sequence of top-level [`Node`]s.
///
/// Exactly one `Tree` exists per compile run; it is never itself wrapped
/// in a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    /// Top-level lines, in input order.
    pub children: Vec<Node>,
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get a top-level node by index.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Iterate over the top-level nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Append a top-level node.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Total number of nodes in the whole tree.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Node::subtree_len).sum()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Node tests ====================

    #[test]
    fn test_node_new() {
        let node = Node::new(2, "title");
        assert_eq!(node.indent, 2);
        assert_eq!(node.text, "title");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_node_with_children() {
        let node = Node::with_children(0, "a", vec![Node::new(2, "b")]);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].text, "b");
    }

    #[test]
    fn test_node_is_blank() {
        assert!(Node::new(2, "").is_blank());
        assert!(!Node::new(2, "x").is_blank());
    }

    #[test]
    fn test_node_add_child() {
        let mut node = Node::new(0, "a");
        node.add_child(Node::new(2, "b"));
        node.add_child(Node::new(2, "c"));
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].text, "c");
    }

    #[test]
    fn test_node_subtree_len() {
        let node = Node::with_children(
            0,
            "a",
            vec![
                Node::new(2, "b"),
                Node::with_children(2, "c", vec![Node::new(4, "d")]),
            ],
        );
        assert_eq!(node.subtree_len(), 4);
    }

    #[test]
    fn test_node_equality() {
        assert_eq!(Node::new(1, "x"), Node::new(1, "x"));
        assert_ne!(Node::new(1, "x"), Node::new(2, "x"));
    }

    #[test]
    fn test_node_clone() {
        let node = Node::with_children(0, "a", vec![Node::new(2, "b")]);
        assert_eq!(node.clone(), node);
    }

    // ==================== Tree tests ====================

    #[test]
    fn test_tree_new() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_tree_push_and_get() {
        let mut tree = Tree::new();
        tree.push(Node::new(0, "a"));
        tree.push(Node::new(0, "b"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(0).unwrap().text, "a");
        assert_eq!(tree.get(1).unwrap().text, "b");
        assert!(tree.get(2).is_none());
    }

    #[test]
    fn test_tree_iter() {
        let mut tree = Tree::new();
        tree.push(Node::new(0, "a"));
        tree.push(Node::new(0, "b"));
        let texts: Vec<&str> = tree.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_tree_into_iter_ref() {
        let mut tree = Tree::new();
        tree.push(Node::new(0, "a"));
        let mut count = 0;
        for node in &tree {
            assert_eq!(node.indent, 0);
            count += 1;
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_tree_node_count_nested() {
        let mut tree = Tree::new();
        tree.push(Node::with_children(0, "a", vec![Node::new(2, "b")]));
        tree.push(Node::new(0, "c"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_tree_equality() {
        let mut a = Tree::new();
        a.push(Node::new(0, "x"));
        let mut b = Tree::new();
        b.push(Node::new(0, "x"));
        assert_eq!(a, b);
    }

    // ==================== Serde tests ====================

    #[cfg(feature = "serde")]
    #[test]
    fn test_tree_serde_roundtrip() {
        let mut tree = Tree::new();
        tree.push(Node::with_children(0, "a", vec![Node::new(2, "b")]));
        let json = serde_json::to_string(&tree).unwrap();
        let back: Tree = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
