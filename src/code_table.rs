use std::hash::Hash;

use tracing::debug;

use crate::error::Result;
use crate::frequency::{count_frequencies, SeedOrder};
use crate::hufftree::{build_tree, HuffNode, HuffmanTree};

/// One row of the code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord<S> {
    pub symbol: S,
    pub frequency: usize,
    /// Root-to-leaf path, '0' for left and '1' for right. Empty only when
    /// the whole tree is a single leaf.
    pub code: String,
}

/// Walk the tree depth-first, left before right, and emit one record per
/// leaf. The result is sorted by symbol.
pub fn extract_codes<S: Ord + Clone>(tree: Option<&HuffmanTree<S>>) -> Vec<CodeRecord<S>> {
    let Some(tree) = tree else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut stack: Vec<(&HuffNode<S>, String)> = vec![(&tree.root, String::new())];

    while let Some((node, path)) = stack.pop() {
        match node {
            HuffNode::Leaf { weight, symbol } => records.push(CodeRecord {
                symbol: symbol.clone(),
                frequency: *weight,
                code: path,
            }),
            HuffNode::Internal { left, right, .. } => {
                // right is pushed first so the left branch is visited first
                stack.push((right.as_ref(), format!("{path}1")));
                stack.push((left.as_ref(), path + "0"));
            }
        }
    }

    records.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    debug!(records = records.len(), "extracted codes");
    records
}

/// Count, build and extract in one go.
pub fn huffman_codes<S, I>(symbols: I) -> Result<Vec<CodeRecord<S>>>
where
    S: Ord + Hash + Clone + SeedOrder,
    I: IntoIterator<Item = S>,
{
    let frequencies = count_frequencies(symbols);
    let tree = build_tree(&frequencies)?;
    Ok(extract_codes(tree.as_ref()))
}
