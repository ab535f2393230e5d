use std::fmt;
use std::hash::Hash;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::Result;
use crate::frequency::{FrequencyTable, SeedOrder};
use crate::min_heap::MinHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        weight: usize,
        symbol: S,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn new(symbol: S, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// `a` becomes the left ('0') child and `b` the right ('1') child.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    pub root: HuffNode<S>,
    merge_cost: usize,
}

impl<S> HuffmanTree<S> {
    /// Greedy merge: take the two lightest nodes, join them under a new
    /// internal node, push it back, until one node is left.
    ///
    /// An empty heap gives `Ok(None)`. A heap holding one leaf gives a tree
    /// whose root is that leaf.
    pub fn build_from_heap(mut heap: MinHeap<HuffNode<S>>) -> Result<Option<Self>> {
        let mut merge_cost = 0;
        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            trace!(left = x.weight(), right = y.weight(), "merging nodes");

            let z = HuffNode::merge(x, y);
            merge_cost += z.weight();
            heap.insert(z.weight(), z);
        }

        if heap.is_empty() {
            return Ok(None);
        }
        let root = heap.extract_min()?;
        debug!(weight = root.weight(), merge_cost, "built huffman tree");

        Ok(Some(HuffmanTree { root, merge_cost }))
    }

    /// Sum of the weights of every internal node created while building.
    /// Equals the weighted path length `sum(frequency * code length)`.
    pub fn merge_cost(&self) -> usize {
        self.merge_cost
    }

    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => count += 1,
                HuffNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }
}

impl<S: Eq + Hash + Clone + SeedOrder> HuffmanTree<S> {
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Option<Self>> {
        let mut heap = MinHeap::new();
        for (symbol, count) in frequencies.seeding_order() {
            heap.insert(count, HuffNode::new(symbol.clone(), count));
        }
        HuffmanTree::build_from_heap(heap)
    }
}

impl<S: fmt::Debug> HuffmanTree<S> {
    pub fn write_structure<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Huffman Tree Structure:")?;
        write_node(writer, &self.root, 0, "root")
    }
}

fn write_node<S: fmt::Debug, W: Write>(
    writer: &mut W,
    node: &HuffNode<S>,
    depth: usize,
    label: &str,
) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    match node {
        HuffNode::Leaf { symbol, weight } => {
            writeln!(writer, "{}{}-> Leaf: {:?} [weight: {}]", indent, label, symbol, weight)
        }
        HuffNode::Internal { weight, left, right } => {
            writeln!(writer, "{}{}-> Internal [weight: {}]", indent, label, weight)?;
            write_node(writer, left, depth + 1, "L")?;
            write_node(writer, right, depth + 1, "R")
        }
    }
}

pub fn build_tree<S: Eq + Hash + Clone + SeedOrder>(
    frequencies: &FrequencyTable<S>,
) -> Result<Option<HuffmanTree<S>>> {
    HuffmanTree::from_frequencies(frequencies)
}
