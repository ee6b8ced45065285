use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;

/// A node of the Huffman tree.
///
/// Built bottom-up by [`build_huffman_tree`] and immutable afterwards. Every
/// internal node owns exactly two children, so each leaf is reached by a
/// unique root-to-leaf path and the derived codes are prefix-free. When the
/// source has a single distinct symbol the whole tree is one `Leaf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Total occurrence count below this node. At the root this equals the
    /// length of the counted input.
    pub const fn frequency(&self) -> usize {
        match self {
            Node::Leaf { frequency, .. } |
            Node::Internal { frequency, .. }
                => *frequency
        }
    }
}

/// Pending node in the construction queue.
///
/// Ordering ignores the node itself: frequency first, insertion sequence
/// number second, so nodes of equal frequency leave the queue in the order
/// they entered it. `BinaryHeap` alone gives no such guarantee, and the tree
/// shape (hence every code) depends on it.
struct QueueEntry {
    frequency: usize,
    seq: usize,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.frequency, self.seq).cmp(&(other.frequency, other.seq))
    }
}

/// Builds the Huffman tree for a non-empty frequency table.
///
/// One leaf per table entry is seeded into a min-priority queue in ascending
/// byte order; the two lowest entries are then repeatedly merged (first
/// removed becomes the left child) until a single root remains. A one-entry
/// table yields a bare leaf, which callers of the code table and decoder
/// handle as the degenerate zero-length-code case.
pub fn build_huffman_tree(table: &FrequencyTable) -> Result<Node, HuffmanError> {
    if table.is_empty() {
        return Err(HuffmanError::EmptyTable);
    }

    let mut seq = 0_usize;
    let mut queue = BinaryHeap::with_capacity(table.len());

    for (&symbol, &frequency) in table {
        queue.push(Reverse(QueueEntry {
            frequency,
            seq,
            node: Node::Leaf { symbol, frequency },
        }));
        seq += 1;
    }

    while queue.len() > 1 {
        let (Some(Reverse(first)), Some(Reverse(second))) = (queue.pop(), queue.pop()) else {
            unreachable!()
        };

        let frequency = first.frequency + second.frequency;
        queue.push(Reverse(QueueEntry {
            frequency,
            seq,
            node: Node::Internal {
                frequency,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        }));
        seq += 1;
    }

    let Some(Reverse(root)) = queue.pop() else {
        unreachable!()
    };

    Ok(root.node)
}

#[cfg(test)]
mod tests {

    use crate::frequency::build_frequency_table;

    use super::*;

    fn leaf(symbol: u8, frequency: usize) -> Node {
        Node::Leaf { symbol, frequency }
    }

    fn internal(left: Node, right: Node) -> Node {
        Node::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = build_huffman_tree(&FrequencyTable::new()).unwrap_err();

        assert_eq!(err, HuffmanError::EmptyTable);
    }

    #[test]
    fn single_entry_yields_bare_leaf() {
        let table = build_frequency_table(b"aaaa");
        let tree = build_huffman_tree(&table).unwrap();

        assert_eq!(tree, leaf(b'a', 4));
    }

    #[test]
    fn merges_lowest_frequencies_first() {
        // a(2) and c(2) merge before b(3), then b joins as the left child
        let table = build_frequency_table(b"aabbbcc");
        let tree = build_huffman_tree(&table).unwrap();

        let expected = internal(leaf(b'b', 3), internal(leaf(b'a', 2), leaf(b'c', 2)));
        assert_eq!(tree, expected);
    }

    #[test]
    fn equal_frequencies_merge_in_insertion_order() {
        let table = build_frequency_table(b"abcd");
        let tree = build_huffman_tree(&table).unwrap();

        let expected = internal(
            internal(leaf(b'a', 1), leaf(b'b', 1)),
            internal(leaf(b'c', 1), leaf(b'd', 1)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn root_frequency_equals_input_length() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let tree = build_huffman_tree(&build_frequency_table(input)).unwrap();

        assert_eq!(tree.frequency(), input.len());
    }

    #[test]
    fn every_internal_node_sums_its_children() {
        fn check(node: &Node) {
            if let Node::Internal { frequency, left, right } = node {
                assert_eq!(*frequency, left.frequency() + right.frequency());
                check(left);
                check(right);
            }
        }

        let tree = build_huffman_tree(&build_frequency_table(b"mississippi")).unwrap();
        check(&tree);
    }
}
