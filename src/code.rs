use std::collections::BTreeMap;

use crate::bitvec::BitVec;
use crate::tree::Node;

/// Bit-string code per byte value.
///
/// Each code is the root-to-leaf path of its symbol, `0` for a left edge and
/// `1` for a right edge, so no code is a prefix of another.
pub type CodeTable = BTreeMap<u8, BitVec>;

/// Walks the tree and records every symbol's path from the root.
///
/// Traversal is iterative with an explicit stack: a maximally skewed tree
/// over the full byte alphabet is 255 levels deep, which recursion would
/// handle but need not risk.
///
/// A root that is itself a leaf (single distinct symbol in the source) gets
/// the empty bit-string. The encoded sequence of such a text is zero-length
/// and the decoder reproduces the symbol from the frequency recorded in the
/// leaf instead of reading bits.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    let mut stack = vec![(root, BitVec::new())];

    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                table.insert(*symbol, path);
            }

            Node::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push(true);

                let mut left_path = path;
                left_path.push(false);

                stack.push((right.as_ref(), right_path));
                stack.push((left.as_ref(), left_path));
            }
        }
    }

    table
}
