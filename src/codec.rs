use crate::bitvec::BitVec;
use crate::code::CodeTable;
use crate::error::HuffmanError;
use crate::tree::Node;

/// Concatenates the code of every input byte, in input order.
///
/// Fails with [`HuffmanError::UnknownSymbol`] if a byte has no entry in the
/// table, which can only happen when the table was built from a different
/// text.
pub fn encode(input: &[u8], table: &CodeTable) -> Result<BitVec, HuffmanError> {
    let mut encoded = BitVec::new();

    for &byte in input {
        let code = table.get(&byte).ok_or(HuffmanError::UnknownSymbol(byte))?;
        encoded.extend_from(code);
    }

    Ok(encoded)
}

/// Walks the tree bit by bit: `0` descends left, `1` right; reaching a leaf
/// emits its symbol and resets the walk to the root.
///
/// The sequence must decompose exactly into complete root-to-leaf paths;
/// running out of bits partway down the tree fails with
/// [`HuffmanError::TruncatedInput`] rather than truncating the output.
///
/// A bare-leaf root means the source had a single distinct symbol and its
/// code is the empty bit-string, so the sequence carries no information: the
/// symbol is emitted as many times as the frequency recorded in the leaf.
/// Any bits alongside such a tree are malformed input.
pub fn decode(encoded: &BitVec, root: &Node) -> Result<Vec<u8>, HuffmanError> {
    if let Node::Leaf { symbol, frequency } = root {
        if !encoded.is_empty() {
            return Err(HuffmanError::TruncatedInput { consumed: 0 });
        }
        return Ok(vec![*symbol; *frequency]);
    }

    let mut decoded = Vec::new();
    let mut cursor = root;
    let mut consumed = 0_usize;

    for bit in encoded {
        let Node::Internal { left, right, .. } = cursor else {
            unreachable!()
        };

        consumed += 1;

        let next = if bit { right.as_ref() } else { left.as_ref() };
        match next {
            Node::Leaf { symbol, .. } => {
                decoded.push(*symbol);
                cursor = root;
            }

            Node::Internal { .. } => cursor = next,
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(HuffmanError::TruncatedInput { consumed });
    }

    Ok(decoded)
}
