/// Growable sequence of bits, packed most-significant-bit first.
///
/// Stores the meaningful bit count explicitly; the unused trailing bits of
/// the last byte are always zero, so derived equality is structural equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    /// How many bits of `bytes` carry meaning.
    len: usize,
}

impl BitVec {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of meaningful bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let offset = (self.len % 8) as u8;

        if offset == 0 {
            self.bytes.push((bit as u8) << 7);
        } else if bit {
            // A partial last byte exists whenever len is not a multiple of 8
            *self.bytes.last_mut().unwrap() |= 1 << (7 - offset);
        }

        self.len += 1;
    }

    pub fn extend_from(&mut self, other: &BitVec) {
        if self.len % 8 == 0 {
            // Byte-aligned, the other vec's bytes can be taken as they are
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
        } else {
            for bit in other.iter() {
                self.push(bit);
            }
        }
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits { bits: self, index: 0 }
    }

    /// The packed bytes, the last one padded with zero bits up to a byte
    /// boundary. Padding carries no meaning.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bits = BitVec::with_capacity(iter.size_hint().0);
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

/// Iterator over the meaningful bits of a [`BitVec`].
pub struct Bits<'a> {
    bits: &'a BitVec,
    index: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= self.bits.len {
            return None;
        }

        let byte = self.bits.bytes[self.index / 8];
        let mask = 1_u8 << (7 - (self.index % 8) as u8);
        self.index += 1;

        Some(byte & mask != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len - self.index;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn push_and_iter_coherency() {
        let expected = [true, true, false, true, false, true, false, true, true, false];

        let mut bits = BitVec::new();
        for &bit in &expected {
            bits.push(bit);
        }

        assert_eq!(bits.len(), expected.len());
        assert_eq!(bits.iter().collect::<Vec<bool>>(), expected);
    }

    #[test]
    fn empty_has_no_bytes() {
        let bits = BitVec::new();

        assert!(bits.is_empty());
        assert_eq!(bits.len(), 0);
        assert!(bits.as_bytes().is_empty());
        assert_eq!(bits.iter().next(), None);
    }

    #[test]
    fn padding_bits_stay_zero() {
        let bits: BitVec = [true, true, true].into_iter().collect();

        assert_eq!(bits.as_bytes(), &[0b1110_0000]);
        assert_eq!(bits.len(), 3);
    }

    #[test]
    fn extend_unaligned() {
        let a = [true, false, false, true, false];
        let b = [true, false, false, false, false, true];

        let mut bits: BitVec = a.into_iter().collect();
        let tail: BitVec = b.into_iter().collect();

        bits.extend_from(&tail);

        let expected: Vec<bool> = a.iter().chain(b.iter()).copied().collect();
        assert_eq!(bits.iter().collect::<Vec<bool>>(), expected);
        assert_eq!(bits.len(), a.len() + b.len());
    }

    #[test]
    fn extend_aligned_reuses_bytes() {
        let a = [true, false, true, false, true, false, true, false];
        let b = [false, true, true];

        let mut bits: BitVec = a.into_iter().collect();
        bits.extend_from(&b.into_iter().collect());

        assert_eq!(bits.len(), 11);
        assert_eq!(bits.as_bytes(), &[0b1010_1010, 0b0110_0000]);
    }
}
