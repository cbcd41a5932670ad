use core::iter::FusedIterator;

/// Returns a lazy iterator over the bytes encoded in `source` as two-digit hexadecimal pairs.
///
/// The iterator is cheap to clone; a clone restarts from the position of the original. Use
/// [`HexPairs::stop_reason()`] after iteration to tell a fully consumed source from one that was
/// cut short by an invalid pair.
pub fn decode_hex_pairs(source: &str) -> HexPairs<'_> {
    HexPairs {
        source: source.as_bytes(),
        offset: 0,
        stop: None,
    }
}

/// An iterator returned from [`decode_hex_pairs()`].
#[derive(Debug, Clone)]
pub struct HexPairs<'a> {
    source: &'a [u8],
    offset: usize,
    stop: Option<StopReason>,
}

impl<'a> HexPairs<'a> {
    /// Returns why the iteration ended or [`None`] if it has not ended yet.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Byte offset of the next pair in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes the remaining pairs and returns why the decoding stopped.
    pub fn validate(mut self) -> StopReason {
        for _ in self.by_ref() {}

        // The loop only ends once a stop reason has been set.
        self.stop.unwrap_or(StopReason::Exhausted)
    }
}

impl<'a> Iterator for HexPairs<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stop.is_some() {
            return None;
        }

        let pair = match self.source.get(self.offset..) {
            Some([]) | None => {
                self.stop = Some(StopReason::Exhausted);
                return None;
            }
            Some([h, l, ..]) => (digit(*h), digit(*l)),
            Some([_]) => (None, None),
        };

        match pair {
            (Some(h), Some(l)) => {
                self.offset += 2;
                Some((h << 4) | l)
            }
            _ => {
                self.stop = Some(StopReason::Invalid {
                    offset: self.offset,
                });
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stop.is_some() {
            (0, Some(0))
        } else {
            (0, Some((self.source.len() - self.offset) / 2))
        }
    }
}

impl<'a> FusedIterator for HexPairs<'a> {}

/// Why [`HexPairs`] stopped yielding bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every pair in the source was decoded.
    Exhausted,
    /// The pair at `offset` is not two hexadecimal digits. A lone trailing digit counts as
    /// invalid.
    Invalid { offset: usize },
}

fn digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
