/// MSB-first bit accumulator.
///
/// The first pushed bit lands in bit 7 of the produced byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitPacker {
    value: u8,
    count: u8,
}

impl BitPacker {
    pub const fn new() -> Self {
        Self { value: 0, count: 0 }
    }

    /// Push one bit, returning the byte once eight bits are collected.
    pub fn push(&mut self, bit: u8) -> Option<u8> {
        self.value = (self.value << 1) | (bit & 1);
        self.count += 1;
        if self.count == 8 { self.take() } else { None }
    }

    /// Emit a partial group aligned to the most significant bits.
    pub fn flush(&mut self) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        self.value <<= 8 - self.count;
        self.take()
    }

    fn take(&mut self) -> Option<u8> {
        let value = self.value;
        *self = Self::new();
        Some(value)
    }
}

/// Pack up to eight bits into one byte, MSB-first, zero-padding the low end.
pub fn pack(bits: impl IntoIterator<Item = u8>) -> u8 {
    let mut packer = BitPacker::new();
    for bit in bits.into_iter().take(8) {
        if let Some(byte) = packer.push(bit) {
            return byte;
        }
    }
    packer.flush().unwrap_or(0)
}
