use crate::ziff::{Result, ZiffError};

/// Bounded cursor over an immutable byte slice.
///
/// Reads are little-endian and bounds-checked; `seek` is unchecked and the
/// next read reports any overrun.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return true when the underlying buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move the cursor to an absolute offset.
	pub fn seek(&mut self, pos: usize) {
		self.pos = pos;
	}

	/// Read exactly `n` bytes without copying and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if self.pos > self.bytes.len() || n > self.remaining() {
			return Err(ZiffError::OutOfBounds {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}
}
