/// Encode one chunk: tag bytes, little-endian payload length, payload.
pub(crate) fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(payload.len() + 8);
	out.extend_from_slice(tag);
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	out
}
