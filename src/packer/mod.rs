//! Low-level byte-packing utilities: the deterministic big-endian,
//! length-prefixed wire format every tx/block/UTXO encodes with.
use std::cell::Cell;

use crate::errors::{Error, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};

pub const MAX_STR_LEN: u16 = u16::MAX - 1;

pub const BYTE_LEN: usize = 1;
pub const U16_LEN: usize = 2;
pub const U32_LEN: usize = 4;
pub const U64_LEN: usize = 8;
pub const BOOL_LEN: usize = 1;

/// Packer packs and unpacks the underlying bytes array.
/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/wrappers#Packer>
pub struct Packer {
    /// largest allowed size of expanding the byte array
    max_size: usize,
    /// current byte array
    bytes: Cell<BytesMut>,
    /// offset that is being written to in the byte array
    offset: Cell<usize>,
}

impl Packer {
    pub fn new(max_size: usize, initial_cap: usize) -> Self {
        Self {
            max_size,
            bytes: Cell::new(BytesMut::with_capacity(initial_cap)),
            offset: Cell::new(0),
        }
    }

    /// Create a new packer from the existing bytes.
    /// Resets the offset to the end of the existing bytes.
    pub fn load_bytes_for_pack(max_size: usize, b: &[u8]) -> Self {
        Self {
            max_size,
            bytes: Cell::new(BytesMut::from(b)),
            offset: Cell::new(b.len()),
        }
    }

    /// Create a new packer from the existing bytes.
    /// Resets the offset to the beginning of the existing bytes.
    pub fn load_bytes_for_unpack(max_size: usize, b: &[u8]) -> Self {
        Self {
            max_size,
            bytes: Cell::new(BytesMut::from(b)),
            offset: Cell::new(0),
        }
    }

    /// Returns the current bytes array as an immutable bytes array.
    ///
    /// Be cautious! Once bytes are taken out, the "bytes" field is set to
    /// default (empty). To continue to write, remember to put it back with
    /// "set_bytes".
    pub fn take_bytes(&self) -> Bytes {
        let mut b = self.bytes.take();
        let n = b.len();
        b.copy_to_bytes(n)
    }

    pub fn set_bytes(&self, b: &[u8]) {
        self.bytes.set(BytesMut::from(b));
    }

    fn set_offset(&self, offset: usize) {
        self.offset.set(offset)
    }

    pub fn get_offset(&self) -> usize {
        self.offset.get()
    }

    pub fn bytes_len(&self) -> usize {
        let b = self.bytes.take();
        let n = b.len();
        self.bytes.set(b);
        n
    }

    pub fn bytes_cap(&self) -> usize {
        let b = self.bytes.take();
        let n = b.capacity();
        self.bytes.set(b);
        n
    }

    fn truncate_bytes_with_length(&self, len: usize) {
        let mut b = self.bytes.take();
        b.truncate(len);
        self.bytes.set(b);
    }

    fn reserve_bytes_with_length(&self, len: usize) {
        let mut b = self.bytes.take();
        b.reserve(len);
        self.bytes.set(b);
    }

    /// Ensures the remaining capacity of the bytes array.
    /// ref. "avalanchego/utils/wrappers.Packer.Expand"
    pub fn expand(&self, n: usize) -> Result<()> {
        let needed_size = self.get_offset() + n;

        if needed_size <= self.bytes_len() {
            return Ok(());
        }

        if needed_size > self.max_size {
            return Err(Error::state(format!(
                "needed_size {} exceeds max_size {}",
                needed_size, self.max_size
            )));
        }

        let bytes_cap = self.bytes_cap();
        if needed_size <= bytes_cap {
            self.truncate_bytes_with_length(needed_size);
            return Ok(());
        }

        self.reserve_bytes_with_length(needed_size);
        Ok(())
    }

    fn check_remaining_unpack(&self, bytes_to_read: usize) -> Result<()> {
        let needed_size = self.get_offset() + bytes_to_read;
        let bytes_n = self.bytes_len();
        if needed_size > bytes_n {
            return Err(Error::syntactic(format!(
                "bad length to read; offset + bytes ({}) to read exceeds current total bytes size {}",
                needed_size, bytes_n
            )));
        };
        Ok(())
    }

    pub fn pack_byte(&self, v: u8) -> Result<()> {
        self.expand(BYTE_LEN)?;
        let offset = self.get_offset();
        let mut b = self.bytes.take();
        b.put_u8(v);
        self.bytes.set(b);
        self.set_offset(offset + BYTE_LEN);
        Ok(())
    }

    pub fn unpack_byte(&self) -> Result<u8> {
        self.check_remaining_unpack(BYTE_LEN)?;
        let offset = self.get_offset();
        let b = self.bytes.take();
        let v = b[offset];
        self.bytes.set(b);
        self.set_offset(offset + BYTE_LEN);
        Ok(v)
    }

    pub fn pack_u16(&self, v: u16) -> Result<()> {
        self.expand(U16_LEN)?;
        let offset = self.get_offset();
        let mut b = self.bytes.take();
        b.put_u16(v);
        self.bytes.set(b);
        self.set_offset(offset + U16_LEN);
        Ok(())
    }

    pub fn unpack_u16(&self) -> Result<u16> {
        self.check_remaining_unpack(U16_LEN)?;
        let offset = self.get_offset();
        let b = self.bytes.take();
        let pos = &b[offset..offset + U16_LEN];
        let v = u16::from_be_bytes([pos[0], pos[1]]);
        self.bytes.set(b);
        self.set_offset(offset + U16_LEN);
        Ok(v)
    }

    /// Also used for encoding the codec type-tag IDs.
    pub fn pack_u32(&self, v: u32) -> Result<()> {
        self.expand(U32_LEN)?;
        let offset = self.get_offset();
        let mut b = self.bytes.take();
        b.put_u32(v);
        self.bytes.set(b);
        self.set_offset(offset + U32_LEN);
        Ok(())
    }

    pub fn unpack_u32(&self) -> Result<u32> {
        self.check_remaining_unpack(U32_LEN)?;
        let offset = self.get_offset();
        let b = self.bytes.take();
        let pos = &b[offset..offset + U32_LEN];
        let v = u32::from_be_bytes([pos[0], pos[1], pos[2], pos[3]]);
        self.bytes.set(b);
        self.set_offset(offset + U32_LEN);
        Ok(v)
    }

    pub fn pack_u64(&self, v: u64) -> Result<()> {
        self.expand(U64_LEN)?;
        let offset = self.get_offset();
        let mut b = self.bytes.take();
        b.put_u64(v);
        self.bytes.set(b);
        self.set_offset(offset + U64_LEN);
        Ok(())
    }

    pub fn unpack_u64(&self) -> Result<u64> {
        self.check_remaining_unpack(U64_LEN)?;
        let offset = self.get_offset();
        let b = self.bytes.take();
        let pos = &b[offset..offset + U64_LEN];
        let v = u64::from_be_bytes([
            pos[0], pos[1], pos[2], pos[3], pos[4], pos[5], pos[6], pos[7],
        ]);
        self.bytes.set(b);
        self.set_offset(offset + U64_LEN);
        Ok(v)
    }

    pub fn pack_bool(&self, v: bool) -> Result<()> {
        self.pack_byte(if v { 1 } else { 0 })
    }

    pub fn unpack_bool(&self) -> Result<bool> {
        match self.unpack_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::syntactic("unexpected value when unpacking bool")),
        }
    }

    pub fn pack_bytes(&self, v: &[u8]) -> Result<()> {
        let n = v.len();
        self.expand(n)?;
        let offset = self.get_offset();
        let mut b = self.bytes.take();
        b.put_slice(v);
        self.bytes.set(b);
        self.set_offset(offset + n);
        Ok(())
    }

    pub fn unpack_bytes(&self, n: usize) -> Result<Vec<u8>> {
        self.check_remaining_unpack(n)?;
        let offset = self.get_offset();
        let b = self.bytes.take();
        let v = Vec::from(&b[offset..offset + n]);
        self.bytes.set(b);
        self.set_offset(offset + n);
        Ok(v)
    }

    /// 4-byte length header followed by the bytes.
    pub fn pack_bytes_with_header(&self, v: &[u8]) -> Result<()> {
        self.pack_u32(v.len() as u32)?;
        self.pack_bytes(v)
    }

    pub fn unpack_bytes_with_header(&self) -> Result<Vec<u8>> {
        let n = self.unpack_u32()?;
        self.unpack_bytes(n as usize)
    }

    pub fn pack_str(&self, v: &str) -> Result<()> {
        let n = v.len() as u16;
        if n > MAX_STR_LEN {
            return Err(Error::syntactic(format!(
                "str {} > max_size {}",
                n, MAX_STR_LEN
            )));
        }
        self.pack_u16(n)?;
        self.pack_bytes(v.as_bytes())
    }

    pub fn unpack_str(&self) -> Result<String> {
        let n = self.unpack_u16()?;
        let d = self.unpack_bytes(n as usize)?;
        String::from_utf8(d).map_err(|e| Error::syntactic(format!("invalid utf8 ({e})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_byte() {
        let packer = Packer::new(1, 0);
        packer.pack_byte(0x01).unwrap();
        assert_eq!(packer.bytes_len(), 1);
        assert!(packer.pack_byte(0x02).is_err());

        let b = packer.take_bytes();
        assert_eq!(&b[..], b"\x01");
    }

    #[test]
    fn test_pack_u32_roundtrip() {
        let packer = Packer::new(U32_LEN, 0);
        packer.pack_u32(0x01020304).unwrap();
        let b = packer.take_bytes();
        let unpacker = Packer::load_bytes_for_unpack(U32_LEN, &b);
        assert_eq!(unpacker.unpack_u32().unwrap(), 0x01020304);
    }

    #[test]
    fn test_pack_u64_roundtrip() {
        let packer = Packer::new(U64_LEN, 0);
        packer.pack_u64(0x0102030405060708).unwrap();
        let b = packer.take_bytes();
        let unpacker = Packer::load_bytes_for_unpack(U64_LEN, &b);
        assert_eq!(unpacker.unpack_u64().unwrap(), 0x0102030405060708);
    }

    #[test]
    fn test_pack_bytes_with_header_roundtrip() {
        let packer = Packer::new(64, 0);
        packer.pack_bytes_with_header(b"Avax").unwrap();
        let b = packer.take_bytes();
        let unpacker = Packer::load_bytes_for_unpack(64, &b);
        assert_eq!(unpacker.unpack_bytes_with_header().unwrap(), b"Avax");
    }

    #[test]
    fn test_pack_str_roundtrip() {
        let packer = Packer::new(64, 0);
        packer.pack_str("Avax").unwrap();
        let b = packer.take_bytes();
        let unpacker = Packer::load_bytes_for_unpack(64, &b);
        assert_eq!(unpacker.unpack_str().unwrap(), "Avax");
    }
}
