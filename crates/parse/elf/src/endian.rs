//! Byte-order aware field access.
//!
//! [`Reader`] and [`Writer`] walk a fixed-size region of a byte slice one
//! field at a time. Both are parameterized over a [`ByteOrder`] so the
//! endianness decision is made once, by type, rather than per field.

use core::fmt;
use core::marker::PhantomData;

use crate::header::ElfError;

/// A byte order for multi-byte integer fields.
pub trait ByteOrder: Copy + Default + fmt::Debug + 'static {
    /// `true` for most-significant-byte-first encodings.
    const BIG: bool;

    /// Decode a `u16` from its wire representation.
    fn read_u16(bytes: [u8; 2]) -> u16;
    /// Decode a `u32` from its wire representation.
    fn read_u32(bytes: [u8; 4]) -> u32;
    /// Decode a `u64` from its wire representation.
    fn read_u64(bytes: [u8; 8]) -> u64;
    /// Encode a `u16` into its wire representation.
    fn write_u16(value: u16) -> [u8; 2];
    /// Encode a `u32` into its wire representation.
    fn write_u32(value: u32) -> [u8; 4];
    /// Encode a `u64` into its wire representation.
    fn write_u64(value: u64) -> [u8; 8];
}

/// Least significant byte first (`ELFDATA2LSB`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LittleEndian;

/// Most significant byte first (`ELFDATA2MSB`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndian;

impl ByteOrder for LittleEndian {
    const BIG: bool = false;

    fn read_u16(bytes: [u8; 2]) -> u16 {
        u16::from_le_bytes(bytes)
    }
    fn read_u32(bytes: [u8; 4]) -> u32 {
        u32::from_le_bytes(bytes)
    }
    fn read_u64(bytes: [u8; 8]) -> u64 {
        u64::from_le_bytes(bytes)
    }
    fn write_u16(value: u16) -> [u8; 2] {
        value.to_le_bytes()
    }
    fn write_u32(value: u32) -> [u8; 4] {
        value.to_le_bytes()
    }
    fn write_u64(value: u64) -> [u8; 8] {
        value.to_le_bytes()
    }
}

impl ByteOrder for BigEndian {
    const BIG: bool = true;

    fn read_u16(bytes: [u8; 2]) -> u16 {
        u16::from_be_bytes(bytes)
    }
    fn read_u32(bytes: [u8; 4]) -> u32 {
        u32::from_be_bytes(bytes)
    }
    fn read_u64(bytes: [u8; 8]) -> u64 {
        u64::from_be_bytes(bytes)
    }
    fn write_u16(value: u16) -> [u8; 2] {
        value.to_be_bytes()
    }
    fn write_u32(value: u32) -> [u8; 4] {
        value.to_be_bytes()
    }
    fn write_u64(value: u64) -> [u8; 8] {
        value.to_be_bytes()
    }
}

/// Returns `data[offset..offset + len]`, or [`ElfError::Truncated`].
pub(crate) fn region(data: &[u8], offset: usize, len: usize) -> Result<&[u8], ElfError> {
    let end = offset.checked_add(len).ok_or(ElfError::Truncated)?;
    data.get(offset..end).ok_or(ElfError::Truncated)
}

/// Mutable counterpart of [`region`].
pub(crate) fn region_mut(
    data: &mut [u8],
    offset: usize,
    len: usize,
) -> Result<&mut [u8], ElfError> {
    let end = offset.checked_add(len).ok_or(ElfError::Truncated)?;
    data.get_mut(offset..end).ok_or(ElfError::Truncated)
}

/// Sequential field reader over a borrowed byte region.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a, E> {
    data: &'a [u8],
    _order: PhantomData<E>,
}

impl<'a, E: ByteOrder> Reader<'a, E> {
    /// Creates a reader over `len` bytes of `data` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if the region does not fit in `data`.
    pub fn new(data: &'a [u8], offset: usize, len: usize) -> Result<Self, ElfError> {
        Ok(Self {
            data: region(data, offset, len)?,
            _order: PhantomData,
        })
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], ElfError> {
        let (head, rest) = self
            .data
            .split_first_chunk::<N>()
            .ok_or(ElfError::Truncated)?;
        self.data = rest;
        Ok(*head)
    }

    /// Reads `N` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N], ElfError> {
        self.take()
    }

    /// Skips `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn skip(&mut self, n: usize) -> Result<(), ElfError> {
        self.data = self.data.get(n..).ok_or(ElfError::Truncated)?;
        Ok(())
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u8(&mut self) -> Result<u8, ElfError> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    /// Reads a `u16` in this reader's byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u16(&mut self) -> Result<u16, ElfError> {
        self.take().map(E::read_u16)
    }

    /// Reads a `u32` in this reader's byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u32(&mut self) -> Result<u32, ElfError> {
        self.take().map(E::read_u32)
    }

    /// Reads a `u64` in this reader's byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u64(&mut self) -> Result<u64, ElfError> {
        self.take().map(E::read_u64)
    }
}

/// Sequential field writer over an exclusively borrowed byte region.
#[derive(Debug)]
pub struct Writer<'a, E> {
    data: &'a mut [u8],
    _order: PhantomData<E>,
}

impl<'a, E: ByteOrder> Writer<'a, E> {
    /// Creates a writer over `len` bytes of `data` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if the region does not fit in `data`.
    pub fn new(data: &'a mut [u8], offset: usize, len: usize) -> Result<Self, ElfError> {
        Ok(Self {
            data: region_mut(data, offset, len)?,
            _order: PhantomData,
        })
    }

    fn put<const N: usize>(&mut self, bytes: [u8; N]) -> Result<(), ElfError> {
        let data = core::mem::take(&mut self.data);
        let (head, rest) = data
            .split_first_chunk_mut::<N>()
            .ok_or(ElfError::Truncated)?;
        *head = bytes;
        self.data = rest;
        Ok(())
    }

    /// Writes `N` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn bytes<const N: usize>(&mut self, bytes: [u8; N]) -> Result<(), ElfError> {
        self.put(bytes)
    }

    /// Writes `n` zero bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn zero(&mut self, n: usize) -> Result<(), ElfError> {
        let data = core::mem::take(&mut self.data);
        if n > data.len() {
            self.data = data;
            return Err(ElfError::Truncated);
        }
        let (head, rest) = data.split_at_mut(n);
        head.fill(0);
        self.data = rest;
        Ok(())
    }

    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u8(&mut self, value: u8) -> Result<(), ElfError> {
        self.put([value])
    }

    /// Writes a `u16` in this writer's byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u16(&mut self, value: u16) -> Result<(), ElfError> {
        self.put(E::write_u16(value))
    }

    /// Writes a `u32` in this writer's byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u32(&mut self, value: u32) -> Result<(), ElfError> {
        self.put(E::write_u32(value))
    }

    /// Writes a `u64` in this writer's byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    pub fn u64(&mut self, value: u64) -> Result<(), ElfError> {
        self.put(E::write_u64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_respects_byte_order() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let mut le = Reader::<LittleEndian>::new(&data, 0, 4).unwrap();
        let mut be = Reader::<BigEndian>::new(&data, 0, 4).unwrap();
        assert_eq!(le.u32(), Ok(0x7856_3412));
        assert_eq!(be.u32(), Ok(0x1234_5678));
    }

    #[test]
    fn reader_stops_at_region_end() {
        let data = [0u8; 8];
        let mut r = Reader::<LittleEndian>::new(&data, 2, 4).unwrap();
        assert_eq!(r.u16(), Ok(0));
        assert_eq!(r.remaining(), 2);
        assert_eq!(r.u32(), Err(ElfError::Truncated));
    }

    #[test]
    fn region_out_of_bounds() {
        let data = [0u8; 8];
        assert_eq!(
            Reader::<BigEndian>::new(&data, 6, 4).map(|r| r.remaining()),
            Err(ElfError::Truncated)
        );
        assert!(Reader::<BigEndian>::new(&data, usize::MAX, 2).is_err());
    }

    #[test]
    fn writer_fills_region() {
        let mut buf = [0xffu8; 8];
        let mut w = Writer::<BigEndian>::new(&mut buf, 1, 6).unwrap();
        w.u16(0x0102).unwrap();
        w.zero(2).unwrap();
        w.u8(0xaa).unwrap();
        assert_eq!(w.u16(0), Err(ElfError::Truncated));
        assert_eq!(buf, [0xff, 0x01, 0x02, 0x00, 0x00, 0xaa, 0xff, 0xff]);
    }
}
