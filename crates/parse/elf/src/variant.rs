//! Variant resolution: (class, byte order) to one of four concrete layouts.
//!
//! [`Variant`] is the runtime value produced once per file from the
//! identification bytes. [`Layout`] is its compile-time counterpart: the
//! file codec matches on the variant a single time and then runs the header
//! and table codecs monomorphized over one of [`Elf32`] / [`Elf64`], so no
//! per-field or per-entry dispatch remains.

use core::fmt;
use core::marker::PhantomData;

use crate::endian::{BigEndian, ByteOrder, LittleEndian, Reader, Writer};
use crate::header::ElfError;
use crate::ident::{ElfClass, ElfData};

/// Size of the ELF32 file header, identification included.
pub const ELF32_EHDR_SIZE: usize = 52;
/// Size of the ELF64 file header, identification included.
pub const ELF64_EHDR_SIZE: usize = 64;
/// Size of an ELF32 section header entry.
pub const ELF32_SHDR_SIZE: usize = 40;
/// Size of an ELF64 section header entry.
pub const ELF64_SHDR_SIZE: usize = 64;
/// Size of an ELF32 program header entry.
pub const ELF32_PHDR_SIZE: usize = 32;
/// Size of an ELF64 program header entry.
pub const ELF64_PHDR_SIZE: usize = 56;

/// One of the four concrete ELF binary layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// 32-bit, little-endian.
    Elf32Le,
    /// 32-bit, big-endian.
    Elf32Be,
    /// 64-bit, little-endian.
    Elf64Le,
    /// 64-bit, big-endian.
    Elf64Be,
}

impl Variant {
    /// Every variant.
    pub const ALL: [Variant; 4] = [
        Variant::Elf32Le,
        Variant::Elf32Be,
        Variant::Elf64Le,
        Variant::Elf64Be,
    ];

    /// Resolve the layout for an identification's class and byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::UnsupportedClass`] unless `class` is `ELFCLASS32`
    /// or `ELFCLASS64`, then [`ElfError::UnsupportedByteOrder`] unless
    /// `data` is `ELFDATA2LSB` or `ELFDATA2MSB`.
    pub fn resolve(class: ElfClass, data: ElfData) -> Result<Self, ElfError> {
        let is_64 = match class {
            ElfClass::ELF32 => false,
            ElfClass::ELF64 => true,
            _ => return Err(ElfError::UnsupportedClass),
        };
        let big = match data {
            ElfData::LSB => false,
            ElfData::MSB => true,
            _ => return Err(ElfError::UnsupportedByteOrder),
        };
        Ok(match (is_64, big) {
            (false, false) => Self::Elf32Le,
            (false, true) => Self::Elf32Be,
            (true, false) => Self::Elf64Le,
            (true, true) => Self::Elf64Be,
        })
    }

    /// Whether addresses and offsets are 8 bytes wide.
    #[must_use]
    pub const fn is_64(self) -> bool {
        matches!(self, Self::Elf64Le | Self::Elf64Be)
    }

    /// Whether multi-byte fields are most significant byte first.
    #[must_use]
    pub const fn is_big_endian(self) -> bool {
        matches!(self, Self::Elf32Be | Self::Elf64Be)
    }

    /// The `EI_CLASS` code for this variant.
    #[must_use]
    pub const fn class(self) -> ElfClass {
        if self.is_64() {
            ElfClass::ELF64
        } else {
            ElfClass::ELF32
        }
    }

    /// The `EI_DATA` code for this variant.
    #[must_use]
    pub const fn data(self) -> ElfData {
        if self.is_big_endian() {
            ElfData::MSB
        } else {
            ElfData::LSB
        }
    }

    /// Width of address and offset fields in bytes.
    #[must_use]
    pub const fn word_size(self) -> usize {
        if self.is_64() { 8 } else { 4 }
    }

    /// Size of the file header, identification included.
    #[must_use]
    pub const fn header_size(self) -> usize {
        if self.is_64() {
            ELF64_EHDR_SIZE
        } else {
            ELF32_EHDR_SIZE
        }
    }

    /// Size of one section header entry.
    #[must_use]
    pub const fn section_entry_size(self) -> usize {
        if self.is_64() {
            ELF64_SHDR_SIZE
        } else {
            ELF32_SHDR_SIZE
        }
    }

    /// Size of one program header entry.
    #[must_use]
    pub const fn program_entry_size(self) -> usize {
        if self.is_64() {
            ELF64_PHDR_SIZE
        } else {
            ELF32_PHDR_SIZE
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = if self.is_64() { 64 } else { 32 };
        let order = if self.is_big_endian() { "big" } else { "little" };
        write!(f, "ELF{bits} {order}-endian")
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time form of a [`Variant`].
///
/// Implemented only by [`Elf32`] and [`Elf64`]; the codecs are generic over
/// it so the width and byte order of every field is fixed at compile time.
pub trait Layout: sealed::Sealed {
    /// Byte order of multi-byte fields.
    type Order: ByteOrder;

    /// The runtime variant this layout encodes.
    const VARIANT: Variant;

    /// Read an address/offset-sized field, widened to `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    fn read_word(r: &mut Reader<'_, Self::Order>) -> Result<u64, ElfError> {
        if Self::VARIANT.is_64() {
            r.u64()
        } else {
            r.u32().map(u64::from)
        }
    }

    /// Write an address/offset-sized field.
    ///
    /// 32-bit layouts keep only the low 32 bits of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] past the end of the region.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ELF32 words are 32 bits wide; callers keep values in range"
    )]
    fn write_word(w: &mut Writer<'_, Self::Order>, value: u64) -> Result<(), ElfError> {
        if Self::VARIANT.is_64() {
            w.u64(value)
        } else {
            w.u32(value as u32)
        }
    }
}

/// 32-bit layout in byte order `E`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elf32<E>(PhantomData<E>);

/// 64-bit layout in byte order `E`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elf64<E>(PhantomData<E>);

impl<E: ByteOrder> sealed::Sealed for Elf32<E> {}
impl<E: ByteOrder> sealed::Sealed for Elf64<E> {}

impl<E: ByteOrder> Layout for Elf32<E> {
    type Order = E;
    const VARIANT: Variant = if E::BIG {
        Variant::Elf32Be
    } else {
        Variant::Elf32Le
    };
}

impl<E: ByteOrder> Layout for Elf64<E> {
    type Order = E;
    const VARIANT: Variant = if E::BIG {
        Variant::Elf64Be
    } else {
        Variant::Elf64Le
    };
}

/// ELF32 little-endian.
pub type Elf32Le = Elf32<LittleEndian>;
/// ELF32 big-endian.
pub type Elf32Be = Elf32<BigEndian>;
/// ELF64 little-endian.
pub type Elf64Le = Elf64<LittleEndian>;
/// ELF64 big-endian.
pub type Elf64Be = Elf64<BigEndian>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_four_variants() {
        let cases = [
            (ElfClass::ELF32, ElfData::LSB, Variant::Elf32Le),
            (ElfClass::ELF32, ElfData::MSB, Variant::Elf32Be),
            (ElfClass::ELF64, ElfData::LSB, Variant::Elf64Le),
            (ElfClass::ELF64, ElfData::MSB, Variant::Elf64Be),
        ];
        for (class, data, expected) in cases {
            assert_eq!(Variant::resolve(class, data), Ok(expected));
            assert_eq!(expected.class(), class);
            assert_eq!(expected.data(), data);
        }
    }

    #[test]
    fn rejects_unknown_class() {
        for class in [0u8, 3, 254] {
            assert_eq!(
                Variant::resolve(ElfClass(class), ElfData::LSB),
                Err(ElfError::UnsupportedClass)
            );
        }
    }

    #[test]
    fn class_is_checked_before_byte_order() {
        assert_eq!(
            Variant::resolve(ElfClass(3), ElfData(9)),
            Err(ElfError::UnsupportedClass)
        );
    }

    #[test]
    fn rejects_unknown_byte_order() {
        for data in [0u8, 3, 254] {
            assert_eq!(
                Variant::resolve(ElfClass::ELF64, ElfData(data)),
                Err(ElfError::UnsupportedByteOrder)
            );
        }
    }

    #[test]
    fn layout_constants_match_variants() {
        assert_eq!(Elf32Le::VARIANT, Variant::Elf32Le);
        assert_eq!(Elf32Be::VARIANT, Variant::Elf32Be);
        assert_eq!(Elf64Le::VARIANT, Variant::Elf64Le);
        assert_eq!(Elf64Be::VARIANT, Variant::Elf64Be);
    }

    #[test]
    fn fixed_sizes() {
        assert_eq!(Variant::Elf32Be.header_size(), 52);
        assert_eq!(Variant::Elf32Le.section_entry_size(), 40);
        assert_eq!(Variant::Elf32Le.program_entry_size(), 32);
        assert_eq!(Variant::Elf64Be.header_size(), 64);
        assert_eq!(Variant::Elf64Le.section_entry_size(), 64);
        assert_eq!(Variant::Elf64Le.program_entry_size(), 56);
    }

    #[test]
    fn word_width_follows_class() {
        let data = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        let mut r = Reader::<BigEndian>::new(&data, 0, 8).unwrap();
        assert_eq!(Elf32Be::read_word(&mut r), Ok(0x1122_3344));
        let mut r = Reader::<BigEndian>::new(&data, 0, 8).unwrap();
        assert_eq!(Elf64Be::read_word(&mut r), Ok(0x1122_3344_5566_7788));
    }
}
