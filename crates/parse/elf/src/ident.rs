//! The `e_ident` prefix.
//!
//! The first 16 bytes of every ELF file are byte-order independent and
//! declare how the rest of the file is encoded.

use crate::coding::{Category, code_newtype};
use crate::endian::{LittleEndian, Reader, Writer};
use crate::header::ElfError;
use crate::variant::Variant;

/// ELF magic bytes: `\x7fELF`.
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Size of the identification prefix (`EI_NIDENT`).
pub const EI_NIDENT: usize = 16;

/// Reserved padding after `EI_ABIVERSION`.
const EI_PAD_LEN: usize = 7;

code_newtype! {
    /// `EI_CLASS`: the file's word size.
    ElfClass(u8) => Category::Class
}

impl ElfClass {
    /// Invalid class.
    pub const NONE: Self = Self(0);
    /// 32-bit objects.
    pub const ELF32: Self = Self(1);
    /// 64-bit objects.
    pub const ELF64: Self = Self(2);
}

code_newtype! {
    /// `EI_DATA`: the file's byte order.
    ElfData(u8) => Category::Data
}

impl ElfData {
    /// Invalid data encoding.
    pub const NONE: Self = Self(0);
    /// Little-endian.
    pub const LSB: Self = Self(1);
    /// Big-endian.
    pub const MSB: Self = Self(2);
}

code_newtype! {
    /// `EI_OSABI`: operating system / ABI extensions.
    OsAbi(u8) => Category::OsAbi
}

impl OsAbi {
    /// No extensions or unspecified (System V).
    pub const NONE: Self = Self(0);
    /// NetBSD.
    pub const NETBSD: Self = Self(2);
    /// Linux / GNU.
    pub const LINUX: Self = Self(3);
    /// FreeBSD.
    pub const FREEBSD: Self = Self(9);
    /// OpenBSD.
    pub const OPENBSD: Self = Self(12);
    /// Standalone (embedded) application.
    pub const STANDALONE: Self = Self(255);
}

/// `EV_CURRENT`, the only defined format version.
pub const EV_CURRENT: u8 = 1;

/// Decoded identification prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identification {
    /// Magic bytes; always [`ELF_MAGIC`] after a successful decode.
    pub magic: [u8; 4],
    /// Word size.
    pub class: ElfClass,
    /// Byte order.
    pub data: ElfData,
    /// Format version (`EI_VERSION`).
    pub version: u8,
    /// OS/ABI tag.
    pub os_abi: OsAbi,
    /// ABI version.
    pub abi_version: u8,
}

impl Identification {
    /// Encoded size in bytes.
    pub const SIZE: usize = EI_NIDENT;

    /// A current-version, System V identification for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            magic: ELF_MAGIC,
            class: variant.class(),
            data: variant.data(),
            version: EV_CURRENT,
            os_abi: OsAbi::NONE,
            abi_version: 0,
        }
    }

    /// Decode the identification prefix at the start of `data`.
    ///
    /// Class and byte order are not validated here; see [`Self::variant`].
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::BadMagic`] if the first four bytes are not
    /// [`ELF_MAGIC`], and [`ElfError::Truncated`] if fewer than
    /// [`EI_NIDENT`] bytes are available.
    pub fn decode(data: &[u8]) -> Result<Self, ElfError> {
        if data.len() >= ELF_MAGIC.len() && data[..ELF_MAGIC.len()] != ELF_MAGIC {
            return Err(ElfError::BadMagic);
        }

        let mut r = Reader::<LittleEndian>::new(data, 0, EI_NIDENT)?;
        let magic = r.bytes::<4>()?;
        let class = ElfClass(r.u8()?);
        let data = ElfData(r.u8()?);
        let version = r.u8()?;
        let os_abi = OsAbi(r.u8()?);
        let abi_version = r.u8()?;
        r.skip(EI_PAD_LEN)?;

        Ok(Self {
            magic,
            class,
            data,
            version,
            os_abi,
            abi_version,
        })
    }

    /// Encode into the first [`EI_NIDENT`] bytes of `buf`, zeroing the padding.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::Truncated`] if `buf` is too short.
    pub fn encode(&self, buf: &mut [u8]) -> Result<(), ElfError> {
        let mut w = Writer::<LittleEndian>::new(buf, 0, EI_NIDENT)?;
        w.bytes(self.magic)?;
        w.u8(self.class.0)?;
        w.u8(self.data.0)?;
        w.u8(self.version)?;
        w.u8(self.os_abi.0)?;
        w.u8(self.abi_version)?;
        w.zero(EI_PAD_LEN)
    }

    /// Resolve the concrete layout declared by this identification.
    ///
    /// # Errors
    ///
    /// See [`Variant::resolve`].
    pub fn variant(&self) -> Result<Variant, ElfError> {
        Variant::resolve(self.class, self.data)
    }
}
