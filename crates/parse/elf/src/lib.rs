//! Structural ELF codec.
//!
//! Decodes and encodes the structural layout of ELF object files: the
//! identification prefix, the file header and the section and program
//! header tables, for all four layouts (ELF32/ELF64, little/big-endian).
//! Section and segment *contents* are not interpreted.
//!
//! Safe field extraction only; the crate is `no_std` and needs `alloc` for
//! the decoded tables.
//!
//! # Usage
//!
//! ```
//! use elfshape::{ElfFile, Variant};
//!
//! let bytes = elfshape::encode(&ElfFile::new(Variant::Elf64Le)).expect("empty file");
//! let elf = elfshape::decode(&bytes).expect("valid ELF");
//! assert_eq!(elf.variant(), Variant::Elf64Le);
//! for section in elf.sections() {
//!     println!("{} {}", section.sh_type, section.sh_flags);
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod coding;
pub mod endian;
pub mod file;
pub mod header;
pub mod ident;
pub mod section;
pub mod segment;
pub mod variant;

pub use coding::{Category, CodeName, Coding};
pub use file::{DecodeOptions, ElfFile, decode, decode_with, encode, equals};
pub use header::{ElfError, FileHeader, Machine, ObjectType};
pub use ident::{ELF_MAGIC, ElfClass, ElfData, Identification, OsAbi};
pub use section::{SHN_UNDEF, SHN_XINDEX, SectionFlags, SectionHeader, SectionType};
pub use segment::{ProgramHeader, SegmentFlags, SegmentType};
pub use variant::{Layout, Variant};
