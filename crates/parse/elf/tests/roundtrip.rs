//! Whole-file decode/encode across all four layouts.

use elfshape::{
    DecodeOptions, ElfError, ElfFile, Machine, ObjectType, ProgramHeader, SectionFlags,
    SectionHeader, SectionType, SegmentFlags, SegmentType, Variant,
};

/// A small relocatable-looking file with both tables populated.
fn populated(variant: Variant) -> ElfFile {
    let entry = u16::try_from(variant.section_entry_size()).unwrap();
    let phdr_size = u64::try_from(variant.program_entry_size()).unwrap();
    let mut elf = ElfFile::new(variant);

    let header = elf.header_mut();
    header.e_type = ObjectType::DYN;
    header.e_machine = if variant.is_big_endian() {
        Machine::PPC
    } else {
        Machine::ARM
    };
    header.e_entry = 0x1_0400;
    header.e_flags = 0x0500_0000;
    header.e_phoff = u64::try_from(variant.header_size()).unwrap();
    header.e_phnum = 2;
    header.e_shoff = 0x800;
    header.e_shnum = 4;
    header.e_shentsize = entry;
    header.e_shstrndx = 3;

    elf.segments_mut().extend([
        ProgramHeader {
            p_type: SegmentType::PHDR,
            p_flags: SegmentFlags::R,
            p_offset: header_offset(variant),
            p_vaddr: 0x1_0000 + header_offset(variant),
            p_paddr: 0x1_0000 + header_offset(variant),
            p_filesz: 2 * phdr_size,
            p_memsz: 2 * phdr_size,
            p_align: 4,
        },
        ProgramHeader {
            p_type: SegmentType::LOAD,
            p_flags: SegmentFlags::R | SegmentFlags::X,
            p_offset: 0,
            p_vaddr: 0x1_0000,
            p_paddr: 0x1_0000,
            p_filesz: 0x600,
            p_memsz: 0x700,
            p_align: 0x1000,
        },
    ]);

    elf.sections_mut().extend([
        SectionHeader::default(),
        SectionHeader {
            sh_name: 1,
            sh_type: SectionType::PROGBITS,
            sh_flags: SectionFlags::ALLOC | SectionFlags::EXECINSTR,
            sh_addr: 0x1_0400,
            sh_offset: 0x400,
            sh_size: 0x200,
            sh_addralign: 4,
            ..SectionHeader::default()
        },
        SectionHeader {
            sh_name: 7,
            sh_type: SectionType::NOBITS,
            sh_flags: SectionFlags::WRITE | SectionFlags::ALLOC,
            sh_addr: 0x1_0600,
            sh_offset: 0x600,
            sh_size: 0x100,
            sh_addralign: 8,
            ..SectionHeader::default()
        },
        SectionHeader {
            sh_name: 12,
            sh_type: SectionType::STRTAB,
            sh_offset: 0x600,
            sh_size: 0x16,
            sh_addralign: 1,
            ..SectionHeader::default()
        },
    ]);
    elf
}

fn header_offset(variant: Variant) -> u64 {
    u64::try_from(variant.header_size()).unwrap()
}

#[test]
fn round_trip_all_variants() {
    for variant in Variant::ALL {
        let elf = populated(variant);
        let bytes = elfshape::encode(&elf).expect("encodable");
        assert_eq!(bytes.len(), 0x800 + 4 * variant.section_entry_size());

        let back = elfshape::decode_with(&bytes, DecodeOptions::strict())
            .unwrap_or_else(|e| panic!("{variant}: {e}"));
        assert!(elfshape::equals(&elf, &back), "{variant} round trip");
        assert_eq!(back.string_table_index(), Some(3));
    }
}

#[test]
fn variants_encode_differently() {
    let encoded: Vec<Vec<u8>> = Variant::ALL
        .iter()
        .map(|&v| elfshape::encode(&populated(v)).unwrap())
        .collect();
    // Identification bytes 4 and 5 carry class and byte order.
    assert_eq!(&encoded[0][4..6], &[1, 1]);
    assert_eq!(&encoded[1][4..6], &[1, 2]);
    assert_eq!(&encoded[2][4..6], &[2, 1]);
    assert_eq!(&encoded[3][4..6], &[2, 2]);
    // e_type follows the identification in the file's byte order.
    assert_eq!(&encoded[0][16..18], &[3, 0]);
    assert_eq!(&encoded[1][16..18], &[0, 3]);
}

#[test]
fn escaped_section_count() {
    for variant in Variant::ALL {
        let mut elf = populated(variant);
        elf.header_mut().e_shnum = 0;
        elf.sections_mut()[0].sh_size = 4;

        let bytes = elfshape::encode(&elf).unwrap();
        let back = elfshape::decode(&bytes).unwrap();
        assert_eq!(back.sections().len(), 4, "{variant}");
        assert_eq!(back.header().e_shnum, 0);
        assert_eq!(back, elf);
    }
}

#[test]
fn escaped_count_of_zero_yields_empty_table() {
    let mut elf = populated(Variant::Elf32Le);
    elf.header_mut().e_shnum = 0;
    elf.sections_mut().truncate(1);

    let bytes = elfshape::encode(&elf).unwrap();
    let back = elfshape::decode(&bytes).unwrap();
    assert!(back.sections().is_empty());
    assert_eq!(back.segments().len(), 2);

    // Entry 0 must still be there to read the count from.
    let again = elfshape::encode(&back).unwrap();
    assert_eq!(again.len(), 0x800 + 40);
    assert_eq!(elfshape::decode(&again), Ok(back));
}

#[test]
fn big_endian_program_header_order() {
    let elf = populated(Variant::Elf64Be);
    let bytes = elfshape::encode(&elf).unwrap();
    // Second program header starts at 64 + 56; p_flags is its second word.
    let load = 64 + 56;
    assert_eq!(&bytes[load..load + 4], &1u32.to_be_bytes());
    assert_eq!(&bytes[load + 4..load + 8], &5u32.to_be_bytes());

    let elf = populated(Variant::Elf32Be);
    let bytes = elfshape::encode(&elf).unwrap();
    // ELF32 keeps p_flags in the seventh word.
    let load = 52 + 32;
    assert_eq!(&bytes[load + 24..load + 28], &5u32.to_be_bytes());
}

#[test]
fn rejects_non_elf_input() {
    assert_eq!(
        elfshape::decode(b"\x7fELG\x02\x01\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00"),
        Err(ElfError::BadMagic)
    );
    assert_eq!(elfshape::decode(b"#!/bin/sh\n"), Err(ElfError::BadMagic));
    assert_eq!(elfshape::decode(b"\x7fEL"), Err(ElfError::Truncated));
}

#[test]
fn rejects_unknown_class() {
    let mut bytes = elfshape::encode(&populated(Variant::Elf64Le)).unwrap();
    bytes[4] = 3;
    assert_eq!(elfshape::decode(&bytes), Err(ElfError::UnsupportedClass));

    bytes[4] = 2;
    bytes[5] = 0;
    assert_eq!(elfshape::decode(&bytes), Err(ElfError::UnsupportedByteOrder));
}

#[test]
fn lenient_and_strict_decoding() {
    let mut elf = populated(Variant::Elf32Le);
    elf.header_mut().e_shentsize = 48;
    let bytes = elfshape::encode(&elf).unwrap();

    let lenient = elfshape::decode(&bytes).expect("lenient decode honors entry size");
    assert_eq!(lenient, elf);
    assert_eq!(
        elfshape::decode_with(&bytes, DecodeOptions::strict()),
        Err(ElfError::InconsistentTable)
    );
}

#[test]
fn unknown_codes_and_flag_bits_survive() {
    let mut elf = populated(Variant::Elf64Le);
    elf.header_mut().e_machine = Machine(0x9026);
    elf.sections_mut()[1].sh_type = SectionType(0x6fff_fff0);
    elf.sections_mut()[1].sh_flags = SectionFlags::from_bits_retain(0x8000_0000_0000_0006);
    elf.segments_mut()[1].p_flags = SegmentFlags::from_bits_retain(0x0010_0005);

    let back = elfshape::decode(&elfshape::encode(&elf).unwrap()).unwrap();
    assert_eq!(back, elf);
    assert_eq!(back.header().e_machine.to_string(), "0x9026");
    assert_eq!(back.sections()[1].sh_flags.bits(), 0x8000_0000_0000_0006);
}

#[test]
fn re_encoding_normalizes_gaps() {
    let elf = populated(Variant::Elf64Le);
    let mut bytes = elfshape::encode(&elf).unwrap();
    // Bytes outside the header and tables are not part of the structure.
    bytes[0x400..0x600].fill(0x90);
    bytes.extend_from_slice(&[0xaa; 32]);

    let decoded = elfshape::decode(&bytes).unwrap();
    assert_eq!(decoded, elf);
    let again = elfshape::encode(&decoded).unwrap();
    assert_ne!(again, bytes);
    assert_eq!(elfshape::decode(&again), Ok(elf));
}
