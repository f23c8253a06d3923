//! Registered codes for every [`Category`](super::Category).
//!
//! Entries are listed in registration order; where several names share a
//! code the first one listed is canonical.

use super::Coding;

const fn c(name: &'static str, code: u64, description: &'static str) -> Coding {
    Coding {
        name,
        code,
        description,
    }
}

pub(super) static CLASS: &[Coding] = &[
    c("ELFCLASSNONE", 0, "Invalid class"),
    c("ELFCLASS32", 1, "32-bit objects"),
    c("ELFCLASS64", 2, "64-bit objects"),
];

pub(super) static DATA: &[Coding] = &[
    c("ELFDATANONE", 0, "Invalid data encoding"),
    c("ELFDATA2LSB", 1, "least significant byte first"),
    c("ELFDATA2MSB", 2, "most significant byte first"),
];

pub(super) static VERSION: &[Coding] = &[
    c("EV_NONE", 0, "Invalid version"),
    c("EV_CURRENT", 1, "Current version"),
];

pub(super) static OS_ABI: &[Coding] = &[
    c("ELFOSABI_NONE", 0, "No extensions or unspecified"),
    c("ELFOSABI_HPUX", 1, "Hewlett-Packard HP-UX"),
    c("ELFOSABI_NETBSD", 2, "NetBSD"),
    c("ELFOSABI_LINUX", 3, "Linux"),
    c("ELFOSABI_SOLARIS", 6, "Sun Solaris"),
    c("ELFOSABI_AIX", 7, "AIX"),
    c("ELFOSABI_IRIX", 8, "IRIX"),
    c("ELFOSABI_FREEBSD", 9, "FreeBSD"),
    c("ELFOSABI_TRU64", 10, "Compaq TRU64 UNIX"),
    c("ELFOSABI_MODESTO", 11, "Novell Modesto"),
    c("ELFOSABI_OPENBSD", 12, "Open BSD"),
    c("ELFOSABI_OPENVMS", 13, "Open VMS"),
    c("ELFOSABI_NSK", 14, "Hewlett-Packard Non-Stop Kernel"),
    c("ELFOSABI_AROS", 15, "Amiga Research OS"),
    c("ELFOSABI_FENIXOS", 16, "The FenixOS highly scalable multi-core OS"),
    c("ELFOSABI_GNU", 3, "GNU (alias of ELFOSABI_LINUX)"),
    c("ELFOSABI_ARM_AEABI", 64, "ARM EABI"),
    c("ELFOSABI_ARM", 97, "ARM"),
    c("ELFOSABI_STANDALONE", 255, "Standalone (embedded) application"),
];

pub(super) static OBJECT_TYPE: &[Coding] = &[
    c("ET_NONE", 0, "No file type"),
    c("ET_REL", 1, "Relocatable file"),
    c("ET_EXEC", 2, "Executable file"),
    c("ET_DYN", 3, "Shared object file"),
    c("ET_CORE", 4, "Core file"),
    c("ET_LOOS", 0xfe00, "Operating system-specific"),
    c("ET_HIOS", 0xfeff, "Operating system-specific"),
    c("ET_LOPROC", 0xff00, "Processor-specific"),
    c("ET_HIPROC", 0xffff, "Processor-specific"),
];

pub(super) static MACHINE: &[Coding] = &[
    c("EM_NONE", 0, "No machine"),
    c("EM_M32", 1, "AT&T WE 32100"),
    c("EM_SPARC", 2, "SPARC"),
    c("EM_386", 3, "Intel 80386"),
    c("EM_68K", 4, "Motorola 68000"),
    c("EM_88K", 5, "Motorola 88000"),
    c("EM_486", 6, "Reserved for future use (was EM_486)"),
    c("EM_860", 7, "Intel 80860"),
    c("EM_MIPS", 8, "MIPS I Architecture"),
    c("EM_S370", 9, "IBM System/370 Processor"),
    c("EM_MIPS_RS3_LE", 10, "MIPS RS3000 Little-endian"),
    c("EM_PARISC", 15, "Hewlett-Packard PA-RISC"),
    c("EM_VPP500", 17, "Fujitsu VPP500"),
    c("EM_SPARC32PLUS", 18, "Enhanced instruction set SPARC"),
    c("EM_960", 19, "Intel 80960"),
    c("EM_PPC", 20, "PowerPC"),
    c("EM_PPC64", 21, "64-bit PowerPC"),
    c("EM_S390", 22, "IBM System/390 Processor"),
    c("EM_SPU", 23, "IBM SPU/SPC"),
    c("EM_V800", 36, "NEC V800"),
    c("EM_FR20", 37, "Fujitsu FR20"),
    c("EM_RH32", 38, "TRW RH-32"),
    c("EM_RCE", 39, "Motorola RCE"),
    c("EM_ARM", 40, "Advanced RISC Machines ARM"),
    c("EM_ALPHA", 41, "Digital Alpha"),
    c("EM_SH", 42, "Hitachi SH"),
    c("EM_SPARCV9", 43, "SPARC Version 9"),
    c("EM_TRICORE", 44, "Siemens TriCore embedded processor"),
    c("EM_ARC", 45, "Argonaut RISC Core, Argonaut Technologies Inc."),
    c("EM_H8_300", 46, "Hitachi H8/300"),
    c("EM_H8_300H", 47, "Hitachi H8/300H"),
    c("EM_H8S", 48, "Hitachi H8S"),
    c("EM_H8_500", 49, "Hitachi H8/500"),
    c("EM_IA_64", 50, "Intel IA-64 processor architecture"),
    c("EM_MIPS_X", 51, "Stanford MIPS-X"),
    c("EM_COLDFIRE", 52, "Motorola ColdFire"),
    c("EM_68HC12", 53, "Motorola M68HC12"),
    c("EM_MMA", 54, "Fujitsu MMA Multimedia Accelerator"),
    c("EM_PCP", 55, "Siemens PCP"),
    c("EM_NCPU", 56, "Sony nCPU embedded RISC processor"),
    c("EM_NDR1", 57, "Denso NDR1 microprocessor"),
    c("EM_STARCORE", 58, "Motorola Star*Core processor"),
    c("EM_ME16", 59, "Toyota ME16 processor"),
    c("EM_ST100", 60, "STMicroelectronics ST100 processor"),
    c("EM_TINYJ", 61, "Advanced Logic Corp. TinyJ embedded processor family"),
    c("EM_X86_64", 62, "AMD x86-64 architecture"),
    c("EM_PDSP", 63, "Sony DSP Processor"),
    c("EM_PDP10", 64, "Digital Equipment Corp. PDP-10"),
    c("EM_PDP11", 65, "Digital Equipment Corp. PDP-11"),
    c("EM_FX66", 66, "Siemens FX66 microcontroller"),
    c("EM_ST9PLUS", 67, "STMicroelectronics ST9+ 8/16 bit microcontroller"),
    c("EM_ST7", 68, "STMicroelectronics ST7 8-bit microcontroller"),
    c("EM_68HC16", 69, "Motorola MC68HC16 Microcontroller"),
    c("EM_68HC11", 70, "Motorola MC68HC11 Microcontroller"),
    c("EM_68HC08", 71, "Motorola MC68HC08 Microcontroller"),
    c("EM_68HC05", 72, "Motorola MC68HC05 Microcontroller"),
    c("EM_SVX", 73, "Silicon Graphics SVx"),
    c("EM_ST19", 74, "STMicroelectronics ST19 8-bit microcontroller"),
    c("EM_VAX", 75, "Digital VAX"),
    c("EM_CRIS", 76, "Axis Communications 32-bit embedded processor"),
    c("EM_JAVELIN", 77, "Infineon Technologies 32-bit embedded processor"),
    c("EM_FIREPATH", 78, "Element 14 64-bit DSP Processor"),
    c("EM_ZSP", 79, "LSI Logic 16-bit DSP Processor"),
    c("EM_MMIX", 80, "Donald Knuth's educational 64-bit processor"),
    c("EM_HUANY", 81, "Harvard University machine-independent object files"),
    c("EM_PRISM", 82, "SiTera Prism"),
    c("EM_AVR", 83, "Atmel AVR 8-bit microcontroller"),
    c("EM_FR30", 84, "Fujitsu FR30"),
    c("EM_D10V", 85, "Mitsubishi D10V"),
    c("EM_D30V", 86, "Mitsubishi D30V"),
    c("EM_V850", 87, "NEC v850"),
    c("EM_M32R", 88, "Mitsubishi M32R"),
    c("EM_MN10300", 89, "Matsushita MN10300"),
    c("EM_MN10200", 90, "Matsushita MN10200"),
    c("EM_PJ", 91, "picoJava"),
    c("EM_OPENRISC", 92, "OpenRISC 32-bit embedded processor"),
    c("EM_ARC_COMPACT", 93, "ARC International ARCompact processor (old spelling/synonym: EM_ARC_A5)"),
    c("EM_XTENSA", 94, "Tensilica Xtensa Architecture"),
    c("EM_VIDEOCORE", 95, "Alphamosaic VideoCore processor"),
    c("EM_TMM_GPP", 96, "Thompson Multimedia General Purpose Processor"),
    c("EM_NS32K", 97, "National Semiconductor 32000 series"),
    c("EM_TPC", 98, "Tenor Network TPC processor"),
    c("EM_SNP1K", 99, "Trebia SNP 1000 processor"),
    c("EM_ST200", 100, "STMicroelectronics (www.st.com) ST200 microcontroller"),
    c("EM_IP2K", 101, "Ubicom IP2xxx microcontroller family"),
    c("EM_MAX", 102, "MAX Processor"),
    c("EM_CR", 103, "National Semiconductor CompactRISC microprocessor"),
    c("EM_F2MC16", 104, "Fujitsu F2MC16"),
    c("EM_MSP430", 105, "Texas Instruments embedded microcontroller msp430"),
    c("EM_BLACKFIN", 106, "Analog Devices Blackfin (DSP) processor"),
    c("EM_SE_C33", 107, "S1C33 Family of Seiko Epson processors"),
    c("EM_SEP", 108, "Sharp embedded microprocessor"),
    c("EM_ARCA", 109, "Arca RISC Microprocessor"),
    c("EM_UNICORE", 110, "Microprocessor series from PKU-Unity Ltd. and MPRC of Peking University"),
    c("EM_EXCESS", 111, "eXcess: 16/32/64-bit configurable embedded CPU"),
    c("EM_DXP", 112, "Icera Semiconductor Inc. Deep Execution Processor"),
    c("EM_ALTERA_NIOS2", 113, "Altera Nios II soft-core processor"),
    c("EM_CRX", 114, "National Semiconductor CompactRISC CRX microprocessor"),
    c("EM_XGATE", 115, "Motorola XGATE embedded processor"),
    c("EM_C166", 116, "Infineon C16x/XC16x processor"),
    c("EM_M16C", 117, "Renesas M16C series microprocessors"),
    c("EM_DSPIC30F", 118, "Microchip Technology dsPIC30F Digital Signal Controller"),
    c("EM_CE", 119, "Freescale Communication Engine RISC core"),
    c("EM_M32C", 120, "Renesas M32C series microprocessors"),
    c("EM_TSK3000", 131, "Altium TSK3000 core"),
    c("EM_RS08", 132, "Freescale RS08 embedded processor"),
    c("EM_ECOG2", 134, "Cyan Technology eCOG2 microprocessor"),
    c("EM_SCORE7", 135, "Sunplus S+core7 RISC processor"),
    c("EM_DSP24", 136, "New Japan Radio (NJR) 24-bit DSP Processor"),
    c("EM_VIDEOCORE3", 137, "Broadcom VideoCore III processor"),
    c("EM_LATTICEMICO32", 138, "RISC processor for Lattice FPGA architecture"),
    c("EM_SE_C17", 139, "Seiko Epson C17 family"),
    c("EM_TI_C6000", 140, "The Texas Instruments TMS320C6000 DSP family"),
    c("EM_TI_C2000", 141, "The Texas Instruments TMS320C2000 DSP family"),
    c("EM_TI_C5500", 142, "The Texas Instruments TMS320C55x DSP family"),
    c("EM_MMDSP_PLUS", 160, "STMicroelectronics 64bit VLIW Data Signal Processor"),
    c("EM_CYPRESS_M8C", 161, "Cypress M8C microprocessor"),
    c("EM_R32C", 162, "Renesas R32C series microprocessors"),
    c("EM_TRIMEDIA", 163, "NXP Semiconductors TriMedia architecture family"),
    c("EM_QDSP6", 164, "QUALCOMM DSP6 Processor"),
    c("EM_8051", 165, "Intel 8051 and variants"),
    c("EM_STXP7X", 166, "STMicroelectronics STxP7x family of configurable and extensible RISC processors"),
    c("EM_NDS32", 167, "Andes Technology compact code size embedded RISC processor family"),
    c("EM_ECOG1", 168, "Cyan Technology eCOG1X family"),
    c("EM_ECOG1X", 168, "Cyan Technology eCOG1X family"),
    c("EM_MAXQ30", 169, "Dallas Semiconductor MAXQ30 Core Micro-controllers"),
    c("EM_XIMO16", 170, "New Japan Radio (NJR) 16-bit DSP Processor"),
    c("EM_MANIK", 171, "M2000 Reconfigurable RISC Microprocessor"),
    c("EM_CRAYNV2", 172, "Cray Inc. NV2 vector architecture"),
    c("EM_RX", 173, "Renesas RX family"),
    c("EM_METAG", 174, "Imagination Technologies META processor architecture"),
    c("EM_MCST_ELBRUS", 175, "MCST Elbrus general purpose hardware architecture"),
    c("EM_ECOG16", 176, "Cyan Technology eCOG16 family"),
    c("EM_CR16", 177, "National Semiconductor CompactRISC CR16 16-bit microprocessor"),
    c("EM_ETPU", 178, "Freescale Extended Time Processing Unit"),
    c("EM_SLE9X", 179, "Infineon Technologies SLE9X core"),
    c("EM_AVR32", 185, "Atmel Corporation 32-bit microprocessor family"),
    c("EM_STM8", 186, "STMicroeletronics STM8 8-bit microcontroller"),
    c("EM_TILE64", 187, "Tilera TILE64 multicore architecture family"),
    c("EM_TILEPRO", 188, "Tilera TILEPro multicore architecture family"),
    c("EM_MICROBLAZE", 189, "Xilinx MicroBlaze 32-bit RISC soft processor core"),
    c("EM_CUDA", 190, "NVIDIA CUDA architecture"),
    c("EM_TILEGX", 191, "Tilera TILE-Gx multicore architecture family"),
    c("EM_CLOUDSHIELD", 192, "CloudShield architecture family"),
    c("EM_COREA_1ST", 193, "KIPO-KAIST Core-A 1st generation processor family"),
    c("EM_COREA_2ND", 194, "KIPO-KAIST Core-A 2nd generation processor family"),
    c("EM_AARCH64", 183, "ARM 64-bit architecture (AArch64)"),
    c("EM_RISCV", 243, "RISC-V"),
    c("EM_BPF", 247, "Linux BPF"),
    c("EM_LOONGARCH", 258, "LoongArch"),
];

pub(super) static SECTION_INDEX: &[Coding] = &[
    c("SHN_UNDEF", 0, "Undefined or meaningless section reference"),
    c("SHN_LORESERVE", 0xff00, "Lower bound of reserved indexes"),
    c("SHN_LOPROC", 0xff00, "Start of processor-specific indexes"),
    c("SHN_HIPROC", 0xff1f, "End of processor-specific indexes"),
    c("SHN_LOOS", 0xff20, "Start of OS-specific indexes"),
    c("SHN_HIOS", 0xff3f, "End of OS-specific indexes"),
    c("SHN_ABS", 0xfff1, "Absolute values"),
    c("SHN_COMMON", 0xfff2, "Common symbols"),
    c("SHN_XINDEX", 0xffff, "Index escape; real index stored elsewhere"),
    c("SHN_HIRESERVE", 0xffff, "Upper bound of reserved indexes"),
];

pub(super) static SECTION_TYPE: &[Coding] = &[
    c("SHT_NULL", 0, "Inactive section header"),
    c("SHT_PROGBITS", 1, "Program-defined contents"),
    c("SHT_SYMTAB", 2, "Symbol table"),
    c("SHT_STRTAB", 3, "String table"),
    c("SHT_RELA", 4, "Relocations with addends"),
    c("SHT_HASH", 5, "Symbol hash table"),
    c("SHT_DYNAMIC", 6, "Dynamic linking information"),
    c("SHT_NOTE", 7, "Notes"),
    c("SHT_NOBITS", 8, "Occupies no file space"),
    c("SHT_REL", 9, "Relocations without addends"),
    c("SHT_SHLIB", 10, "Reserved"),
    c("SHT_DYNSYM", 11, "Dynamic linking symbols"),
    c("SHT_INIT_ARRAY", 14, "Initialization function pointers"),
    c("SHT_FINI_ARRAY", 15, "Termination function pointers"),
    c("SHT_PREINIT_ARRAY", 16, "Pre-initialization function pointers"),
    c("SHT_GROUP", 17, "Section group"),
    c("SHT_SYMTAB_SHNDX", 18, "Extended section indexes for a symbol table"),
    c("SHT_GNU_ATTRIBUTES", 0x6fff_fff5, "GNU object attributes"),
    c("SHT_GNU_HASH", 0x6fff_fff6, "GNU-style hash table"),
    c("SHT_GNU_LIBLIST", 0x6fff_fff7, "Prelink library list"),
    c("SHT_GNU_VERDEF", 0x6fff_fffd, "Version definitions"),
    c("SHT_GNU_VERNEED", 0x6fff_fffe, "Version requirements"),
    c("SHT_GNU_VERSYM", 0x6fff_ffff, "Version symbol table"),
    c("SHT_LOOS", 0x6000_0000, "Start of OS-specific types"),
    c("SHT_HIOS", 0x6fff_ffff, "End of OS-specific types"),
    c("SHT_LOPROC", 0x7000_0000, "Start of processor-specific types"),
    c("SHT_HIPROC", 0x7fff_ffff, "End of processor-specific types"),
    c("SHT_LOUSER", 0x8000_0000, "Start of application-specific types"),
    c("SHT_HIUSER", 0xffff_ffff, "End of application-specific types"),
];

pub(super) static SECTION_FLAGS: &[Coding] = &[
    c("SHF_WRITE", 0x1, "Writable during execution"),
    c("SHF_ALLOC", 0x2, "Occupies memory during execution"),
    c("SHF_EXECINSTR", 0x4, "Executable instructions"),
    c("SHF_MERGE", 0x10, "Mergeable data"),
    c("SHF_STRINGS", 0x20, "NUL-terminated strings"),
    c("SHF_INFO_LINK", 0x40, "sh_info holds a section index"),
    c("SHF_LINK_ORDER", 0x80, "Ordering requirements for link editors"),
    c("SHF_OS_NONCONFORMING", 0x100, "OS-specific processing required"),
    c("SHF_GROUP", 0x200, "Member of a section group"),
    c("SHF_TLS", 0x400, "Thread-local storage"),
    c("SHF_COMPRESSED", 0x800, "Compressed contents"),
    c("SHF_MASKOS", 0x0ff0_0000, "OS-specific bits"),
    c("SHF_MASKPROC", 0xf000_0000, "Processor-specific bits"),
];

pub(super) static GROUP_FLAGS: &[Coding] = &[
    c("GRP_COMDAT", 0x1, "COMDAT group"),
    c("GRP_MASKOS", 0x0ff0_0000, "OS-specific bits"),
    c("GRP_MASKPROC", 0xf000_0000, "Processor-specific bits"),
];

pub(super) static SEGMENT_TYPE: &[Coding] = &[
    c("PT_NULL", 0, "Unused entry"),
    c("PT_LOAD", 1, "Loadable segment"),
    c("PT_DYNAMIC", 2, "Dynamic linking information"),
    c("PT_INTERP", 3, "Interpreter path"),
    c("PT_NOTE", 4, "Auxiliary information"),
    c("PT_SHLIB", 5, "Reserved"),
    c("PT_PHDR", 6, "Program header table"),
    c("PT_TLS", 7, "Thread-local storage template"),
    c("PT_GNU_EH_FRAME", 0x6474_e550, "Exception handling frame table"),
    c("PT_GNU_STACK", 0x6474_e551, "Stack executability"),
    c("PT_GNU_RELRO", 0x6474_e552, "Read-only after relocation"),
    c("PT_GNU_PROPERTY", 0x6474_e553, "GNU property notes"),
    c("PT_LOOS", 0x6000_0000, "Start of OS-specific types"),
    c("PT_HIOS", 0x6fff_ffff, "End of OS-specific types"),
    c("PT_LOPROC", 0x7000_0000, "Start of processor-specific types"),
    c("PT_HIPROC", 0x7fff_ffff, "End of processor-specific types"),
];

pub(super) static SEGMENT_FLAGS: &[Coding] = &[
    c("PF_X", 0x1, "Execute"),
    c("PF_W", 0x2, "Write"),
    c("PF_R", 0x4, "Read"),
    c("PF_MASKOS", 0x0ff0_0000, "OS-specific bits"),
    c("PF_MASKPROC", 0xf000_0000, "Processor-specific bits"),
];
