//! Symbolic names for enumerated ELF fields.
//!
//! Every enumerated field (class, machine, section type, ...) belongs to a
//! [`Category`] with a static table of registered [`Coding`]s. Lookups run
//! in both directions:
//!
//! - code to name returns the *canonical* name, the first one registered
//!   for that code. Codes nobody registered come back as
//!   [`CodeName::Unknown`] with the raw value intact; vendor and OS ranges
//!   are open-ended, so this is not an error.
//! - name to code is an exact match and accepts every alias.
//!
//! The tables are plain `static` data and are never mutated.

use core::fmt;

mod tables;

/// A registered symbolic name for a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coding {
    /// Symbolic name, e.g. `"EM_X86_64"`.
    pub name: &'static str,
    /// Raw numeric value.
    pub code: u64,
    /// Short human-readable description.
    pub description: &'static str,
}

/// The field an enumerated code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `EI_CLASS`: word size.
    Class,
    /// `EI_DATA`: byte order.
    Data,
    /// `EI_VERSION` / `e_version`.
    Version,
    /// `EI_OSABI`.
    OsAbi,
    /// `e_type`.
    ObjectType,
    /// `e_machine`.
    Machine,
    /// Reserved section header indexes (`SHN_*`).
    SectionIndex,
    /// `sh_type`.
    SectionType,
    /// `sh_flags` bits.
    SectionFlags,
    /// Section group flag bits (`GRP_*`).
    GroupFlags,
    /// `p_type`.
    SegmentType,
    /// `p_flags` bits.
    SegmentFlags,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 12] = [
        Category::Class,
        Category::Data,
        Category::Version,
        Category::OsAbi,
        Category::ObjectType,
        Category::Machine,
        Category::SectionIndex,
        Category::SectionType,
        Category::SectionFlags,
        Category::GroupFlags,
        Category::SegmentType,
        Category::SegmentFlags,
    ];

    /// The registered codes for this category, in registration order.
    #[must_use]
    pub fn codings(self) -> &'static [Coding] {
        match self {
            Self::Class => tables::CLASS,
            Self::Data => tables::DATA,
            Self::Version => tables::VERSION,
            Self::OsAbi => tables::OS_ABI,
            Self::ObjectType => tables::OBJECT_TYPE,
            Self::Machine => tables::MACHINE,
            Self::SectionIndex => tables::SECTION_INDEX,
            Self::SectionType => tables::SECTION_TYPE,
            Self::SectionFlags => tables::SECTION_FLAGS,
            Self::GroupFlags => tables::GROUP_FLAGS,
            Self::SegmentType => tables::SEGMENT_TYPE,
            Self::SegmentFlags => tables::SEGMENT_FLAGS,
        }
    }
}

/// Result of a code-to-name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeName {
    /// The canonical registered name.
    Known(&'static str),
    /// No name is registered; the raw value is preserved.
    Unknown(u64),
}

impl CodeName {
    /// Returns the registered name, if any.
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Known(name) => Some(name),
            Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Unknown(code) => write!(f, "{code:#x}"),
        }
    }
}

/// Returns the canonical entry registered for `code`.
#[must_use]
pub fn lookup(category: Category, code: u64) -> Option<&'static Coding> {
    category.codings().iter().find(|c| c.code == code)
}

/// Returns the canonical name for `code`, or the raw value if unregistered.
#[must_use]
pub fn name_of(category: Category, code: u64) -> CodeName {
    lookup(category, code).map_or(CodeName::Unknown(code), |c| CodeName::Known(c.name))
}

/// Returns the code registered under exactly `name`.
#[must_use]
pub fn code_of(category: Category, name: &str) -> Option<u64> {
    category
        .codings()
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.code)
}

/// Decomposes a bitmask into its registered single-bit names.
///
/// Multi-bit entries such as `SHF_MASKOS` describe ranges, not flags, and
/// are never yielded; bits they cover show up in [`FlagNames::residual`].
#[must_use]
pub fn flag_names(category: Category, value: u64) -> FlagNames {
    FlagNames {
        table: category.codings(),
        pos: 0,
        value,
    }
}

/// Iterator over the names of the flags set in a bitmask.
#[derive(Debug, Clone)]
pub struct FlagNames {
    table: &'static [Coding],
    pos: usize,
    value: u64,
}

impl FlagNames {
    /// Bits of the value not covered by any registered single-bit flag.
    #[must_use]
    pub fn residual(&self) -> u64 {
        let named = self
            .table
            .iter()
            .filter(|c| c.code.is_power_of_two())
            .fold(0, |acc, c| acc | c.code);
        self.value & !named
    }
}

impl Iterator for FlagNames {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.table.get(self.pos) {
            self.pos += 1;
            if entry.code.is_power_of_two() && self.value & entry.code != 0 {
                return Some(entry.name);
            }
        }
        None
    }
}

/// Renders as `NAME|NAME|0xresidual`, or `0` for an empty mask.
impl fmt::Display for FlagNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.clone() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        let residual = self.residual();
        if residual != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{residual:#x}")?;
        } else if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Declares a transparent newtype over a raw enumerated field whose
/// `Display` goes through the registry.
macro_rules! code_newtype {
    ($(#[$meta:meta])* $name:ident($repr:ty) => $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $repr);

        impl $name {
            /// Canonical registry name for this value.
            #[must_use]
            pub fn name(self) -> $crate::coding::CodeName {
                $crate::coding::name_of($category, u64::from(self.0))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.name(), f)
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use code_newtype;
