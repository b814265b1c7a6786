//! Stereo descriptors (`@`, `@@`, `@TH1`, `@TB12`, `@OH30`, ...).

use std::fmt;

use crate::smiles::{CharBuffer, SmilesError};

/// Geometry a [`Configuration`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationType {
    /// No stereo descriptor.
    None,
    /// The `@`/`@@` shorthand, whose geometry depends on the atom.
    Implicit,
    Tetrahedral,
    /// Allene-like centers (`@AL1`, `@AL2`).
    ExtendedTetrahedral,
    /// Trigonal centers adjacent to a double bond (`@DB1`, `@DB2`).
    DoubleBond,
    SquarePlanar,
    TrigonalBipyramidal,
    Octahedral,
}

impl ConfigurationType {
    /// Number of neighbors (including an implicit hydrogen or lone pair)
    /// a center of this geometry has; `None` for the shorthand and `None`.
    pub fn neighbor_count(self) -> Option<usize> {
        match self {
            ConfigurationType::Tetrahedral | ConfigurationType::ExtendedTetrahedral => Some(4),
            ConfigurationType::DoubleBond => Some(3),
            ConfigurationType::SquarePlanar => Some(4),
            ConfigurationType::TrigonalBipyramidal => Some(5),
            ConfigurationType::Octahedral => Some(6),
            ConfigurationType::None | ConfigurationType::Implicit => None,
        }
    }
}

/// Every stereo descriptor SMILES can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Configuration {
    #[default]
    Unknown,
    Anticlockwise,
    Clockwise,
    TH1,
    TH2,
    AL1,
    AL2,
    DB1,
    DB2,
    SP1,
    SP2,
    SP3,
    TB1,
    TB2,
    TB3,
    TB4,
    TB5,
    TB6,
    TB7,
    TB8,
    TB9,
    TB10,
    TB11,
    TB12,
    TB13,
    TB14,
    TB15,
    TB16,
    TB17,
    TB18,
    TB19,
    TB20,
    OH1,
    OH2,
    OH3,
    OH4,
    OH5,
    OH6,
    OH7,
    OH8,
    OH9,
    OH10,
    OH11,
    OH12,
    OH13,
    OH14,
    OH15,
    OH16,
    OH17,
    OH18,
    OH19,
    OH20,
    OH21,
    OH22,
    OH23,
    OH24,
    OH25,
    OH26,
    OH27,
    OH28,
    OH29,
    OH30,
}

static TABLE: [(Configuration, ConfigurationType, &str); 62] = [
    (Configuration::Unknown, ConfigurationType::None, ""),
    (Configuration::Anticlockwise, ConfigurationType::Implicit, "@"),
    (Configuration::Clockwise, ConfigurationType::Implicit, "@@"),
    (Configuration::TH1, ConfigurationType::Tetrahedral, "@TH1"),
    (Configuration::TH2, ConfigurationType::Tetrahedral, "@TH2"),
    (Configuration::AL1, ConfigurationType::ExtendedTetrahedral, "@AL1"),
    (Configuration::AL2, ConfigurationType::ExtendedTetrahedral, "@AL2"),
    (Configuration::DB1, ConfigurationType::DoubleBond, "@DB1"),
    (Configuration::DB2, ConfigurationType::DoubleBond, "@DB2"),
    (Configuration::SP1, ConfigurationType::SquarePlanar, "@SP1"),
    (Configuration::SP2, ConfigurationType::SquarePlanar, "@SP2"),
    (Configuration::SP3, ConfigurationType::SquarePlanar, "@SP3"),
    (Configuration::TB1, ConfigurationType::TrigonalBipyramidal, "@TB1"),
    (Configuration::TB2, ConfigurationType::TrigonalBipyramidal, "@TB2"),
    (Configuration::TB3, ConfigurationType::TrigonalBipyramidal, "@TB3"),
    (Configuration::TB4, ConfigurationType::TrigonalBipyramidal, "@TB4"),
    (Configuration::TB5, ConfigurationType::TrigonalBipyramidal, "@TB5"),
    (Configuration::TB6, ConfigurationType::TrigonalBipyramidal, "@TB6"),
    (Configuration::TB7, ConfigurationType::TrigonalBipyramidal, "@TB7"),
    (Configuration::TB8, ConfigurationType::TrigonalBipyramidal, "@TB8"),
    (Configuration::TB9, ConfigurationType::TrigonalBipyramidal, "@TB9"),
    (Configuration::TB10, ConfigurationType::TrigonalBipyramidal, "@TB10"),
    (Configuration::TB11, ConfigurationType::TrigonalBipyramidal, "@TB11"),
    (Configuration::TB12, ConfigurationType::TrigonalBipyramidal, "@TB12"),
    (Configuration::TB13, ConfigurationType::TrigonalBipyramidal, "@TB13"),
    (Configuration::TB14, ConfigurationType::TrigonalBipyramidal, "@TB14"),
    (Configuration::TB15, ConfigurationType::TrigonalBipyramidal, "@TB15"),
    (Configuration::TB16, ConfigurationType::TrigonalBipyramidal, "@TB16"),
    (Configuration::TB17, ConfigurationType::TrigonalBipyramidal, "@TB17"),
    (Configuration::TB18, ConfigurationType::TrigonalBipyramidal, "@TB18"),
    (Configuration::TB19, ConfigurationType::TrigonalBipyramidal, "@TB19"),
    (Configuration::TB20, ConfigurationType::TrigonalBipyramidal, "@TB20"),
    (Configuration::OH1, ConfigurationType::Octahedral, "@OH1"),
    (Configuration::OH2, ConfigurationType::Octahedral, "@OH2"),
    (Configuration::OH3, ConfigurationType::Octahedral, "@OH3"),
    (Configuration::OH4, ConfigurationType::Octahedral, "@OH4"),
    (Configuration::OH5, ConfigurationType::Octahedral, "@OH5"),
    (Configuration::OH6, ConfigurationType::Octahedral, "@OH6"),
    (Configuration::OH7, ConfigurationType::Octahedral, "@OH7"),
    (Configuration::OH8, ConfigurationType::Octahedral, "@OH8"),
    (Configuration::OH9, ConfigurationType::Octahedral, "@OH9"),
    (Configuration::OH10, ConfigurationType::Octahedral, "@OH10"),
    (Configuration::OH11, ConfigurationType::Octahedral, "@OH11"),
    (Configuration::OH12, ConfigurationType::Octahedral, "@OH12"),
    (Configuration::OH13, ConfigurationType::Octahedral, "@OH13"),
    (Configuration::OH14, ConfigurationType::Octahedral, "@OH14"),
    (Configuration::OH15, ConfigurationType::Octahedral, "@OH15"),
    (Configuration::OH16, ConfigurationType::Octahedral, "@OH16"),
    (Configuration::OH17, ConfigurationType::Octahedral, "@OH17"),
    (Configuration::OH18, ConfigurationType::Octahedral, "@OH18"),
    (Configuration::OH19, ConfigurationType::Octahedral, "@OH19"),
    (Configuration::OH20, ConfigurationType::Octahedral, "@OH20"),
    (Configuration::OH21, ConfigurationType::Octahedral, "@OH21"),
    (Configuration::OH22, ConfigurationType::Octahedral, "@OH22"),
    (Configuration::OH23, ConfigurationType::Octahedral, "@OH23"),
    (Configuration::OH24, ConfigurationType::Octahedral, "@OH24"),
    (Configuration::OH25, ConfigurationType::Octahedral, "@OH25"),
    (Configuration::OH26, ConfigurationType::Octahedral, "@OH26"),
    (Configuration::OH27, ConfigurationType::Octahedral, "@OH27"),
    (Configuration::OH28, ConfigurationType::Octahedral, "@OH28"),
    (Configuration::OH29, ConfigurationType::Octahedral, "@OH29"),
    (Configuration::OH30, ConfigurationType::Octahedral, "@OH30"),
];

static ALL: [Configuration; 62] = [
    Configuration::Unknown, Configuration::Anticlockwise, Configuration::Clockwise, Configuration::TH1, Configuration::TH2, Configuration::AL1,
    Configuration::AL2, Configuration::DB1, Configuration::DB2, Configuration::SP1, Configuration::SP2, Configuration::SP3,
    Configuration::TB1, Configuration::TB2, Configuration::TB3, Configuration::TB4, Configuration::TB5, Configuration::TB6,
    Configuration::TB7, Configuration::TB8, Configuration::TB9, Configuration::TB10, Configuration::TB11, Configuration::TB12,
    Configuration::TB13, Configuration::TB14, Configuration::TB15, Configuration::TB16, Configuration::TB17, Configuration::TB18,
    Configuration::TB19, Configuration::TB20, Configuration::OH1, Configuration::OH2, Configuration::OH3, Configuration::OH4,
    Configuration::OH5, Configuration::OH6, Configuration::OH7, Configuration::OH8, Configuration::OH9, Configuration::OH10,
    Configuration::OH11, Configuration::OH12, Configuration::OH13, Configuration::OH14, Configuration::OH15, Configuration::OH16,
    Configuration::OH17, Configuration::OH18, Configuration::OH19, Configuration::OH20, Configuration::OH21, Configuration::OH22,
    Configuration::OH23, Configuration::OH24, Configuration::OH25, Configuration::OH26, Configuration::OH27, Configuration::OH28,
    Configuration::OH29, Configuration::OH30,
];

const TH_OFFSET: usize = Configuration::TH1 as usize;
const AL_OFFSET: usize = Configuration::AL1 as usize;
const DB_OFFSET: usize = Configuration::DB1 as usize;
const SP_OFFSET: usize = Configuration::SP1 as usize;
const TB_OFFSET: usize = Configuration::TB1 as usize;
const OH_OFFSET: usize = Configuration::OH1 as usize;

impl Configuration {
    pub fn values() -> &'static [Configuration] {
        &ALL
    }

    pub fn kind(self) -> ConfigurationType {
        TABLE[self as usize].1
    }

    /// Text of the descriptor, e.g. `@TB7`; empty for `Unknown`.
    pub fn symbol(self) -> &'static str {
        TABLE[self as usize].2
    }

    pub fn is_shorthand(self) -> bool {
        self.kind() == ConfigurationType::Implicit
    }

    /// The `@`/`@@` spelling of an explicit descriptor where one exists.
    ///
    /// The first descriptor of each pair (`TH1`, `AL1`, `DB1`, `TB1`,
    /// `OH1`) is `@` and the second `@@`; everything else has no shorthand
    /// and maps to `Unknown`.
    pub fn shorthand(self) -> Configuration {
        use Configuration::*;
        match self {
            Anticlockwise | Clockwise => self,
            TH1 | AL1 | DB1 | TB1 | OH1 => Anticlockwise,
            TH2 | AL2 | DB2 | TB2 | OH2 => Clockwise,
            _ => Unknown,
        }
    }

    /// The explicit descriptor `@`/`@@` stands for on a center of `kind`.
    pub fn explicit_for(self, kind: ConfigurationType) -> Configuration {
        use Configuration::*;
        let anticlockwise = match self {
            Anticlockwise => true,
            Clockwise => false,
            _ => return self,
        };
        match (kind, anticlockwise) {
            (ConfigurationType::Tetrahedral, true) => TH1,
            (ConfigurationType::Tetrahedral, false) => TH2,
            (ConfigurationType::ExtendedTetrahedral, true) => AL1,
            (ConfigurationType::ExtendedTetrahedral, false) => AL2,
            (ConfigurationType::DoubleBond, true) => DB1,
            (ConfigurationType::DoubleBond, false) => DB2,
            (ConfigurationType::TrigonalBipyramidal, true) => TB1,
            (ConfigurationType::TrigonalBipyramidal, false) => TB2,
            (ConfigurationType::Octahedral, true) => OH1,
            (ConfigurationType::Octahedral, false) => OH2,
            _ => Unknown,
        }
    }

    /// The mirror descriptor for the parity-based geometries
    /// (`@`↔`@@`, `TH1`↔`TH2`, `AL1`↔`AL2`, `DB1`↔`DB2`).
    pub fn inverse(self) -> Configuration {
        use Configuration::*;
        match self {
            Anticlockwise => Clockwise,
            Clockwise => Anticlockwise,
            TH1 => TH2,
            TH2 => TH1,
            AL1 => AL2,
            AL2 => AL1,
            DB1 => DB2,
            DB2 => DB1,
            _ => self,
        }
    }

    /// 1-based number of the descriptor within its geometry, e.g. `7` for
    /// `TB7`; `0` for the shorthand and `Unknown`.
    pub fn number(self) -> usize {
        let i = self as usize;
        match self.kind() {
            ConfigurationType::Tetrahedral => i - TH_OFFSET + 1,
            ConfigurationType::ExtendedTetrahedral => i - AL_OFFSET + 1,
            ConfigurationType::DoubleBond => i - DB_OFFSET + 1,
            ConfigurationType::SquarePlanar => i - SP_OFFSET + 1,
            ConfigurationType::TrigonalBipyramidal => i - TB_OFFSET + 1,
            ConfigurationType::Octahedral => i - OH_OFFSET + 1,
            ConfigurationType::None | ConfigurationType::Implicit => 0,
        }
    }

    /// Descriptor number `n` (1-based) of geometry `kind`.
    pub fn of(kind: ConfigurationType, n: usize) -> Option<Configuration> {
        let (offset, max) = match kind {
            ConfigurationType::Tetrahedral => (TH_OFFSET, 2),
            ConfigurationType::ExtendedTetrahedral => (AL_OFFSET, 2),
            ConfigurationType::DoubleBond => (DB_OFFSET, 2),
            ConfigurationType::SquarePlanar => (SP_OFFSET, 3),
            ConfigurationType::TrigonalBipyramidal => (TB_OFFSET, 20),
            ConfigurationType::Octahedral => (OH_OFFSET, 30),
            ConfigurationType::None | ConfigurationType::Implicit => return None,
        };
        if (1..=max).contains(&n) {
            Some(ALL[offset + n - 1])
        } else {
            None
        }
    }

    /// Read a descriptor starting at `@`, consuming the longest valid token.
    ///
    /// Returns `Unknown` without consuming anything when the buffer is not
    /// at `@`.
    pub fn read(buf: &mut CharBuffer) -> Result<Configuration, SmilesError> {
        let start = buf.position();
        if !buf.next_is('@') {
            return Ok(Configuration::Unknown);
        }
        if buf.next_is('@') {
            return Ok(Configuration::Clockwise);
        }
        let (kind, digits) = match buf.peek() {
            Some('T') => {
                buf.next_char();
                if buf.next_is('H') {
                    (ConfigurationType::Tetrahedral, 1)
                } else if buf.next_is('B') {
                    (ConfigurationType::TrigonalBipyramidal, 2)
                } else {
                    return Err(invalid(buf, start));
                }
            }
            Some('A') => {
                buf.next_char();
                if !buf.next_is('L') {
                    return Err(invalid(buf, start));
                }
                (ConfigurationType::ExtendedTetrahedral, 1)
            }
            Some('D') => {
                buf.next_char();
                if !buf.next_is('B') {
                    return Err(invalid(buf, start));
                }
                (ConfigurationType::DoubleBond, 1)
            }
            Some('S') => {
                buf.next_char();
                if !buf.next_is('P') {
                    return Err(invalid(buf, start));
                }
                (ConfigurationType::SquarePlanar, 1)
            }
            Some('O') => {
                buf.next_char();
                if !buf.next_is('H') {
                    return Err(invalid(buf, start));
                }
                (ConfigurationType::Octahedral, 2)
            }
            _ => return Ok(Configuration::Anticlockwise),
        };
        let n = buf.number(digits).ok_or_else(|| invalid(buf, start))?;
        Configuration::of(kind, n as usize).ok_or_else(|| invalid(buf, start))
    }
}

fn invalid(buf: &CharBuffer, start: usize) -> SmilesError {
    SmilesError::InvalidConfiguration {
        pos: start,
        text: buf.substring(start),
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Unknown => f.write_str("no descriptor"),
            c => f.write_str(c.symbol()),
        }
    }
}
