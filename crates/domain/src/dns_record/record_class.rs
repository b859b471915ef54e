use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    /// Internet
    IN,
    /// CHAOS
    CH,
    /// Hesiod
    HS,
    Unknown(u16),
}

impl RecordClass {
    pub fn to_u16(self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::Unknown(code) => code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            other => RecordClass::Unknown(other),
        }
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        RecordClass::from_u16(code)
    }
}

impl From<RecordClass> for u16 {
    fn from(class: RecordClass) -> Self {
        class.to_u16()
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::IN => write!(f, "IN"),
            RecordClass::CH => write!(f, "CH"),
            RecordClass::HS => write!(f, "HS"),
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
        }
    }
}
