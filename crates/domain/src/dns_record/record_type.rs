use std::fmt;
use std::str::FromStr;

/// DNS RR TYPE values (RFC 1035 §3.2.2, RFC 3596).
///
/// Unrecognised codes are carried through as [`RecordType::Unknown`] so a
/// question can be echoed back byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    AAAA,
    Unknown(u16),
}

const KNOWN_TYPES: [(RecordType, u16, &str); 11] = [
    (RecordType::A, 1, "A"),
    (RecordType::NS, 2, "NS"),
    (RecordType::CNAME, 5, "CNAME"),
    (RecordType::SOA, 6, "SOA"),
    (RecordType::WKS, 11, "WKS"),
    (RecordType::PTR, 12, "PTR"),
    (RecordType::HINFO, 13, "HINFO"),
    (RecordType::MINFO, 14, "MINFO"),
    (RecordType::MX, 15, "MX"),
    (RecordType::TXT, 16, "TXT"),
    (RecordType::AAAA, 28, "AAAA"),
];

impl RecordType {
    fn entry(self) -> Option<&'static (RecordType, u16, &'static str)> {
        KNOWN_TYPES.iter().find(|(known, _, _)| *known == self)
    }

    /// Mnemonic of a known type, `"UNKNOWN"` otherwise.
    pub fn as_str(&self) -> &'static str {
        self.entry().map_or("UNKNOWN", |(_, _, name)| name)
    }

    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::Unknown(code) => code,
            known => known.entry().map_or(0, |(_, code, _)| *code),
        }
    }

    pub fn from_u16(code: u16) -> Self {
        KNOWN_TYPES
            .iter()
            .find(|(_, known, _)| *known == code)
            .map_or(RecordType::Unknown(code), |(record_type, _, _)| *record_type)
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType::from_u16(code)
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        record_type.to_u16()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

/// Accepts mnemonics case-insensitively and the RFC 3597 `TYPEnnn` form.
impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        if let Some(code) = upper.strip_prefix("TYPE") {
            return code
                .parse::<u16>()
                .map(RecordType::from_u16)
                .map_err(|_| format!("Unknown record type: {}", s));
        }
        KNOWN_TYPES
            .iter()
            .find(|(_, _, name)| *name == upper)
            .map(|(record_type, _, _)| *record_type)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
