use super::{ensure_capacity, read_u16, WireError};

pub const HEADER_SIZE: usize = 12;

/// RCODE 4, set on responses to any non-standard opcode.
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

const QR_BIT: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const AA_BIT: u16 = 0x0400;
const TC_BIT: u16 = 0x0200;
const RD_BIT: u16 = 0x0100;
const RA_BIT: u16 = 0x0080;
const RESERVED_MASK: u16 = 0x0070;
const RCODE_MASK: u16 = 0x000F;

/// Fixed 12-byte DNS message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub query_response: bool,
    /// 4 bits
    pub opcode: u8,
    pub authoritative_answer: bool,
    pub truncation: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// 3 bits
    pub reserved: u8,
    /// 4 bits
    pub response_code: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub const fn size(&self) -> usize {
        HEADER_SIZE
    }

    /// Reads a header from the front of `buf` and returns it with the rest of the buffer.
    pub fn parse(buf: &[u8]) -> Result<(Self, &[u8]), WireError> {
        if buf.len() < HEADER_SIZE {
            return Err(WireError::Truncated("header"));
        }

        let flags = read_u16(buf, 2);
        let header = Self {
            id: read_u16(buf, 0),
            query_response: flags & QR_BIT != 0,
            opcode: ((flags & OPCODE_MASK) >> 11) as u8,
            authoritative_answer: flags & AA_BIT != 0,
            truncation: flags & TC_BIT != 0,
            recursion_desired: flags & RD_BIT != 0,
            recursion_available: flags & RA_BIT != 0,
            reserved: ((flags & RESERVED_MASK) >> 4) as u8,
            response_code: (flags & RCODE_MASK) as u8,
            question_count: read_u16(buf, 4),
            answer_count: read_u16(buf, 6),
            authority_count: read_u16(buf, 8),
            additional_count: read_u16(buf, 10),
        };

        Ok((header, &buf[HEADER_SIZE..]))
    }

    pub fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
        ensure_capacity(buf, HEADER_SIZE)?;

        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2..4].copy_from_slice(&self.flags().to_be_bytes());
        buf[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        buf[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        buf[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        buf[10..12].copy_from_slice(&self.additional_count.to_be_bytes());

        Ok(&mut buf[HEADER_SIZE..])
    }

    /// Derives the response header for this request header.
    ///
    /// The request header is left untouched. QR and RA are always set, RCODE
    /// becomes NOTIMP only for a non-zero opcode, and the authority and
    /// additional counts are cleared because those sections are never written.
    pub fn to_response(&self, answer_count: u16) -> Header {
        let mut response = *self;
        response.query_response = true;
        response.recursion_available = true;
        if self.opcode != 0 {
            response.response_code = RCODE_NOT_IMPLEMENTED;
        }
        response.answer_count = answer_count;
        response.authority_count = 0;
        response.additional_count = 0;
        response
    }

    fn flags(&self) -> u16 {
        let mut flags = 0u16;
        if self.query_response {
            flags |= QR_BIT;
        }
        flags |= (u16::from(self.opcode) << 11) & OPCODE_MASK;
        if self.authoritative_answer {
            flags |= AA_BIT;
        }
        if self.truncation {
            flags |= TC_BIT;
        }
        if self.recursion_desired {
            flags |= RD_BIT;
        }
        if self.recursion_available {
            flags |= RA_BIT;
        }
        flags |= (u16::from(self.reserved) << 4) & RESERVED_MASK;
        flags |= u16::from(self.response_code) & RCODE_MASK;
        flags
    }
}
