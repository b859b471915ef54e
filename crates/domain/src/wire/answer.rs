use super::name::pointer_target;
use super::{
    ensure_capacity, is_pointer, read_u16, Name, Question, WireError, MAX_POINTER_OFFSET,
    POINTER_MASK,
};
use crate::dns_record::{RecordClass, RecordType};
use std::net::Ipv4Addr;

/// Owner name of an answer record: a back-reference or a full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerName {
    /// 14-bit offset into the message being written.
    Pointer(u16),
    Name(Name),
}

impl AnswerName {
    pub fn pointer_to(offset: usize) -> Result<Self, WireError> {
        if offset > MAX_POINTER_OFFSET {
            return Err(WireError::PointerOutOfRange(offset));
        }
        Ok(AnswerName::Pointer(offset as u16))
    }

    pub fn size(&self) -> usize {
        match self {
            AnswerName::Pointer(_) => 2,
            AnswerName::Name(name) => name.size(),
        }
    }

    fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
        match self {
            AnswerName::Pointer(offset) => {
                ensure_capacity(buf, 2)?;
                let pointer = (u16::from(POINTER_MASK) << 8) | (offset & 0x3FFF);
                buf[0..2].copy_from_slice(&pointer.to_be_bytes());
                Ok(&mut buf[2..])
            }
            AnswerName::Name(name) => name.write_to(buf),
        }
    }
}

/// A resource record in the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: AnswerName,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl Answer {
    /// Builds an A record whose owner is a pointer to `question_offset`,
    /// copying type and class from the question it answers.
    pub fn for_question(
        question: &Question,
        question_offset: usize,
        ttl: u32,
        address: Ipv4Addr,
    ) -> Result<Self, WireError> {
        Ok(Self {
            name: AnswerName::pointer_to(question_offset)?,
            record_type: question.record_type,
            record_class: question.record_class,
            ttl,
            rdata: address.octets().to_vec(),
        })
    }

    pub fn rd_length(&self) -> u16 {
        self.rdata.len() as u16
    }

    pub fn size(&self) -> usize {
        10 + self.name.size() + self.rdata.len()
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }

    pub fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
        ensure_capacity(buf, self.size())?;
        let rest = self.name.write_to(buf)?;

        rest[0..2].copy_from_slice(&self.record_type.to_u16().to_be_bytes());
        rest[2..4].copy_from_slice(&self.record_class.to_u16().to_be_bytes());
        rest[4..8].copy_from_slice(&self.ttl.to_be_bytes());
        rest[8..10].copy_from_slice(&self.rd_length().to_be_bytes());
        rest[10..10 + self.rdata.len()].copy_from_slice(&self.rdata);

        Ok(&mut rest[10 + self.rdata.len()..])
    }

    pub fn parse(message: &[u8], start: usize) -> Result<(Self, usize), WireError> {
        let first = *message.get(start).ok_or(WireError::Truncated("answer"))?;
        let (name, pos) = if is_pointer(first) {
            let target = pointer_target(message, start)?;
            (AnswerName::Pointer(target as u16), start + 2)
        } else {
            let (name, pos) = Name::parse(message, start)?;
            (AnswerName::Name(name), pos)
        };

        if pos + 10 > message.len() {
            return Err(WireError::Truncated("answer fixed fields"));
        }
        let rd_length = usize::from(read_u16(message, pos + 8));
        let rdata_start = pos + 10;
        if rdata_start + rd_length > message.len() {
            return Err(WireError::Truncated("answer rdata"));
        }

        let answer = Self {
            name,
            record_type: RecordType::from_u16(read_u16(message, pos)),
            record_class: RecordClass::from_u16(read_u16(message, pos + 2)),
            ttl: u32::from_be_bytes([
                message[pos + 4],
                message[pos + 5],
                message[pos + 6],
                message[pos + 7],
            ]),
            rdata: message[rdata_start..rdata_start + rd_length].to_vec(),
        };
        Ok((answer, rdata_start + rd_length))
    }
}
