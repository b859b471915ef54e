use super::{ensure_capacity, read_u16, Name, WireError};
use crate::dns_record::{RecordClass, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl Question {
    pub fn new(name: Name, record_type: RecordType, record_class: RecordClass) -> Self {
        Self {
            name,
            record_type,
            record_class,
        }
    }

    pub fn size(&self) -> usize {
        4 + self.name.size()
    }

    pub fn parse(message: &[u8], start: usize) -> Result<(Self, usize), WireError> {
        let (name, pos) = Name::parse(message, start)?;
        if pos + 4 > message.len() {
            return Err(WireError::Truncated("question type and class"));
        }

        let question = Self {
            name,
            record_type: RecordType::from_u16(read_u16(message, pos)),
            record_class: RecordClass::from_u16(read_u16(message, pos + 2)),
        };
        Ok((question, pos + 4))
    }

    /// Writes the name verbatim (never re-compressed) followed by type and class.
    pub fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
        ensure_capacity(buf, self.size())?;
        let rest = self.name.write_to(buf)?;
        rest[0..2].copy_from_slice(&self.record_type.to_u16().to_be_bytes());
        rest[2..4].copy_from_slice(&self.record_class.to_u16().to_be_bytes());
        Ok(&mut rest[4..])
    }
}

/// Reads exactly `count` questions starting at `start`.
///
/// Before each question the remaining length is checked: an empty remainder
/// means the header promised more questions than the datagram carries, and a
/// remainder at or above `size_limit` means a single question is claiming
/// more than a whole packet.
pub fn parse_questions(
    message: &[u8],
    start: usize,
    count: u16,
    size_limit: usize,
) -> Result<(Vec<Question>, usize), WireError> {
    let expected = usize::from(count);
    let mut questions = Vec::with_capacity(expected);
    let mut pos = start;

    for parsed in 0..expected {
        let remaining = message.len().saturating_sub(pos);
        if remaining == 0 {
            return Err(WireError::QuestionsExhausted { parsed, expected });
        }
        if remaining >= size_limit {
            return Err(WireError::SizeLimitExceeded {
                remaining,
                limit: size_limit,
            });
        }

        let (question, next) = Question::parse(message, pos)?;
        questions.push(question);
        pos = next;
    }

    Ok((questions, pos))
}
