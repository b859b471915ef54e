//! DNS wire codec (RFC 1035 §4.1).
//!
//! Every writer follows the same cursor-threading convention: it checks that
//! the destination holds at least `size()` bytes, writes big-endian, and
//! returns the unconsumed tail so the next writer can continue from there.

mod answer;
mod errors;
mod header;
mod message;
mod name;
mod question;

pub use answer::{Answer, AnswerName};
pub use errors::WireError;
pub use header::{Header, HEADER_SIZE, RCODE_NOT_IMPLEMENTED};
pub use message::{parse_message, Message};
pub use name::{Name, MAX_POINTER_HOPS};
pub use question::{parse_questions, Question};

/// Top two bits of a length octet that mark a compression pointer.
pub const POINTER_MASK: u8 = 0xC0;

/// Largest offset a 14-bit compression pointer can address.
pub const MAX_POINTER_OFFSET: usize = 0x3FFF;

#[inline]
pub(crate) fn is_pointer(octet: u8) -> bool {
    octet & POINTER_MASK == POINTER_MASK
}

#[inline]
pub(crate) fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([buf[at], buf[at + 1]])
}

#[inline]
pub(crate) fn ensure_capacity(buf: &[u8], needed: usize) -> Result<(), WireError> {
    if buf.len() < needed {
        return Err(WireError::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }
    Ok(())
}
