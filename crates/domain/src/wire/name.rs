use super::{ensure_capacity, is_pointer, read_u16, WireError, POINTER_MASK};
use std::fmt;

/// Upper bound on compression pointers followed while decoding one name.
pub const MAX_POINTER_HOPS: usize = 64;

const MAX_LABEL_LEN: usize = 63;

/// A domain name kept in both wire and dotted form.
///
/// `encoded` is exactly what was read from (or will be written to) the wire:
/// length-prefixed labels ending in a zero octet, or ending early in a
/// two-byte compression pointer. `text` is the dotted form with every
/// pointer already resolved against the message it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Name {
    encoded: Vec<u8>,
    text: String,
}

impl Name {
    pub fn root() -> Self {
        Self {
            encoded: vec![0],
            text: String::new(),
        }
    }

    /// Encodes a dotted name (`"example.com"`, trailing dot optional) without compression.
    pub fn from_dotted(name: &str) -> Result<Self, WireError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        let mut encoded = Vec::with_capacity(trimmed.len() + 2);

        if !trimmed.is_empty() {
            for label in trimmed.split('.') {
                if label.is_empty() || label.len() > MAX_LABEL_LEN {
                    return Err(WireError::InvalidLabel(format!(
                        "'{}' in '{}'",
                        label, name
                    )));
                }
                encoded.push(label.len() as u8);
                encoded.extend_from_slice(label.as_bytes());
            }
        }
        encoded.push(0);

        Ok(Self {
            encoded,
            text: trimmed.to_string(),
        })
    }

    /// Decodes the name starting at `start` in `message`.
    ///
    /// Returns the name and the offset of the first byte after it. Labels are
    /// consumed until a zero-length label or a compression pointer; a pointer
    /// ends the inline part and its target is resolved from the start of
    /// `message`, not from the cursor.
    pub fn parse(message: &[u8], start: usize) -> Result<(Self, usize), WireError> {
        let mut encoded = Vec::new();
        let mut text = String::new();
        let mut pos = start;

        loop {
            let length = *message.get(pos).ok_or(WireError::Truncated("name"))?;

            if length == 0 {
                encoded.push(0);
                pos += 1;
                break;
            }

            if is_pointer(length) {
                let target = pointer_target(message, pos)?;
                encoded.extend_from_slice(&message[pos..pos + 2]);
                append_pointed_labels(&mut text, message, target)?;
                pos += 2;
                break;
            }

            if length & POINTER_MASK != 0 {
                return Err(WireError::UnsupportedLabel(length));
            }

            let end = pos + 1 + length as usize;
            if end > message.len() {
                return Err(WireError::Truncated("label"));
            }
            encoded.extend_from_slice(&message[pos..end]);
            push_label(&mut text, &message[pos + 1..end]);
            pos = end;
        }

        Ok((Self { encoded, text }, pos))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    /// Wire size in bytes.
    pub fn size(&self) -> usize {
        self.encoded.len()
    }

    /// True when the wire form ends in a compression pointer.
    pub fn is_compressed(&self) -> bool {
        self.encoded.len() >= 2 && is_pointer(self.encoded[self.encoded.len() - 2])
    }

    pub fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
        ensure_capacity(buf, self.size())?;
        buf[..self.size()].copy_from_slice(&self.encoded);
        Ok(&mut buf[self.size()..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reads the pointer at `pos` and checks that it lands inside `message`.
pub(super) fn pointer_target(message: &[u8], pos: usize) -> Result<usize, WireError> {
    if pos + 2 > message.len() {
        return Err(WireError::Truncated("compression pointer"));
    }
    let offset = usize::from(read_u16(message, pos) & 0x3FFF);
    if offset >= message.len() {
        return Err(WireError::InvalidPointerOffset {
            offset,
            len: message.len(),
        });
    }
    Ok(offset)
}

fn append_pointed_labels(
    text: &mut String,
    message: &[u8],
    mut pos: usize,
) -> Result<(), WireError> {
    let mut hops = 1;

    loop {
        let length = *message.get(pos).ok_or(WireError::Truncated("name"))?;

        if length == 0 {
            return Ok(());
        }

        if is_pointer(length) {
            hops += 1;
            if hops > MAX_POINTER_HOPS {
                return Err(WireError::PointerLoop(MAX_POINTER_HOPS));
            }
            pos = pointer_target(message, pos)?;
            continue;
        }

        if length & POINTER_MASK != 0 {
            return Err(WireError::UnsupportedLabel(length));
        }

        let end = pos + 1 + length as usize;
        if end > message.len() {
            return Err(WireError::Truncated("label"));
        }
        push_label(text, &message[pos + 1..end]);
        pos = end;
    }
}

fn push_label(text: &mut String, label: &[u8]) {
    if !text.is_empty() {
        text.push('.');
    }
    text.push_str(&String::from_utf8_lossy(label));
}
