#![allow(dead_code)]

/// Builds raw query datagrams byte by byte, independent of the codec under test.
pub struct QueryPacketBuilder {
    id: u16,
    flags: u16,
    question_count: Option<u16>,
    body: Vec<u8>,
}

impl QueryPacketBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            question_count: None,
            body: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides QDCOUNT; by default it counts the questions added.
    pub fn question_count(mut self, count: u16) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn question(mut self, domain: &str, qtype: u16) -> Self {
        self.body.extend(encode_name(domain));
        self.body.extend_from_slice(&qtype.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.question_count = Some(self.question_count.unwrap_or(0) + 1);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(12 + self.body.len());
        packet.extend_from_slice(&self.id.to_be_bytes());
        packet.extend_from_slice(&self.flags.to_be_bytes());
        packet.extend_from_slice(&self.question_count.unwrap_or(0).to_be_bytes());
        packet.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
        packet.extend(self.body);
        packet
    }
}

pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}
