use sentry_dns_domain::wire::HEADER_SIZE;
use sentry_dns_domain::{Answer, Header, Question, WireError};
use std::net::Ipv4Addr;

/// Serializes the response datagram for one request.
///
/// Questions are echoed verbatim after the header; each answer's owner name
/// is a compression pointer to the offset its question was written at in
/// the response buffer.
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    entry_ttl: u32,
    size_limit: usize,
    echo_questions_without_answers: bool,
}

impl ResponseAssembler {
    pub fn new(entry_ttl: u32, size_limit: usize) -> Self {
        Self {
            entry_ttl,
            size_limit,
            echo_questions_without_answers: false,
        }
    }

    pub fn with_question_echo(mut self, enabled: bool) -> Self {
        self.echo_questions_without_answers = enabled;
        self
    }

    /// `addresses[i]` is the answer slot for `questions[i]`.
    pub fn assemble(
        &self,
        request_header: &Header,
        questions: &[Question],
        addresses: &[Option<Ipv4Addr>],
    ) -> Result<Vec<u8>, WireError> {
        let answer_count = addresses.iter().flatten().count() as u16;
        let header = request_header.to_response(answer_count);

        if answer_count == 0 && !self.echo_questions_without_answers {
            let mut buf = vec![0u8; HEADER_SIZE];
            header.write_to(&mut buf)?;
            return Ok(buf);
        }

        let mut buf = vec![0u8; self.size_limit];
        let total = buf.len();
        let mut rest = header.write_to(&mut buf)?;

        let mut offsets = Vec::with_capacity(questions.len());
        for question in questions {
            offsets.push(total - rest.len());
            rest = question.write_to(rest)?;
        }

        for ((question, offset), address) in questions.iter().zip(&offsets).zip(addresses) {
            if let Some(address) = address {
                let answer = Answer::for_question(question, *offset, self.entry_ttl, *address)?;
                rest = answer.write_to(rest)?;
            }
        }

        let written = total - rest.len();
        buf.truncate(written);
        Ok(buf)
    }
}
