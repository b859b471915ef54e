use super::{ensure_capacity, parse_questions, Answer, Header, Question, WireError, HEADER_SIZE};

/// Parses an inbound query: the header, then exactly `question_count` questions.
///
/// `size_limit` is the packet limit the question walk is checked against
/// (see [`parse_questions`]). Any record sections after the questions are
/// ignored.
pub fn parse_message(buf: &[u8], size_limit: usize) -> Result<(Header, Vec<Question>), WireError> {
    let (header, _) = Header::parse(buf)?;
    let (questions, _) = parse_questions(buf, HEADER_SIZE, header.question_count, size_limit)?;
    Ok((header, questions))
}

/// A complete message with header, question and answer sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

impl Message {
    pub fn size(&self) -> usize {
        HEADER_SIZE
            + self.questions.iter().map(Question::size).sum::<usize>()
            + self.answers.iter().map(Answer::size).sum::<usize>()
    }

    pub fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
        ensure_capacity(buf, self.size())?;
        let mut rest = self.header.write_to(buf)?;
        for question in &self.questions {
            rest = question.write_to(rest)?;
        }
        for answer in &self.answers {
            rest = answer.write_to(rest)?;
        }
        Ok(rest)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        let mut buf = vec![0u8; self.size()];
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Parses a message whose answers follow the questions; authority and
    /// additional sections are not decoded.
    pub fn parse(buf: &[u8], size_limit: usize) -> Result<Self, WireError> {
        let (header, _) = Header::parse(buf)?;
        let (questions, mut pos) =
            parse_questions(buf, HEADER_SIZE, header.question_count, size_limit)?;

        let mut answers = Vec::with_capacity(usize::from(header.answer_count));
        for _ in 0..header.answer_count {
            let (answer, next) = Answer::parse(buf, pos)?;
            answers.push(answer);
            pos = next;
        }

        Ok(Self {
            header,
            questions,
            answers,
        })
    }
}
