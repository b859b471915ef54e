use sentry_dns_domain::{Header, Name, Question, RecordClass, RecordType};

pub fn question(domain: &str, record_type: RecordType) -> Question {
    Question::new(
        Name::from_dotted(domain).unwrap(),
        record_type,
        RecordClass::IN,
    )
}

pub fn request_header(id: u16, question_count: u16) -> Header {
    Header {
        id,
        recursion_desired: true,
        question_count,
        ..Default::default()
    }
}
