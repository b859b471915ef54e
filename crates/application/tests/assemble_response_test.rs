mod helpers;

use helpers::{question, request_header};
use sentry_dns_application::use_cases::ResponseAssembler;
use sentry_dns_domain::{AnswerName, Message, RecordType, WireError};
use std::net::Ipv4Addr;

const EXAMPLE_IP: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

#[test]
fn test_single_answer_layout() {
    let assembler = ResponseAssembler::new(3600, 512);
    let questions = vec![question("example.com", RecordType::A)];

    let bytes = assembler
        .assemble(&request_header(0x1234, 1), &questions, &[Some(EXAMPLE_IP)])
        .unwrap();

    assert_eq!(bytes.len(), 12 + 17 + 16);
    assert_eq!(&bytes[0..2], &[0x12, 0x34]);
    assert_eq!(bytes[2], 0x81);
    assert_eq!(bytes[3], 0x80);
    assert_eq!(&bytes[4..8], &[0, 1, 0, 1]);
    assert_eq!(
        &bytes[29..],
        &[
            0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x0E, 0x10, 0x00, 0x04, 93, 184,
            216, 34
        ]
    );
}

#[test]
fn test_no_answers_yields_header_only() {
    let assembler = ResponseAssembler::new(3600, 512);
    let questions = vec![question("ads.test", RecordType::A)];

    let bytes = assembler
        .assemble(&request_header(7, 1), &questions, &[None])
        .unwrap();

    assert_eq!(bytes.len(), 12);
    assert_eq!(bytes[3] & 0x0F, 0, "standard query keeps RCODE 0");
    assert_eq!(&bytes[6..8], &[0, 0]);
}

#[test]
fn test_question_echo_without_answers_when_enabled() {
    let assembler = ResponseAssembler::new(3600, 512).with_question_echo(true);
    let questions = vec![question("ads.test", RecordType::A)];

    let bytes = assembler
        .assemble(&request_header(7, 1), &questions, &[None])
        .unwrap();
    let message = Message::parse(&bytes, 512).unwrap();

    assert_eq!(message.questions, questions);
    assert!(message.answers.is_empty());
}

#[test]
fn test_answer_points_at_its_own_question() {
    let assembler = ResponseAssembler::new(60, 512);
    let questions = vec![
        question("ads.test", RecordType::A),
        question("cached.test", RecordType::A),
    ];

    let bytes = assembler
        .assemble(
            &request_header(9, 2),
            &questions,
            &[None, Some(Ipv4Addr::new(10, 0, 0, 5))],
        )
        .unwrap();
    let message = Message::parse(&bytes, 512).unwrap();

    assert_eq!(message.header.answer_count, 1);
    assert_eq!(message.questions.len(), 2);
    let second_question_offset = 12 + questions[0].size();
    assert_eq!(
        message.answers[0].name,
        AnswerName::Pointer(second_question_offset as u16)
    );
    assert_eq!(message.answers[0].ipv4(), Some(Ipv4Addr::new(10, 0, 0, 5)));
    assert_eq!(message.answers[0].ttl, 60);
}

#[test]
fn test_non_standard_opcode_sets_not_implemented() {
    let assembler = ResponseAssembler::new(3600, 512);
    let mut header = request_header(3, 1);
    header.opcode = 2;

    let bytes = assembler
        .assemble(&header, &[question("example.com", RecordType::A)], &[None])
        .unwrap();

    assert_eq!(bytes[3] & 0x0F, 4);
}

#[test]
fn test_response_larger_than_limit_is_refused() {
    let assembler = ResponseAssembler::new(3600, 32);
    let questions = vec![question("example.com", RecordType::A)];

    let result = assembler.assemble(&request_header(1, 1), &questions, &[Some(EXAMPLE_IP)]);

    assert!(matches!(result, Err(WireError::BufferTooSmall { .. })));
}

#[test]
fn test_request_header_is_not_modified() {
    let assembler = ResponseAssembler::new(3600, 512);
    let header = request_header(5, 1);

    assembler
        .assemble(&header, &[question("example.com", RecordType::A)], &[Some(EXAMPLE_IP)])
        .unwrap();

    assert!(!header.query_response);
    assert_eq!(header.answer_count, 0);
}
