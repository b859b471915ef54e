mod assemble_response;
mod handle_dns_request;
mod resolve_questions;

pub use assemble_response::ResponseAssembler;
pub use handle_dns_request::HandleDnsRequestUseCase;
pub use resolve_questions::ResolveQuestionsUseCase;
