use super::{ResolveQuestionsUseCase, ResponseAssembler};
use sentry_dns_domain::{DnsRequest, WireError};

/// Resolves a decoded request and returns the datagram to send back.
pub struct HandleDnsRequestUseCase {
    resolver: ResolveQuestionsUseCase,
    assembler: ResponseAssembler,
}

impl HandleDnsRequestUseCase {
    pub fn new(resolver: ResolveQuestionsUseCase, assembler: ResponseAssembler) -> Self {
        Self {
            resolver,
            assembler,
        }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<Vec<u8>, WireError> {
        let addresses = self.resolver.execute(&request.questions).await;
        self.assembler
            .assemble(&request.header, &request.questions, &addresses)
    }
}
