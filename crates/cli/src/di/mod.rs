use resolver_api_api::AppState;
use resolver_api_application::services::NameserverFallbackResolver;
use resolver_api_application::use_cases::{LookupRecordUseCase, ReverseLookupUseCase};
use resolver_api_domain::Config;
use resolver_api_infrastructure::dns::HickoryNameserverClient;
use std::sync::Arc;
use std::time::Duration;

pub fn build_app_state(config: &Config) -> AppState {
    let client = Arc::new(HickoryNameserverClient::new(Duration::from_millis(
        config.dns.query_timeout_ms,
    )));
    let resolver = Arc::new(NameserverFallbackResolver::new(
        client,
        config.dns.nameservers.clone(),
    ));

    AppState {
        lookup_record: Arc::new(LookupRecordUseCase::new(
            resolver.clone(),
            config.dns.record_types(),
        )),
        reverse_lookup: Arc::new(ReverseLookupUseCase::new(resolver)),
    }
}
