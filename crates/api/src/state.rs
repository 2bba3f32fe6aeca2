use resolver_api_application::use_cases::{LookupRecordUseCase, ReverseLookupUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup_record: Arc<LookupRecordUseCase>,
    pub reverse_lookup: Arc<ReverseLookupUseCase>,
}
