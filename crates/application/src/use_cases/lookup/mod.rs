mod lookup_record;
mod reverse_lookup;

pub use lookup_record::LookupRecordUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
