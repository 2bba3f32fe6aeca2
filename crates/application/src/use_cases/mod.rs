pub mod lookup;

pub use lookup::{LookupRecordUseCase, ReverseLookupUseCase};
