pub mod lookup;

pub use lookup::{QueryInfo, QuestionDto, RecordFields, ResourceRecordDto, ResponseDocument};
