pub mod record;
pub mod record_type;

pub use record::{LocCoordinate, RecordData, RecordSet};
pub use record_type::RecordType;
