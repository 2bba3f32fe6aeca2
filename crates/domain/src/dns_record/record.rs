use std::net::IpAddr;

/// Latitude or longitude as `[degrees, minutes, seconds, milliseconds]`.
/// The hemisphere (S/W) is carried as a negative degrees value.
pub type LocCoordinate = [i64; 4];

/// Type-specific payload of one resource record.
///
/// Exactly one variant per record; kinds without a projection are `Unsupported`.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordData {
    /// A / AAAA
    Address(IpAddr),
    /// CNAME / NS / PTR
    Target(String),
    Mx {
        preference: u16,
        exchange: String,
    },
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    /// TXT in presentation form (quoted character-strings).
    Txt(String),
    Naptr {
        order: u16,
        preference: u16,
        flags: String,
        service: String,
        regexp: String,
        replacement: String,
    },
    Loc {
        altitude_cm: i64,
        latitude: LocCoordinate,
        longitude: LocCoordinate,
    },
    Unsupported,
}

/// Records sharing name, type and class, with one TTL for the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub name: String,
    pub record_type: String,
    pub class: String,
    pub ttl: u32,
    pub records: Vec<RecordData>,
}

impl RecordSet {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        class: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            class: class.into(),
            ttl,
            records: Vec::new(),
        }
    }

    pub fn with_record(mut self, data: RecordData) -> Self {
        self.records.push(data);
        self
    }

    pub fn is_same_set(&self, name: &str, record_type: &str, class: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            && self.record_type == record_type
            && self.class == class
    }

    /// Adds a member, lowering the set TTL to the smallest member TTL.
    pub fn push(&mut self, ttl: u32, data: RecordData) {
        self.ttl = self.ttl.min(ttl);
        self.records.push(data);
    }
}
