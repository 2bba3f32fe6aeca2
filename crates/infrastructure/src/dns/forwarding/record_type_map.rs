//! Mapping between `resolver_api_domain::RecordType` and `hickory_proto::rr::RecordType`

use resolver_api_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NAPTR => HickoryRecordType::NAPTR,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::TXT => HickoryRecordType::TXT,
            // hickory has no LOC support, it travels as an unknown type code
            RecordType::LOC => HickoryRecordType::from(RecordType::LOC.code()),
        }
    }

    /// Mnemonic for a record type as seen on the wire.
    ///
    /// Known types use their usual name, anything else is `TYPEnnn` (RFC 3597).
    pub fn type_text(hickory_type: HickoryRecordType) -> String {
        let code = u16::from(hickory_type);
        if let Some(known) = RecordType::from_code(code) {
            return known.as_str().to_string();
        }
        match hickory_type {
            HickoryRecordType::Unknown(_) => format!("TYPE{}", code),
            other => other.to_string(),
        }
    }
}
