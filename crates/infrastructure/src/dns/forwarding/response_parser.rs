use super::record_data::{name_text, record_data};
use super::record_type_map::RecordTypeMapper;
use crate::dns::transport::TransportError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use resolver_api_domain::{DnsAnswer, DnsQuery, Question, RecordSet, ResponseFlags};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, TransportError> {
        Message::from_vec(response_bytes).map_err(|e| TransportError::Malformed(e.to_string()))
    }

    /// Converts a parsed reply into a [`DnsAnswer`], grouping every section
    /// into record sets.
    pub fn to_answer(message: &Message, query: &DnsQuery) -> DnsAnswer {
        let question = match message.queries().first() {
            Some(q) => Question {
                name: name_text(q.name()),
                record_type: RecordTypeMapper::type_text(q.query_type()),
                class: q.query_class().to_string(),
            },
            None => Question {
                name: absolute(&query.name),
                record_type: query.record_type.as_str().to_string(),
                class: "IN".to_string(),
            },
        };

        let answer = DnsAnswer {
            id: message.id(),
            question,
            answer: Self::group_rrsets(message.answers()),
            authority: Self::group_rrsets(message.name_servers()),
            additional: Self::group_rrsets(message.additionals()),
            flags: ResponseFlags {
                qr: message.message_type() == MessageType::Response,
                aa: message.authoritative(),
                tc: message.truncated(),
                rd: message.recursion_desired(),
                ra: message.recursion_available(),
                ad: message.authentic_data(),
                cd: message.checking_disabled(),
            },
            rcode: Self::rcode_to_status(message.response_code()),
        };

        debug!(
            id = answer.id,
            rcode = %answer.rcode,
            answer = answer.answer.len(),
            authority = answer.authority.len(),
            additional = answer.additional.len(),
            "DNS response parsed"
        );

        answer
    }

    /// Groups records by name, type and class in first-seen order.
    /// The set TTL is the smallest member TTL.
    pub fn group_rrsets(records: &[Record]) -> Vec<RecordSet> {
        let mut sets: Vec<RecordSet> = Vec::new();

        for record in records {
            let name = name_text(record.name());
            let record_type = RecordTypeMapper::type_text(record.record_type());
            let class = record.dns_class().to_string();
            let data = record_data(record);

            match sets
                .iter_mut()
                .find(|set| set.is_same_set(&name, &record_type, &class))
            {
                Some(set) => set.push(record.ttl(), data),
                None => sets.push(
                    RecordSet::new(name, record_type, class, record.ttl()).with_record(data),
                ),
            }
        }

        sets
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> String {
        let text = match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            other => return u16::from(other).to_string(),
        };
        text.to_string()
    }
}

fn absolute(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
