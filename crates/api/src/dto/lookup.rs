//! DNS-over-JSON response document (draft-bortzmeyer-dns-json).

use resolver_api_application::services::Resolution;
use resolver_api_domain::{LocCoordinate, Question, RecordData, RecordSet};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseDocument {
    pub query: QueryInfo,
    pub question_section: QuestionDto,
    pub answer_section: Vec<ResourceRecordDto>,
    pub additional_section: Vec<ResourceRecordDto>,
    pub authority_section: Vec<ResourceRecordDto>,
    pub return_code: String,
    #[serde(rename = "ID")]
    pub id: u16,
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "TC")]
    pub tc: bool,
    #[serde(rename = "RD")]
    pub rd: bool,
    #[serde(rename = "RA")]
    pub ra: bool,
    #[serde(rename = "AD")]
    pub ad: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInfo {
    pub server: String,
    /// Seconds, as a float.
    pub duration: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QuestionDto {
    pub qname: String,
    pub qtype: String,
    pub qclass: String,
}

/// One resource record: the owner fields of its set plus type-specific fields.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResourceRecordDto {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(flatten)]
    pub fields: RecordFields,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RecordFields {
    #[serde(rename_all = "PascalCase")]
    Address { address: String },
    #[serde(rename_all = "PascalCase")]
    Target { target: String },
    #[serde(rename_all = "PascalCase")]
    Mx {
        preference: u16,
        mail_exchanger: String,
    },
    #[serde(rename_all = "PascalCase")]
    Soa {
        master_server_name: String,
        maintainer_name: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        negative_ttl: u32,
    },
    #[serde(rename_all = "PascalCase")]
    Txt { txt_data: String },
    #[serde(rename_all = "PascalCase")]
    Naptr {
        flags: String,
        order: u16,
        service: String,
        preference: u16,
        regexp: String,
        replacement: String,
    },
    #[serde(rename_all = "PascalCase")]
    Loc {
        /// Metres.
        altitude: f64,
        longitude: LocCoordinate,
        latitude: LocCoordinate,
    },
    Empty {},
}

impl ResponseDocument {
    pub fn from_resolution(resolution: &Resolution) -> Self {
        let answer = &resolution.answer;
        let flags = answer.flags.to_text();
        let has_flag = |flag: &str| flags.split(' ').any(|token| token == flag);

        Self {
            query: QueryInfo {
                server: resolution.nameserver.clone(),
                duration: resolution.duration.as_secs_f64(),
            },
            question_section: QuestionDto::from(&answer.question),
            answer_section: flatten_sets(&answer.answer),
            additional_section: flatten_sets(&answer.additional),
            authority_section: flatten_sets(&answer.authority),
            return_code: answer.rcode.clone(),
            id: answer.id,
            aa: has_flag("AA"),
            tc: has_flag("TC"),
            rd: has_flag("RD"),
            ra: has_flag("RA"),
            ad: has_flag("AD"),
        }
    }
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        Self {
            qname: question.name.clone(),
            qtype: question.record_type.clone(),
            qclass: question.class.clone(),
        }
    }
}

impl From<&RecordData> for RecordFields {
    fn from(data: &RecordData) -> Self {
        match data {
            RecordData::Address(ip) => Self::Address {
                address: ip.to_string(),
            },
            RecordData::Target(target) => Self::Target {
                target: target.clone(),
            },
            RecordData::Mx {
                preference,
                exchange,
            } => Self::Mx {
                preference: *preference,
                mail_exchanger: exchange.clone(),
            },
            RecordData::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => Self::Soa {
                master_server_name: mname.clone(),
                maintainer_name: rname.clone(),
                serial: *serial,
                refresh: *refresh,
                retry: *retry,
                expire: *expire,
                negative_ttl: *minimum,
            },
            RecordData::Txt(text) => Self::Txt {
                txt_data: text.clone(),
            },
            RecordData::Naptr {
                order,
                preference,
                flags,
                service,
                regexp,
                replacement,
            } => Self::Naptr {
                flags: flags.clone(),
                order: *order,
                service: service.clone(),
                preference: *preference,
                regexp: regexp.clone(),
                replacement: replacement.clone(),
            },
            RecordData::Loc {
                altitude_cm,
                latitude,
                longitude,
            } => Self::Loc {
                altitude: *altitude_cm as f64 / 100.0,
                longitude: *longitude,
                latitude: *latitude,
            },
            RecordData::Unsupported => Self::Empty {},
        }
    }
}

/// One entry per record, each carrying its set's name, type, class and TTL.
fn flatten_sets(sets: &[RecordSet]) -> Vec<ResourceRecordDto> {
    sets.iter()
        .flat_map(|set| {
            set.records.iter().map(move |data| ResourceRecordDto {
                name: set.name.clone(),
                record_type: set.record_type.clone(),
                class: set.class.clone(),
                ttl: set.ttl,
                fields: RecordFields::from(data),
            })
        })
        .collect()
}
