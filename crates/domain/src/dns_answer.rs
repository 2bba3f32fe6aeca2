use crate::dns_record::RecordSet;

/// Question section entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: String,
    pub class: String,
}

/// Header flags of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseFlags {
    pub qr: bool,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub ad: bool,
    pub cd: bool,
}

impl ResponseFlags {
    /// Space-separated flag mnemonics, e.g. `"QR RD RA"`.
    pub fn to_text(&self) -> String {
        [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
            (self.ad, "AD"),
            (self.cd, "CD"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Parsed result of a successful query against one nameserver.
#[derive(Debug, Clone, PartialEq)]
pub struct DnsAnswer {
    pub id: u16,
    pub question: Question,
    pub answer: Vec<RecordSet>,
    pub authority: Vec<RecordSet>,
    pub additional: Vec<RecordSet>,
    pub flags: ResponseFlags,
    pub rcode: String,
}

impl DnsAnswer {
    /// Empty NOERROR answer for `question`.
    pub fn empty(id: u16, question: Question) -> Self {
        Self {
            id,
            question,
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            flags: ResponseFlags {
                qr: true,
                rd: true,
                ra: true,
                ..ResponseFlags::default()
            },
            rcode: "NOERROR".to_string(),
        }
    }
}
