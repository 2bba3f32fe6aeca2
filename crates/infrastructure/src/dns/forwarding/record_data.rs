//! Projection of hickory RDATA onto [`RecordData`].

use hickory_proto::rr::{Name, RData, Record};
use resolver_api_domain::{LocCoordinate, RecordData, RecordType};

/// LOC coordinates are stored as thousandths of an arcsecond offset by 2^31.
const LOC_EQUATOR: i64 = 1 << 31;
/// LOC altitude is stored in centimetres offset by 100 000 m.
const LOC_ALTITUDE_BASE_CM: i64 = 10_000_000;
const LOC_RDATA_LEN: usize = 16;

pub fn record_data(record: &Record) -> RecordData {
    match record.data() {
        RData::A(a) => RecordData::Address(a.0.into()),
        RData::AAAA(aaaa) => RecordData::Address(aaaa.0.into()),
        RData::CNAME(cname) => RecordData::Target(name_text(&cname.0)),
        RData::NS(ns) => RecordData::Target(name_text(&ns.0)),
        RData::PTR(ptr) => RecordData::Target(name_text(&ptr.0)),
        RData::MX(mx) => RecordData::Mx {
            preference: mx.preference(),
            exchange: name_text(mx.exchange()),
        },
        RData::SOA(soa) => RecordData::Soa {
            mname: name_text(soa.mname()),
            rname: name_text(soa.rname()),
            serial: soa.serial(),
            refresh: soa.refresh() as u32,
            retry: soa.retry() as u32,
            expire: soa.expire() as u32,
            minimum: soa.minimum(),
        },
        RData::TXT(txt) => RecordData::Txt(txt_presentation(txt.txt_data())),
        RData::NAPTR(naptr) => RecordData::Naptr {
            order: naptr.order(),
            preference: naptr.preference(),
            flags: String::from_utf8_lossy(naptr.flags()).into_owned(),
            service: String::from_utf8_lossy(naptr.services()).into_owned(),
            regexp: String::from_utf8_lossy(naptr.regexp()).into_owned(),
            replacement: name_text(naptr.replacement()),
        },
        RData::Unknown { rdata, .. }
            if u16::from(record.record_type()) == RecordType::LOC.code() =>
        {
            decode_loc(rdata.anything()).unwrap_or(RecordData::Unsupported)
        }
        _ => RecordData::Unsupported,
    }
}

/// Absolute presentation form, trailing dot included.
pub fn name_text(name: &Name) -> String {
    let mut text = name.to_string();
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Zone-file form of TXT character-strings: each one double-quoted, `"` and
/// `\` escaped, bytes outside printable ASCII as `\DDD`, joined by spaces.
pub fn txt_presentation<S: AsRef<[u8]>>(strings: &[S]) -> String {
    strings
        .iter()
        .map(|s| {
            let mut out = String::with_capacity(s.as_ref().len() + 2);
            out.push('"');
            for &byte in s.as_ref() {
                match byte {
                    b'"' | b'\\' => {
                        out.push('\\');
                        out.push(byte as char);
                    }
                    0x20..=0x7e => out.push(byte as char),
                    _ => out.push_str(&format!("\\{:03}", byte)),
                }
            }
            out.push('"');
            out
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes version 0 LOC RDATA (RFC 1876).
pub fn decode_loc(rdata: &[u8]) -> Option<RecordData> {
    if rdata.len() != LOC_RDATA_LEN || rdata[0] != 0 {
        return None;
    }

    let word = |offset: usize| -> i64 {
        i64::from(u32::from_be_bytes([
            rdata[offset],
            rdata[offset + 1],
            rdata[offset + 2],
            rdata[offset + 3],
        ]))
    };

    Some(RecordData::Loc {
        latitude: coordinate(word(4) - LOC_EQUATOR),
        longitude: coordinate(word(8) - LOC_EQUATOR),
        altitude_cm: word(12) - LOC_ALTITUDE_BASE_CM,
    })
}

/// Splits signed thousandths of an arcsecond into degrees/minutes/seconds/ms.
fn coordinate(milliarcseconds: i64) -> LocCoordinate {
    let sign = if milliarcseconds < 0 { -1 } else { 1 };
    let mut rest = milliarcseconds.abs();

    let degrees = rest / 3_600_000;
    rest -= degrees * 3_600_000;
    let minutes = rest / 60_000;
    rest -= minutes * 60_000;
    let seconds = rest / 1_000;
    rest -= seconds * 1_000;

    [degrees * sign, minutes, seconds, rest]
}
