use crate::constants::{ALARM_STATES, DDNS_STATES, UPNP_STATES};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single field value from a camera response. The camera emits either
/// single-quoted strings or bare base-10 integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Int(_) => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

pub type ParamMap = BTreeMap<String, ParamValue>;

/// Classified body of a non-binary CGI response.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The literal acknowledgement `ok.` sent by mutating endpoints.
    Ok,
    /// Anything else, run through the `var key=value;` parser.
    Params(ParamMap),
}

impl Reply {
    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        if body == "ok." {
            Reply::Ok
        } else {
            Reply::Params(parse_params(body))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Ok)
    }

    pub fn params(&self) -> Option<&ParamMap> {
        match self {
            Reply::Ok => None,
            Reply::Params(params) => Some(params),
        }
    }
}

/// Extract every `var IDENT=LITERAL;` statement from a camera response.
///
/// Statements are recognized at line starts only, one per line, matching the
/// firmware's output format. Lines that do not fit the grammar are skipped;
/// malformed input yields fewer fields, never an error.
pub fn parse_params(text: &str) -> ParamMap {
    let mut params = ParamMap::new();

    for line in text.lines() {
        let Some(rest) = line.strip_prefix("var ") else {
            continue;
        };
        let Some((name, rest)) = scan_ident(rest) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let Some(end) = rest.find(';') else {
            continue;
        };
        params.insert(name.to_string(), parse_literal(&rest[..end]));
    }

    params
}

fn scan_ident(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    Some((&input[..end], &input[end..]))
}

fn parse_literal(raw: &str) -> ParamValue {
    if let Some(inner) = raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        if !inner.contains('\'') {
            return ParamValue::Text(inner.to_string());
        }
    } else if let Ok(number) = raw.parse::<i64>() {
        return ParamValue::Int(number);
    }

    // Unknown literal form, keep the raw text.
    ParamValue::Text(raw.to_string())
}

const STATUS_TABLES: [(&str, &[&str]); 3] = [
    ("alarm_status", &ALARM_STATES),
    ("ddns_status", &DDNS_STATES),
    ("upnp_status", &UPNP_STATES),
];

/// Add a human-readable `<field>_str` sibling for each known status code
/// field present in `params`. Codes outside their table decode to an empty
/// string; fields absent from the response are left untouched.
pub fn decode_status(params: &mut ParamMap) {
    for (field, labels) in STATUS_TABLES {
        let Some(ParamValue::Int(code)) = params.get(field) else {
            continue;
        };
        let label = usize::try_from(*code)
            .ok()
            .and_then(|index| labels.get(index))
            .copied()
            .unwrap_or("");
        params.insert(format!("{field}_str"), ParamValue::Text(label.to_string()));
    }
}
