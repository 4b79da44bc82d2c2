#![allow(dead_code)]

use cors_guard::Header;
use cors_guard::constants::header;
use std::collections::HashSet;

pub fn header_value<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.value.as_str())
}

pub fn has_header(headers: &[Header], name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn vary_values(headers: &[Header]) -> HashSet<String> {
    header_value(headers, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}
