use crate::constants::header;
use indexmap::IndexMap;

/// Single response header pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Insertion-ordered header set, resolved once per request and consumed by
/// the interceptor when a response-start event is seen.
///
/// Names are deduplicated case-insensitively; `Vary` entries accumulate into
/// a single comma-joined value instead of replacing each other.
#[derive(Debug, Default, Clone)]
pub struct HeaderSet {
    entries: IndexMap<String, Header>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
            return;
        }
        self.entries
            .insert(name.to_ascii_lowercase(), Header::new(name, value));
    }

    pub fn add_vary(&mut self, value: impl Into<String>) {
        let key = header::VARY.to_ascii_lowercase();
        let mut entries: Vec<String> = self
            .entries
            .get(&key)
            .map(|existing| {
                existing
                    .value
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let incoming = value.into().trim().to_string();
        if !incoming.is_empty() {
            entries.push(incoming);
        }

        if entries.is_empty() {
            self.entries.shift_remove(&key);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.entries
            .insert(key, Header::new(header::VARY, deduped.join(", ")));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.entries.values()
    }

    pub fn to_headers(&self) -> Vec<Header> {
        self.entries.values().cloned().collect()
    }

    /// Merges this set into an outgoing header list. Entries from this set
    /// win on name collision: the handler's own CORS-unaware headers must
    /// not suppress the injected values.
    pub fn inject_into(&self, headers: &mut Vec<Header>) {
        headers.retain(|existing| !self.entries.contains_key(&existing.name.to_ascii_lowercase()));
        headers.extend(self.entries.values().cloned());
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
