use crate::case::equals_ignore_case;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Configured origin allow-list, or the wildcard marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

/// Outcome of resolving one request origin against the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the `*` wildcard.
    Any,
    /// Mirror the literal request origin.
    Mirror,
    /// Origin is not allowed; no `Access-Control-Allow-Origin` is emitted.
    Disallow,
    /// CORS does not apply to this request; emit nothing.
    Skip,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow-list from the provided iterator, trimming whitespace
    /// and removing case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if deduped
                .iter()
                .any(|existing| equals_ignore_case(existing, &trimmed))
            {
                continue;
            }
            deduped.push(trimmed);
        }

        Self::List(deduped)
    }

    /// Resolves the request origin under the configured credentials mode.
    ///
    /// A credentialed response must never carry the wildcard, so `Any` with
    /// credentials mirrors the literal origin instead.
    pub fn resolve(&self, request_origin: Option<&str>, credentials: bool) -> OriginDecision {
        if let Some(origin) = request_origin
            && origin.len() > MAX_ORIGIN_LENGTH
        {
            return OriginDecision::Disallow;
        }

        match self {
            AllowedOrigins::Any if !credentials => OriginDecision::Any,
            AllowedOrigins::Any => match request_origin {
                Some(_) => OriginDecision::Mirror,
                None => OriginDecision::Skip,
            },
            AllowedOrigins::List(allowed) => match request_origin {
                Some(origin)
                    if allowed
                        .iter()
                        .any(|candidate| equals_ignore_case(candidate, origin)) =>
                {
                    OriginDecision::Mirror
                }
                Some(_) => OriginDecision::Disallow,
                None => OriginDecision::Skip,
            },
        }
    }

    pub(crate) fn vary_on_disallow(&self) -> bool {
        !matches!(self, AllowedOrigins::Any)
    }

    pub(crate) fn contains_wildcard_entry(&self) -> bool {
        match self {
            AllowedOrigins::Any => false,
            AllowedOrigins::List(values) => values.iter().any(|value| value == "*"),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
