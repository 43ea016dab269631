// SPDX-License-Identifier: MPL-2.0
//! JSON shape of the remote page envelope.
//!
//! Field names are fixed by the service. Numbers are accepted either as JSON
//! numbers or as numeric strings, which some paginators emit.

use crate::domain::paging::{PageEnvelope, PageNumber, PageSize, Record};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(u64),
    Text(String),
}

impl Lenient {
    fn value(&self) -> Result<u64, String> {
        match self {
            Lenient::Number(n) => Ok(*n),
            Lenient::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("expected an integer, got {raw:?}")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct WireRecord {
    id: Lenient,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified_at: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireEnvelope {
    data: Vec<WireRecord>,
    current_page: Lenient,
    per_page: Lenient,
    total: Lenient,
    last_page: Lenient,
    // Present on the wire but unused.
    #[serde(default)]
    #[allow(dead_code)]
    next_page_url: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    prev_page_url: Option<String>,
}

impl WireEnvelope {
    /// Converts the wire shape into the domain envelope.
    ///
    /// Pagination fields are taken verbatim; in particular `last_page = 0`
    /// for an empty result set is kept as `total_pages = 0`.
    pub(super) fn into_envelope(self) -> Result<PageEnvelope, String> {
        let items = self
            .data
            .into_iter()
            .map(|record| {
                Ok(Record {
                    id: record.id.value()?,
                    name: record.name.unwrap_or_default(),
                    email: record.email.unwrap_or_default(),
                    email_verified_at: record.email_verified_at,
                    created_at: record.created_at,
                    updated_at: record.updated_at,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(PageEnvelope {
            items,
            current_page: PageNumber::new(to_u32(self.current_page.value()?)),
            page_size: PageSize::new(to_u32(self.per_page.value()?)),
            total_items: self.total.value()?,
            total_pages: to_u32(self.last_page.value()?),
        })
    }
}

fn to_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Parses a response body into a domain envelope.
pub(super) fn parse_envelope(body: &[u8]) -> Result<PageEnvelope, String> {
    let wire: WireEnvelope = serde_json::from_slice(body).map_err(|err| err.to_string())?;
    wire.into_envelope()
}
