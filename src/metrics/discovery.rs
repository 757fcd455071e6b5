//! Zabbix low-level discovery (LLD) documents.
//!
//! Each entity class is announced as one line of the form
//! `- nginx.<class>.discovery {"data":[{"{#MACRO}":"name"},...]}` so that the
//! agent can create per-entity items before the metric lines arrive.

use serde::{
    ser::SerializeMap,
    Serialize,
    Serializer,
};
use std::{
    fmt,
    io,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryKind {
    Server,
    Upstream,
    CacheZone,
}

impl DiscoveryKind {
    /// Item key the document is sent under.
    pub fn item_key(&self) -> &'static str {
        match self {
            DiscoveryKind::Server => "nginx.server.discovery",
            DiscoveryKind::Upstream => "nginx.upstream.discovery",
            DiscoveryKind::CacheZone => "nginx.cachezone.discovery",
        }
    }

    /// LLD macro each entry maps to the entity name.
    pub fn macro_name(&self) -> &'static str {
        match self {
            DiscoveryKind::Server => "{#SERVERNAME}",
            DiscoveryKind::Upstream => "{#UPSTREAM}",
            DiscoveryKind::CacheZone => "{#CACHEZONE}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryEntry {
    pub macro_name: &'static str,
    pub name: String,
}

impl Serialize for DiscoveryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.macro_name, &self.name)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryDocument {
    #[serde(skip)]
    pub kind: DiscoveryKind,
    pub data: Vec<DiscoveryEntry>,
}

impl DiscoveryDocument {
    pub fn new(kind: DiscoveryKind) -> Self {
        Self { kind, data: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.data.push(DiscoveryEntry {
            macro_name: self.kind.macro_name(),
            name: name.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The document as a sender line, or `None` when there is nothing to announce.
    pub fn to_line(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl DiscoveryDocument {
    /// Compact JSON with `<`, `>`, `&`, U+2028 and U+2029 written as `\uXXXX`
    /// escapes, byte for byte what existing discovery rules were fed.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = Vec::new();
        self.serialize(&mut serde_json::Serializer::with_formatter(&mut json, HtmlSafeFormatter))?;
        String::from_utf8(json).map_err(serde::ser::Error::custom)
    }
}

impl fmt::Display for DiscoveryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        write!(f, "- {} {}", self.kind.item_key(), json)
    }
}

struct HtmlSafeFormatter;

impl serde_json::ser::Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_single_key_objects() {
        let mut document = DiscoveryDocument::new(DiscoveryKind::Upstream);
        document.push("backend");
        document.push("api");
        assert_eq!(
            document.to_line().unwrap(),
            r#"- nginx.upstream.discovery {"data":[{"{#UPSTREAM}":"backend"},{"{#UPSTREAM}":"api"}]}"#
        );
    }

    #[test]
    fn empty_document_has_no_line() {
        assert_eq!(DiscoveryDocument::new(DiscoveryKind::CacheZone).to_line(), None);
    }

    #[test]
    fn html_characters_are_unicode_escaped() {
        let mut document = DiscoveryDocument::new(DiscoveryKind::Server);
        document.push("a<b&c>d");
        document.push("line\u{2028}sep");
        assert_eq!(
            document.to_string(),
            r#"- nginx.server.discovery {"data":[{"{#SERVERNAME}":"a\u003cb\u0026c\u003ed"},{"{#SERVERNAME}":"line\u2028sep"}]}"#
        );
    }

    #[test]
    fn names_are_json_escaped() {
        let mut document = DiscoveryDocument::new(DiscoveryKind::Server);
        document.push(r#"quo"te"#);
        assert_eq!(
            document.to_string(),
            r#"- nginx.server.discovery {"data":[{"{#SERVERNAME}":"quo\"te"}]}"#
        );
    }
}
