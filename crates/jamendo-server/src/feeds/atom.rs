//! Minimal Atom 1.0 document model and serializer.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat};

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";
const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub rel: Option<&'static str>,
    pub media_type: Option<&'static str>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
            media_type: None,
        }
    }

    pub fn rel(mut self, rel: &'static str) -> Self {
        self.rel = Some(rel);
        self
    }

    pub fn media_type(mut self, media_type: &'static str) -> Self {
        self.media_type = Some(media_type);
        self
    }
}

/// HTML body of an entry, resolved against `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub base: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub updated: DateTime<FixedOffset>,
    pub published: DateTime<FixedOffset>,
    pub author: String,
    pub links: Vec<Link>,
    pub categories: Vec<String>,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub updated: DateTime<FixedOffset>,
    pub links: Vec<Link>,
    pub entries: Vec<Entry>,
}

impl Feed {
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

/// Escape text for use in XML character data and attribute values.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn timestamp(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<link href=\"{}\"", escape(&self.href))?;
        if let Some(rel) = self.rel {
            write!(f, " rel=\"{rel}\"")?;
        }
        if let Some(media_type) = self.media_type {
            write!(f, " type=\"{media_type}\"")?;
        }
        f.write_str("/>")
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  <entry>")?;
        writeln!(f, "    <title>{}</title>", escape(&self.title))?;
        for link in &self.links {
            writeln!(f, "    {link}")?;
        }
        writeln!(f, "    <id>{}</id>", escape(&self.id))?;
        writeln!(f, "    <updated>{}</updated>", timestamp(&self.updated))?;
        writeln!(f, "    <published>{}</published>", timestamp(&self.published))?;
        writeln!(
            f,
            "    <author><name>{}</name></author>",
            escape(&self.author)
        )?;
        for term in &self.categories {
            writeln!(f, "    <category term=\"{}\"/>", escape(term))?;
        }
        if let Some(content) = &self.content {
            writeln!(
                f,
                "    <content type=\"html\" xml:base=\"{}\">{}</content>",
                escape(&content.base),
                escape(&content.html)
            )?;
        }
        writeln!(f, "  </entry>")
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
        writeln!(f, "<feed xmlns=\"{ATOM_NAMESPACE}\">")?;
        writeln!(f, "  <title>{}</title>", escape(&self.title))?;
        writeln!(f, "  <subtitle>{}</subtitle>", escape(&self.subtitle))?;
        for link in &self.links {
            writeln!(f, "  {link}")?;
        }
        writeln!(f, "  <id>{}</id>", escape(&self.id))?;
        writeln!(f, "  <updated>{}</updated>", timestamp(&self.updated))?;
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        writeln!(f, "</feed>")
    }
}
