//! Streaming tag/text scanner for HTML-like result tables.
//!
//! [`MarkupEvents`] walks a document once and yields start tags, end tags
//! and text runs. It knows nothing about tables; the row/cell logic lives
//! in [`super::table`].

use std::borrow::Cow;

/// One lexical event from a markup document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    /// Opening tag, name lowercased, attributes dropped
    StartTag(String),
    /// Closing tag, name lowercased
    EndTag(String),
    /// Text between tags with character references decoded
    Text(Cow<'a, str>),
}

/// Iterator over the markup events of a document
#[derive(Debug, Clone)]
pub struct MarkupEvents<'a> {
    src: &'a str,
    pos: usize,
    /// End tag for a self-closing `<x/>` waiting to be emitted
    pending: Option<MarkupEvent<'a>>,
    /// Inside `<script>` or `<style>`: everything up to the closing tag is text
    raw_text: Option<String>,
}

impl<'a> MarkupEvents<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            pending: None,
            raw_text: None,
        }
    }

    fn raw_text_event(&mut self, tag: &str) -> Option<MarkupEvent<'a>> {
        let src = self.src;
        let rest = &src[self.pos..];
        let close = format!("</{tag}");
        let len = rest
            .to_ascii_lowercase()
            .find(&close)
            .unwrap_or(rest.len());
        self.pos += len;
        (len > 0).then(|| MarkupEvent::Text(Cow::Borrowed(&rest[..len])))
    }

    /// Read the tag starting at `self.pos`. Returns `None` for constructs that
    /// produce no event (comments, doctype, processing instructions).
    fn tag_event(&mut self) -> Option<MarkupEvent<'a>> {
        let src = self.src;
        let rest = &src[self.pos..];

        if let Some(body) = rest.strip_prefix("<!--") {
            self.pos += body.find("-->").map_or(rest.len(), |i| 4 + i + 3);
            return None;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            self.pos += rest.find('>').map_or(rest.len(), |i| i + 1);
            return None;
        }

        let Some(end) = tag_end(rest) else {
            // Unterminated tag runs to end of input
            self.pos = self.src.len();
            return None;
        };
        self.pos += end + 1;

        if let Some(inner) = rest[..end].strip_prefix("</") {
            return Some(MarkupEvent::EndTag(tag_name(inner)));
        }

        let inner = &rest[1..end];
        let name = tag_name(inner);
        if inner.trim_end().ends_with('/') {
            self.pending = Some(MarkupEvent::EndTag(name.clone()));
        } else if name == "script" || name == "style" {
            self.raw_text = Some(name.clone());
        }
        Some(MarkupEvent::StartTag(name))
    }
}

impl<'a> Iterator for MarkupEvents<'a> {
    type Item = MarkupEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        while self.pos < self.src.len() {
            if let Some(tag) = self.raw_text.take() {
                if let Some(event) = self.raw_text_event(&tag) {
                    return Some(event);
                }
                continue;
            }

            let src = self.src;
            let rest = &src[self.pos..];
            let text_len = text_end(rest);
            if text_len > 0 {
                self.pos += text_len;
                return Some(MarkupEvent::Text(decode_entities(&rest[..text_len])));
            }

            if let Some(event) = self.tag_event() {
                return Some(event);
            }
        }

        None
    }
}

/// Length of the text run at the start of `s`, stopping at the first `<`
/// that opens a real tag. A `<` followed by anything else is plain text.
fn text_end(s: &str) -> usize {
    let mut from = 0;
    while let Some(offset) = s[from..].find('<') {
        let at = from + offset;
        if opens_tag(&s[at + 1..]) {
            return at;
        }
        from = at + 1;
    }
    s.len()
}

fn opens_tag(after_lt: &str) -> bool {
    let mut chars = after_lt.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '!' || c == '?' => true,
        Some('/') => chars.next().is_some_and(|c| c.is_ascii_alphabetic()),
        _ => false,
    }
}

/// Byte index of the `>` closing a tag. Quotes only count when they open an
/// attribute value (directly after `=`).
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut prev = 0u8;
    for (i, b) in s.bytes().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' if prev == b'=' => quote = Some(b),
                b'>' => return Some(i),
                _ => {}
            },
        }
        if !b.is_ascii_whitespace() {
            prev = b;
        }
    }
    None
}

fn tag_name(inner: &str) -> String {
    inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ':')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Decode named and numeric character references. Unknown references are
/// left as written.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest[1..]
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| resolve_entity(&rest[1..1 + semi]).map(|c| (c, semi + 2)));

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn resolve_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}
