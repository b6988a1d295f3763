use std::collections::HashMap;

use crate::dom::Dom;
use crate::{Error, Result};

pub(crate) fn parse_html(html: &str) -> Result<Dom> {
    HtmlParser::new(html).parse()
}

struct HtmlParser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    i: usize,
}

impl<'a> HtmlParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            i: 0,
        }
    }

    fn parse(mut self) -> Result<Dom> {
        let mut dom = Dom::new();
        let mut stack = vec![dom.root];

        while self.i < self.bytes.len() {
            if self.starts_with(b"<!--") {
                self.skip_comment()?;
                continue;
            }

            if self.starts_with(b"<!") {
                self.skip_markup_declaration()?;
                continue;
            }

            if self.bytes[self.i] == b'<' {
                if self.starts_with(b"</") {
                    let tag = self.end_tag()?;
                    // Pop to the nearest matching open element.
                    while stack.len() > 1 {
                        let top = *stack
                            .last()
                            .ok_or_else(|| Error::HtmlParse("invalid stack state".into()))?;
                        let top_tag = dom.tag_name(top).unwrap_or("");
                        stack.pop();
                        if top_tag.eq_ignore_ascii_case(&tag) {
                            break;
                        }
                    }
                    continue;
                }

                let (tag, attrs, self_closing) = self.start_tag()?;
                let parent = *stack
                    .last()
                    .ok_or_else(|| Error::HtmlParse("missing parent element".into()))?;
                let node = dom.create_element(parent, tag.clone(), attrs);

                if tag == "script" {
                    // Script bodies are raw text and stay inert in the tree.
                    let close = self
                        .find_end_tag(b"script")
                        .ok_or_else(|| Error::HtmlParse("unclosed <script>".into()))?;
                    if let Some(body) = self.src.get(self.i..close) {
                        if !body.is_empty() {
                            dom.create_text(node, body.to_string());
                        }
                    }
                    self.i = close;
                    let _ = self.end_tag()?;
                    continue;
                }

                if !self_closing && !is_void_tag(&tag) {
                    stack.push(node);
                }
                continue;
            }

            let text_start = self.i;
            while self.i < self.bytes.len() && self.bytes[self.i] != b'<' {
                self.i += 1;
            }

            if let Some(text) = self.src.get(text_start..self.i) {
                if !text.is_empty() {
                    let parent = *stack
                        .last()
                        .ok_or_else(|| Error::HtmlParse("missing parent element".into()))?;
                    dom.create_text(parent, text.to_string());
                }
            }
        }

        Ok(dom)
    }

    fn starts_with(&self, needle: &[u8]) -> bool {
        self.bytes[self.i..].starts_with(needle)
    }

    fn skip_comment(&mut self) -> Result<()> {
        let mut j = self.i + 4;
        while j + 3 <= self.bytes.len() {
            if &self.bytes[j..j + 3] == b"-->" {
                self.i = j + 3;
                return Ok(());
            }
            j += 1;
        }
        Err(Error::HtmlParse("unclosed HTML comment".into()))
    }

    fn skip_markup_declaration(&mut self) -> Result<()> {
        // <!doctype html> and friends contribute nothing to the tree.
        while self.i < self.bytes.len() && self.bytes[self.i] != b'>' {
            self.i += 1;
        }
        if self.i >= self.bytes.len() {
            return Err(Error::HtmlParse("unclosed markup declaration".into()));
        }
        self.i += 1;
        Ok(())
    }

    fn start_tag(&mut self) -> Result<(String, HashMap<String, String>, bool)> {
        if self.bytes.get(self.i) != Some(&b'<') {
            return Err(Error::HtmlParse("expected '<'".into()));
        }
        self.i += 1;
        self.skip_ws();

        let tag = self.tag_name()?;
        let mut attrs = HashMap::new();
        let mut self_closing = false;

        loop {
            self.skip_ws();
            if self.i >= self.bytes.len() {
                return Err(Error::HtmlParse("unclosed start tag".into()));
            }

            if self.bytes[self.i] == b'>' {
                self.i += 1;
                break;
            }

            if self.starts_with(b"/>") {
                self_closing = true;
                self.i += 2;
                break;
            }

            let name_start = self.i;
            while self.i < self.bytes.len() && is_attr_name_char(self.bytes[self.i]) {
                self.i += 1;
            }

            let name = self
                .src
                .get(name_start..self.i)
                .ok_or_else(|| Error::HtmlParse("invalid attribute name".into()))?
                .to_ascii_lowercase();

            if name.is_empty() {
                return Err(Error::HtmlParse("invalid attribute name".into()));
            }

            self.skip_ws();

            let value = if self.bytes.get(self.i) == Some(&b'=') {
                self.i += 1;
                self.skip_ws();
                self.attr_value()?
            } else {
                "true".to_string()
            };

            attrs.insert(name, value);
        }

        Ok((tag, attrs, self_closing))
    }

    fn end_tag(&mut self) -> Result<String> {
        if !self.starts_with(b"</") {
            return Err(Error::HtmlParse("expected end tag".into()));
        }
        self.i += 2;
        self.skip_ws();

        let tag = self.tag_name()?;

        while self.i < self.bytes.len() && self.bytes[self.i] != b'>' {
            self.i += 1;
        }
        if self.i >= self.bytes.len() {
            return Err(Error::HtmlParse("unclosed end tag".into()));
        }
        self.i += 1;
        Ok(tag)
    }

    fn tag_name(&mut self) -> Result<String> {
        let start = self.i;
        while self.i < self.bytes.len() && is_tag_char(self.bytes[self.i]) {
            self.i += 1;
        }

        let tag = self
            .src
            .get(start..self.i)
            .ok_or_else(|| Error::HtmlParse("invalid tag name".into()))?
            .to_ascii_lowercase();

        if tag.is_empty() {
            return Err(Error::HtmlParse("empty tag name".into()));
        }
        Ok(tag)
    }

    fn attr_value(&mut self) -> Result<String> {
        if self.i >= self.bytes.len() {
            return Err(Error::HtmlParse("missing attribute value".into()));
        }

        let quote = self.bytes[self.i];
        if quote == b'"' || quote == b'\'' {
            self.i += 1;
            let start = self.i;
            while self.i < self.bytes.len() && self.bytes[self.i] != quote {
                self.i += 1;
            }
            if self.i >= self.bytes.len() {
                return Err(Error::HtmlParse("unclosed quoted attribute value".into()));
            }
            let value = self
                .src
                .get(start..self.i)
                .ok_or_else(|| Error::HtmlParse("invalid attribute value".into()))?
                .to_string();
            self.i += 1;
            return Ok(value);
        }

        let start = self.i;
        while self.i < self.bytes.len()
            && !self.bytes[self.i].is_ascii_whitespace()
            && self.bytes[self.i] != b'>'
            && !(self.bytes[self.i] == b'/' && self.bytes.get(self.i + 1) == Some(&b'>'))
        {
            self.i += 1;
        }

        let value = self
            .src
            .get(start..self.i)
            .ok_or_else(|| Error::HtmlParse("invalid attribute value".into()))?
            .to_string();
        Ok(value)
    }

    fn find_end_tag(&self, tag: &[u8]) -> Option<usize> {
        let mut needle = Vec::new();
        needle.extend_from_slice(b"</");
        needle.extend(tag.iter().map(|b| b.to_ascii_lowercase()));

        let mut j = self.i;
        while j + needle.len() <= self.bytes.len() {
            if self.bytes[j] == b'<' && self.bytes.get(j + 1) == Some(&b'/') {
                let candidate = &self.bytes[j..j + needle.len()];
                if candidate
                    .iter()
                    .zip(&needle)
                    .all(|(a, b)| a.to_ascii_lowercase() == *b)
                {
                    return Some(j);
                }
            }
            j += 1;
        }
        None
    }

    fn skip_ws(&mut self) {
        while self.i < self.bytes.len() && self.bytes[self.i].is_ascii_whitespace() {
            self.i += 1;
        }
    }
}

fn is_tag_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn is_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
