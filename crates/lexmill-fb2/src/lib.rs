//! Streaming text extraction from FB2 (FictionBook 2) files.
//!
//! Reads the XML once, collecting the text nodes inside `<body>` subtrees:
//! paragraphs, titles, epigraphs and notes bodies, leaving out
//! `<description>` metadata and base64 `<binary>` payloads. The output is
//! a single whitespace-normalized string ready for tokenization.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract the book text from an FB2 document.
///
/// A malformed document is not an error here: the parse stops at the bad
/// offset, the position is logged, and an empty string comes back so the
/// caller can detect "nothing extracted" and abort cleanly.
pub fn extract_text<R: BufRead>(reader: R) -> String {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut text = String::new();
    let mut body_depth = 0usize;
    let mut binary_depth = 0usize;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"body" => body_depth += 1,
                b"binary" => binary_depth += 1,
                _ => {}
            },
            Ok(Event::Text(ref e)) if body_depth > 0 && binary_depth == 0 => {
                if let Ok(t) = e.unescape() {
                    text.push_str(&t);
                    text.push(' ');
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"body" => body_depth = body_depth.saturating_sub(1),
                b"binary" => binary_depth = binary_depth.saturating_sub(1),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                eprintln!(
                    "[fb2] XML parse error at position {}: {}",
                    xml.buffer_position(),
                    e
                );
                return String::new();
            }
            _ => {}
        }
        buf.clear();
    }

    normalize_whitespace(&text)
}

/// Open and extract an FB2 file from disk.
pub fn extract_file(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    Ok(extract_text(BufReader::new(file)))
}

/// Element name without a namespace prefix (`fb:body` → `body`).
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Replace dashes used as dialogue/aside punctuation with spaces and
/// collapse whitespace runs.
fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = true;

    for ch in raw.chars() {
        let ch = if ch == '\u{2014}' || ch == '\u{2013}' { ' ' } else { ch };
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }

    while out.ends_with(' ') {
        out.pop();
    }
    out
}
