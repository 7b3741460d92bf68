//! XML descriptor construction and response parsing for coverage
//! registration.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Build the coverage registration descriptor POSTed to
/// `.../coveragestores/{store}/coverages`.
pub fn coverage_descriptor(name: &str) -> String {
    let escaped = escape(name);
    format!(
        "<coverage><name>{0}</name><nativeName>{0}</nativeName><title>{0}</title><enabled>true</enabled></coverage>",
        escaped
    )
}

/// Extract the server-confirmed coverage name from a registration
/// response body.
///
/// GeoServer may echo the name wrapped in a `<name>` (or other) tag, or
/// as bare text. Falls back to the requested name when the body yields
/// nothing usable.
pub fn confirmed_coverage_name(body: &str, requested: &str) -> String {
    if let Some(name) = name_from_xml(body) {
        return name;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.contains('<') {
        return trimmed.to_string();
    }

    requested.to_string()
}

/// Pull the text content of the first `<name>` element, or of the
/// document element itself when no `<name>` is present.
fn name_from_xml(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut in_name = false;
    let mut first_text: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"name" {
                    in_name = true;
                }
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().ok()?.trim().to_string();
                if text.is_empty() {
                    // skip whitespace-only nodes
                } else if in_name {
                    return Some(text);
                } else if first_text.is_none() {
                    first_text = Some(text);
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"name" {
                    in_name = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
        buf.clear();
    }

    first_text
}
