// Rust guideline compliant 2026-10-15

//! HTML to plain text conversion for Jira descriptions and comments.
//!
//! Jira exports rich text as HTML fragments. The destination takes plain text,
//! so tags are dropped, line-breaking tags become newlines and character
//! entities are decoded.

/// Tags that end a line of text.
const LINE_BREAKS: [&str; 5] = ["</p>", "<br>", "</br>", "<br/>", "<br />"];

/// Converts an HTML fragment to plain text.
///
/// Input without any tag characters is only entity-decoded. Otherwise raw
/// newlines are dropped (they carry no meaning in HTML), paragraph ends and
/// `<br>` variants become `\n`, and all other tags are removed. An empty
/// paragraph (`<p></p>`) therefore yields exactly `"\n"`.
///
/// # Examples
///
/// ```
/// use jiraport_core::sanitize::html_to_text;
///
/// assert_eq!(html_to_text("<p>Fish &amp; chips</p>"), "Fish & chips\n");
/// assert_eq!(html_to_text("plain"), "plain");
/// ```
pub fn html_to_text(input: &str) -> String {
    let text = if input.contains(|c| c == '<' || c == '>') {
        strip_tags(input)
    } else {
        input.to_string()
    };
    decode_entities(&text)
}

fn strip_tags(input: &str) -> String {
    let mut html = input.replace('\n', "");
    for tag in LINE_BREAKS {
        html = html.replace(tag, "\n");
    }

    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let decoded = tail
            .find(';')
            .filter(|&end| end <= 12)
            .and_then(|end| decode_entity(&tail[1..end]).map(|ch| (ch, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        // Smart quotes are flattened to ASCII.
        "#8216" | "#8217" => Some('\''),
        "#8220" | "#8221" => Some('"'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
