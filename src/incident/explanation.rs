//! Terminal rendering of the incident explanation text.
//!
//! Understands the small markdown subset the explanation backend produces:
//! `#`/`##`/`###` headings, `- ` list items, `**bold**` and `*italic*`.
//! Everything else is shown as written.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const NO_EXPLANATION: &str = "No explanation available.";

pub fn to_lines(text: Option<&str>) -> Vec<Line<'static>> {
    let text = text.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return vec![Line::from(NO_EXPLANATION)];
    }

    text.lines().map(line).collect()
}

fn line(raw: &str) -> Line<'static> {
    let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    if let Some(rest) = raw
        .strip_prefix("### ")
        .or_else(|| raw.strip_prefix("## "))
        .or_else(|| raw.strip_prefix("# "))
    {
        return Line::from(spans(rest, heading));
    }
    if let Some(rest) = raw.strip_prefix("- ") {
        let mut item = vec![Span::raw(" • ")];
        item.extend(spans(rest, Style::default()));
        return Line::from(item);
    }
    Line::from(spans(raw, Style::default()))
}

/// Split `text` on `**` and `*` markers. An unmatched marker is kept as text.
fn spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut out = vec![];
    let mut rest = text;

    while !rest.is_empty() {
        let Some(start) = rest.find('*') else {
            out.push(Span::styled(rest.to_string(), base));
            break;
        };
        let (marker, modifier) = match rest[start..].starts_with("**") {
            true => ("**", Modifier::BOLD),
            false => ("*", Modifier::ITALIC),
        };
        let after = &rest[start + marker.len()..];
        let Some(end) = after.find(marker) else {
            out.push(Span::styled(rest.to_string(), base));
            break;
        };

        if start > 0 {
            out.push(Span::styled(rest[..start].to_string(), base));
        }
        out.push(Span::styled(after[..end].to_string(), base.add_modifier(modifier)));
        rest = &after[end + marker.len()..];
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text() {
        assert_eq!(vec![Line::from(NO_EXPLANATION)], to_lines(None));
        assert_eq!(vec![Line::from(NO_EXPLANATION)], to_lines(Some("  \n ")));
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            vec![Line::from(vec![
                Span::raw("Cause: "),
                Span::styled("pipe burst", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" near "),
                Span::styled("Blida", Style::default().add_modifier(Modifier::ITALIC)),
            ])],
            to_lines(Some("Cause: **pipe burst** near *Blida*"))
        );
    }

    #[test]
    fn test_unmatched_marker_is_text() {
        assert_eq!(
            vec![Line::from(vec![Span::raw("5 * 3 = 15")])],
            to_lines(Some("5 * 3 = 15"))
        );
    }

    #[test]
    fn test_headings_and_list_items() {
        let lines = to_lines(Some("## Solutions\n- isolate the valve\nplain"));

        assert_eq!(3, lines.len());
        assert_eq!(
            Line::from(vec![Span::styled(
                "Solutions",
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            )]),
            lines[0]
        );
        assert_eq!(
            Line::from(vec![Span::raw(" • "), Span::raw("isolate the valve")]),
            lines[1]
        );
        assert_eq!(Line::from(vec![Span::raw("plain")]), lines[2]);
    }
}
