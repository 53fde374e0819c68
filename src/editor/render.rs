//! Text rendering of the logbook for the terminal.

use crate::document::{ActivitySession, LogbookDocument, SessionField};
use crate::ui::{CarnetTheme, UserInterface};

use super::visibility::{Section, VisibilityState};

/// Placeholder for fields the student has not filled in yet.
const EMPTY_MARKER: &str = "-";

/// Render every section heading, with the content of expanded ones.
pub fn render_document(
    doc: &LogbookDocument,
    visibility: &VisibilityState,
    theme: &CarnetTheme,
) -> Vec<String> {
    let mut lines = Vec::new();

    for section in Section::ALL {
        let expanded = visibility.is_expanded(section);
        lines.push(theme.format_section(section.title(), expanded));
        if !expanded {
            continue;
        }

        for field in section.fields() {
            lines.push(field_line(theme, field.label(), field.get(doc), 2));
        }

        if section == Section::Activities {
            if doc.activity_sessions.is_empty() {
                lines.push(format!("  {}", theme.dim.apply_to("Aucune séance")));
            }
            for (index, session) in doc.activity_sessions.iter().enumerate() {
                lines.extend(render_session(session, index + 1, theme));
            }
        }
        lines.push(String::new());
    }

    lines
}

/// Render one session as a heading line followed by its fields.
pub fn render_session(session: &ActivitySession, position: usize, theme: &CarnetTheme) -> Vec<String> {
    let mut lines = vec![format!(
        "  {} {}",
        theme.highlight.apply_to(format!("Séance {}", position)),
        theme.dim.apply_to(format!("(id {})", session.id))
    )];
    for field in SessionField::ALL {
        lines.push(field_line(theme, field.label(), session.get(field), 4));
    }
    lines
}

/// One line per session: id, date and activity.
pub fn session_summary(session: &ActivitySession) -> String {
    let or_marker = |value: &str| {
        if value.is_empty() {
            EMPTY_MARKER.to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "{}  {}  {}",
        session.id,
        or_marker(&session.date),
        or_marker(&session.activity_name)
    )
}

/// Send the rendered document to `ui`, one message per line.
pub fn show_document(
    ui: &mut dyn UserInterface,
    doc: &LogbookDocument,
    visibility: &VisibilityState,
    theme: &CarnetTheme,
) {
    for line in render_document(doc, visibility, theme) {
        ui.message(&line);
    }
}

fn field_line(theme: &CarnetTheme, label: &str, value: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    if value.is_empty() {
        return format!(
            "{}{}: {}",
            pad,
            theme.key.apply_to(label),
            theme.dim.apply_to(EMPTY_MARKER)
        );
    }

    // Continuation lines of multi-line answers line up under the label.
    let continuation = format!("\n{}  ", pad);
    format!(
        "{}{}: {}",
        pad,
        theme.key.apply_to(label),
        theme.value.apply_to(value.replace('\n', &continuation))
    )
}
