//! Plain-text snapshots of tables and inputs.

use tabula_lib::input::{Adornment, Appearance, FieldMessage, InputField, InputKind, Tone};
use tabula_lib::table::{
    AllSelectedState, Alignment, ColumnWidth, DataTable, SelectionMode, TableBody,
    TableViewState,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GAP: &str = "  ";
const INPUT_WIDTH: usize = 28;

/// Truncate `text` to `width` display cells, marking the cut with `…`.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// Pad `text` to `width` display cells.
fn pad(text: &str, width: usize, align: Alignment) -> String {
    let text = fit(text, width);
    let gap = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(gap)),
        Alignment::Right => format!("{}{}", " ".repeat(gap), text),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}

fn checkbox(mode: SelectionMode, checked: bool) -> &'static str {
    match (mode, checked) {
        (SelectionMode::Single, true) => "(•)",
        (SelectionMode::Single, false) => "( )",
        (_, true) => "[x]",
        (_, false) => "[ ]",
    }
}

fn header_checkbox(mode: SelectionMode, state: AllSelectedState) -> &'static str {
    match (mode, state) {
        (SelectionMode::Multiple, AllSelectedState::All) => "[x]",
        (SelectionMode::Multiple, AllSelectedState::Partial) => "[-]",
        (SelectionMode::Multiple, AllSelectedState::None) => "[ ]",
        _ => "   ",
    }
}

/// Render the current view of a table.
pub fn table(table: &DataTable<'_>, state: &TableViewState) -> String {
    let view = table.view(state);
    let with_checkbox = view.selection_mode.is_enabled();

    let titles: Vec<String> = view
        .headers
        .iter()
        .map(|header| match header.indicator() {
            Some(indicator) => format!("{} {}", header.column.title, indicator),
            None => header.column.title.clone(),
        })
        .collect();

    let cells: Vec<Vec<String>> = view
        .rows()
        .iter()
        .map(|row| {
            view.headers
                .iter()
                .map(|header| header.column.cell_text(row.record))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| match header.column.width {
            ColumnWidth::Fixed(width) => width as usize,
            _ => cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(titles[i].width()))
                .max()
                .unwrap_or(0),
        })
        .collect();

    let mut lines = Vec::new();

    let mut header_line = Vec::new();
    if with_checkbox {
        header_line.push(header_checkbox(view.selection_mode, view.all_selected).to_string());
    }
    for (i, header) in view.headers.iter().enumerate() {
        header_line.push(pad(&titles[i], widths[i], header.column.align));
    }
    let header_line = header_line.join(GAP);
    let rule_width = header_line.trim_end().width();
    lines.push(header_line.trim_end().to_string());
    lines.push("─".repeat(rule_width));

    match &view.body {
        TableBody::Loading => lines.push("Loading…".to_string()),
        TableBody::Empty(text) => lines.push(text.clone()),
        TableBody::Rows(rows) => {
            for (row, row_cells) in rows.iter().zip(&cells) {
                let mut line = Vec::new();
                if with_checkbox {
                    line.push(checkbox(view.selection_mode, row.selected).to_string());
                }
                for (i, header) in view.headers.iter().enumerate() {
                    line.push(pad(&row_cells[i], widths[i], header.column.align));
                }
                lines.push(line.join(GAP).trim_end().to_string());
            }
        }
    }

    if let Some(hints) = view.page {
        lines.push("─".repeat(rule_width));
        lines.push(format!(
            "{}  Page {} of {}  {}",
            if hints.has_previous { "‹ Prev" } else { "      " },
            hints.current,
            hints.page_count,
            if hints.has_next { "Next ›" } else { "" },
        ));
    }

    lines.join("\n")
}

fn adornment(adornment: Adornment) -> &'static str {
    match adornment {
        Adornment::Spinner => "⟳",
        Adornment::ClearButton => "✕",
        Adornment::PasswordToggle { revealed: true } => "hide",
        Adornment::PasswordToggle { revealed: false } => "show",
    }
}

fn tone(appearance: Appearance) -> String {
    let tone = match appearance.tone {
        Tone::Disabled => "disabled".to_string(),
        Tone::Invalid => "invalid".to_string(),
        Tone::Variant(variant) => format!("{:?}", variant).to_lowercase(),
    };
    if appearance.focused {
        format!("{}, focused", tone)
    } else {
        tone
    }
}

/// Render an input field with its label and message.
pub fn input(field: &InputField) -> String {
    let mut lines = Vec::new();

    if let Some(label) = field.label_text() {
        if field.is_required() {
            lines.push(format!("{} *", label));
        } else {
            lines.push(label.to_string());
        }
    }

    let text = if field.is_empty() {
        field.placeholder_text().unwrap_or_default().to_string()
    } else if field.effective_kind() == InputKind::Password {
        "•".repeat(field.value().chars().count())
    } else {
        field.value().to_string()
    };
    let trailing: Vec<_> = field.adornments().into_iter().map(adornment).collect();
    let padding = " ".repeat(field.size_kind().padding());
    let inner = INPUT_WIDTH + field.size_kind().padding() * 2;
    let body = format!(
        "{}{}{}",
        padding,
        pad(&text, inner.saturating_sub(padding.len() * 2), Alignment::Left),
        padding
    );
    let mut line = format!("[{}]", body);
    if !trailing.is_empty() {
        line = format!("{} {}", line, trailing.join(" "));
    }
    lines.push(format!("{}  ({})", line, tone(field.appearance())));

    match field.message() {
        Some(FieldMessage::Error(text)) => lines.push(format!("  ! {}", text)),
        Some(FieldMessage::Helper(text)) => lines.push(format!("    {}", text)),
        None => {}
    }

    lines.join("\n")
}
