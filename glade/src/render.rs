use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{Style, TextStyle};

/// Render an element tree into a buffer using a precomputed layout.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    if rect.is_empty() {
        return;
    }

    if element.style.background.is_some() {
        fill_background(buf, rect, &element.style);
    }

    let inner = rect.shrink(
        element.padding.top,
        element.padding.right,
        element.padding.bottom,
        element.padding.left,
    );

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(buf, inner, text, &element.style);
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            render_text_input(
                buf,
                inner,
                value,
                *cursor,
                placeholder.as_deref(),
                *focused,
                &element.style,
            );
        }
        Content::Children(children) => {
            for child in children {
                render_to_buffer(child, layout, buf);
            }
        }
    }
}

fn fill_background(buf: &mut Buffer, rect: Rect, style: &Style) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            buf.set(
                x,
                y,
                Cell {
                    ch: ' ',
                    fg: style.foreground,
                    bg: style.background,
                    style: TextStyle::default(),
                },
            );
        }
    }
}

fn render_text(buf: &mut Buffer, rect: Rect, text: &str, style: &Style) {
    for (line_idx, line) in text.lines().enumerate() {
        let y = rect.top() + line_idx as u16;
        if y >= rect.bottom() {
            break;
        }
        write_line(buf, rect, y, line, style.foreground, style.background, style.text_style);
    }
}

fn render_text_input(
    buf: &mut Buffer,
    rect: Rect,
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    style: &Style,
) {
    let y = rect.top();
    if y >= rect.bottom() {
        return;
    }

    if value.is_empty() {
        if let Some(hint) = placeholder {
            write_line(
                buf,
                rect,
                y,
                hint,
                style.foreground,
                style.background,
                style.text_style.dim(),
            );
        }
    } else {
        write_line(buf, rect, y, value, style.foreground, style.background, style.text_style);
    }

    if focused {
        // Cursor cell rendered with reversed colors. The cursor is a byte
        // offset; convert to a column by summing widths up to it.
        let col: usize = value[..cursor.min(value.len())]
            .chars()
            .map(char_width)
            .sum();
        let x = rect.left() + col as u16;
        if x < rect.right() {
            let ch = value[cursor.min(value.len())..].chars().next().unwrap_or(' ');
            buf.set(
                x,
                y,
                Cell {
                    ch,
                    fg: style.foreground,
                    bg: style.background,
                    style: style.text_style.reverse(),
                },
            );
        }
    }
}

fn write_line(
    buf: &mut Buffer,
    rect: Rect,
    y: u16,
    text: &str,
    fg: Option<crossterm::style::Color>,
    bg: Option<crossterm::style::Color>,
    style: TextStyle,
) {
    let mut x = rect.left();
    for ch in text.chars() {
        let w = char_width(ch) as u16;
        if x + w > rect.right() {
            break;
        }
        buf.set(x, y, Cell { ch, fg, bg, style });
        x += w.max(1);
    }
}
