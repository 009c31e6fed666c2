//! Frame drawing for the input widget.
//!
//! One full redraw per keystroke: box outline around the field, the visible
//! slice of the buffer (or the placeholder, dimmed, while empty), the
//! Visual selection in reverse video, and a status block naming the mode
//! and the live indices. The layout is fixed: field at a constant origin,
//! status block a few rows below.
//!
//! The window arithmetic lives in pure helpers (`visible_text`,
//! `selection_span`) so it can be tested without a terminal.

use anyhow::Result;
use core_events::KeyEvent;
use core_model::{InputModel, View};
use core_state::Mode;
use core_text::LineBuffer;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Field origin (0-based terminal cells); the outline sits one cell out.
pub const FIELD_ROW: u16 = 2;
pub const FIELD_COL: u16 = 2;
/// Rows between the field and the status block.
const STATUS_GAP: u16 = 2;

/// The `width` slots visible from `offset`, space-padded to exactly
/// `width` characters so stale cells are always overwritten.
pub fn visible_text(buf: &LineBuffer, offset: usize, width: usize) -> String {
    let mut out = String::with_capacity(width);
    for i in offset..offset + width {
        out.push(buf.char_at(i).unwrap_or(' '));
    }
    out
}

/// Intersection of the inclusive selection `[min(anchor,cursor),
/// max(anchor,cursor)]` with the visible window, as half-open column
/// indices within `[0, width)`. `None` when the selection is entirely
/// off-screen.
pub fn selection_span(
    anchor: usize,
    cursor: usize,
    offset: usize,
    width: usize,
) -> Option<(usize, usize)> {
    let start = anchor.min(cursor).max(offset);
    let end = (anchor.max(cursor) + 1).min(offset + width);
    if start >= end {
        return None;
    }
    Some((start - offset, end - offset))
}

fn draw_outline(out: &mut impl Write, width: usize) -> Result<()> {
    let horiz: String = "─".repeat(width);
    queue!(
        out,
        MoveTo(FIELD_COL - 1, FIELD_ROW - 1),
        Print(format!("┌{horiz}┐")),
        MoveTo(FIELD_COL - 1, FIELD_ROW),
        Print("│"),
        MoveTo(FIELD_COL + width as u16, FIELD_ROW),
        Print("│"),
        MoveTo(FIELD_COL - 1, FIELD_ROW + 1),
        Print(format!("└{horiz}┘")),
    )?;
    Ok(())
}

fn draw_field(out: &mut impl Write, model: &InputModel) -> Result<()> {
    let view = &model.view;
    let buf = model.state.buffer();
    queue!(out, MoveTo(FIELD_COL, FIELD_ROW))?;
    if buf.is_empty()
        && let Some(placeholder) = model.state.placeholder.as_deref()
    {
        let shown: String = placeholder.chars().take(view.width).collect();
        let pad = " ".repeat(view.width - shown.chars().count());
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(shown),
            SetAttribute(Attribute::Reset),
            Print(pad),
        )?;
        return Ok(());
    }
    let text = visible_text(buf, view.offset, view.width);
    let selection = match (model.state.mode, model.state.anchor) {
        (Mode::Visual, Some(anchor)) => {
            selection_span(anchor, view.cursor, view.offset, view.width)
        }
        _ => None,
    };
    match selection {
        Some((from, to)) => {
            let cells: Vec<char> = text.chars().collect();
            let before: String = cells[..from].iter().collect();
            let selected: String = cells[from..to].iter().collect();
            let after: String = cells[to..].iter().collect();
            queue!(
                out,
                Print(before),
                SetAttribute(Attribute::Reverse),
                Print(selected),
                SetAttribute(Attribute::Reset),
                Print(after),
            )?;
        }
        None => queue!(out, Print(text))?,
    }
    Ok(())
}

fn draw_status(out: &mut impl Write, model: &InputModel, last_key: Option<&KeyEvent>) -> Result<()> {
    let row = FIELD_ROW + STATUS_GAP + 1;
    let view = &model.view;
    let lines = [
        format!("mode:   {}", model.state.mode.name()),
        format!("len:    {}", model.state.buffer().len()),
        format!("cursor: {}", view.cursor),
        format!("offset: {}", view.offset),
        match last_key {
            Some(k) => format!("key:    {k}"),
            None => "key:".to_string(),
        },
    ];
    for (i, line) in lines.iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row + i as u16),
            Clear(ClearType::CurrentLine),
            Print(line),
        )?;
    }
    Ok(())
}

/// Where the terminal cursor belongs: the cursor's column inside the field.
pub fn cursor_position(view: &View) -> (u16, u16) {
    let col = view.cursor.saturating_sub(view.offset);
    (FIELD_COL + col.min(view.width) as u16, FIELD_ROW)
}

/// Draw one complete frame and park the terminal cursor on the live slot.
pub fn draw_frame(
    out: &mut impl Write,
    model: &InputModel,
    last_key: Option<&KeyEvent>,
) -> Result<()> {
    draw_outline(out, model.view.width)?;
    draw_field(out, model)?;
    draw_status(out, model, last_key)?;
    let (col, row) = cursor_position(&model.view);
    queue!(out, MoveTo(col, row))?;
    out.flush()?;
    Ok(())
}
