// Helpers for rendering tests

use ratatui::buffer::Buffer;

/// Buffer contents as one string per row
pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
