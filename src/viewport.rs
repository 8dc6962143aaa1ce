use crate::model::{FsEntry, PanelState};

impl PanelState {
    /// Replaces the listing wholesale; position is never carried across.
    pub fn set_entries(&mut self, entries: Vec<FsEntry>) {
        self.entries = entries;
        self.selected_index = 0;
        self.viewport_offset = 0;
    }

    pub fn move_selection(&mut self, delta: isize, visible_rows: usize) {
        if self.entries.is_empty() {
            self.selected_index = 0;
            self.viewport_offset = 0;
            return;
        }

        let last = self.entries.len() - 1;
        self.selected_index = if delta < 0 {
            self.selected_index.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected_index.saturating_add(delta.unsigned_abs())
        }
        .min(last);
        self.ensure_selection_visible(visible_rows);
    }

    pub fn page_move(&mut self, pages: isize, visible_rows: usize) {
        let rows = isize::try_from(visible_rows.max(1)).unwrap_or(isize::MAX);
        self.move_selection(pages.saturating_mul(rows), visible_rows);
    }

    /// Re-derives the viewport so the selection sits inside it, then clamps
    /// the offset to the scrollable range. Also used after a resize.
    pub fn ensure_selection_visible(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.entries.is_empty() {
            self.selected_index = 0;
            self.viewport_offset = 0;
            return;
        }

        self.selected_index = self.selected_index.min(self.entries.len() - 1);
        if self.selected_index < self.viewport_offset {
            self.viewport_offset = self.selected_index;
        }
        if self.selected_index >= self.viewport_offset + visible_rows {
            self.viewport_offset = self.selected_index + 1 - visible_rows;
        }
        let max_offset = self.entries.len().saturating_sub(visible_rows);
        self.viewport_offset = self.viewport_offset.min(max_offset);
    }

    pub fn visible_range(&self, visible_rows: usize) -> std::ops::Range<usize> {
        let start = self.viewport_offset.min(self.entries.len());
        let end = (start + visible_rows).min(self.entries.len());
        start..end
    }
}

/// Scrollbar thumb placement on a track of `visible_rows` cells, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    pub track_height: usize,
    pub thumb_position: usize,
    pub thumb_size: usize,
}

impl ScrollbarGeometry {
    /// `None` when the whole listing fits and no scrollbar is drawn.
    pub fn compute(total: usize, visible_rows: usize, viewport_offset: usize) -> Option<Self> {
        if visible_rows == 0 || total <= visible_rows {
            return None;
        }

        let track_height = visible_rows;
        let scrollable = total - visible_rows;
        let offset = viewport_offset.min(scrollable);
        let thumb_position = 1 + offset * (track_height - 1) / scrollable;
        let mut thumb_size = (visible_rows * track_height / total).max(1);
        if thumb_position + thumb_size - 1 > track_height {
            thumb_size = track_height - thumb_position + 1;
        }

        Some(Self {
            track_height,
            thumb_position,
            thumb_size,
        })
    }

    pub fn covers(&self, row: usize) -> bool {
        row >= self.thumb_position && row < self.thumb_position + self.thumb_size
    }
}
