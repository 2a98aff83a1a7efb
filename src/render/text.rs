use crate::model::{Block, Tick};

/// Character-grid rendering of a display snapshot.
///
/// One column per button, one line per row. The playhead is the bottom
/// row and blocks scroll upward as they age, so a freshly pressed
/// button fills from the bottom. Each row covers `track_limit / rows`
/// ticks; a row is filled when any block overlaps its distance span.
pub struct TextFrame {
    rows: usize,
    track_limit: Tick,
}

impl TextFrame {
    pub fn new(rows: usize, track_limit: Tick) -> Self {
        Self {
            rows: rows.max(1),
            track_limit,
        }
    }

    /// Render one board's buttons into `rows` lines, top row first.
    pub fn render_board(&self, buttons: &[Vec<Block>]) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                buttons
                    .iter()
                    .map(|blocks| if self.row_filled(blocks, row) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    /// Render every board side by side into one printable string.
    pub fn render(&self, snapshot: &[Vec<Vec<Block>>]) -> String {
        let boards: Vec<Vec<String>> = snapshot
            .iter()
            .map(|board| self.render_board(board))
            .collect();
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let line: Vec<&str> = boards.iter().map(|board| board[row].as_str()).collect();
            lines.push(line.join("  "));
        }
        lines.join("\n")
    }

    fn row_filled(&self, blocks: &[Block], row: usize) -> bool {
        let rows = self.rows as Tick;
        let row = row as Tick;
        // row 0 covers the oldest distances, the bottom row the playhead
        let near = (rows - 1 - row) * self.track_limit / rows;
        let far = (rows - row) * self.track_limit / rows;
        blocks.iter().any(|b| b.start < far && b.stop > near)
    }
}
