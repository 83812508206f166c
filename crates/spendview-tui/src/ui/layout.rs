// Layout constants plus the per-frame hit zones for mouse interaction.
//
// The renderer is the only place with real layout data, so it records the
// rectangles mouse handlers need (row cells, the search drop target) into
// `HitZones` on every frame; input handlers hit-test against the last
// recorded frame.

use ratatui::layout::Rect;
use spendview_core::session::DragSource;

/// Height of the one-line header.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the one-line status bar at the very bottom.
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Fixed width of the search side panel.
pub const SEARCH_PANEL_WIDTH: u16 = 44;

/// Rows of item detail (description / reasoning) under the table.
pub const DETAIL_HEIGHT: u16 = 5;

/// One draggable cell in the results table.
#[derive(Debug, Clone, Copy)]
pub struct CellZone {
    pub item_id: u64,
    pub source: DragSource,
    pub area: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct HitZones {
    /// Supplier and material cells, drag sources.
    pub cells: Vec<CellZone>,
    /// Full row rects for click-to-select.
    pub rows: Vec<(usize, Rect)>,
    /// The search panel's drop target, when the panel is visible.
    pub drop_target: Option<Rect>,
    /// The whole table body, for scroll routing.
    pub table: Rect,
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

impl HitZones {
    /// Called at the start of every frame before zones are re-recorded.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.rows.clear();
        self.drop_target = None;
        self.table = Rect::default();
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<CellZone> {
        self.cells.iter().copied().find(|c| contains(c.area, x, y))
    }

    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, area)| contains(*area, x, y))
            .map(|(index, _)| *index)
    }

    pub fn in_drop_target(&self, x: u16, y: u16) -> bool {
        self.drop_target.is_some_and(|area| contains(area, x, y))
    }

    pub fn in_table(&self, x: u16, y: u16) -> bool {
        contains(self.table, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, w: u16, h: u16) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn cell_hit_testing() {
        let mut zones = HitZones::default();
        zones.cells.push(CellZone {
            item_id: 3,
            source: DragSource::Supplier,
            area: rect(0, 2, 15, 1),
        });
        zones.cells.push(CellZone {
            item_id: 3,
            source: DragSource::Material,
            area: rect(15, 2, 20, 1),
        });

        let hit = zones.cell_at(4, 2).unwrap();
        assert_eq!(hit.item_id, 3);
        assert_eq!(hit.source, DragSource::Supplier);

        let hit = zones.cell_at(16, 2).unwrap();
        assert_eq!(hit.source, DragSource::Material);

        assert!(zones.cell_at(4, 3).is_none());
        // Right edge is exclusive.
        assert!(zones.cell_at(35, 2).is_none());
    }

    #[test]
    fn drop_target_hit_testing() {
        let mut zones = HitZones::default();
        assert!(!zones.in_drop_target(5, 5));
        zones.drop_target = Some(rect(40, 1, 20, 3));
        assert!(zones.in_drop_target(40, 1));
        assert!(zones.in_drop_target(59, 3));
        assert!(!zones.in_drop_target(60, 1));
    }

    #[test]
    fn clear_resets_everything() {
        let mut zones = HitZones::default();
        zones.rows.push((0, rect(0, 2, 40, 1)));
        zones.drop_target = Some(rect(0, 0, 1, 1));
        zones.clear();
        assert!(zones.rows.is_empty());
        assert!(zones.drop_target.is_none());
    }
}
