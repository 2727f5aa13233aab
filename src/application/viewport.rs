/// Viewport maps the grid onto the drawing area.
/// Screen y grows downwards while grid rows grow upwards, so the
/// mapping flips the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Side length of one cell in pixels
    pub cell_size: f32,
    grid_width: usize,
    grid_height: usize,
}

impl Viewport {
    /// Largest uniform cell size that fits the whole grid, centered
    pub fn fit(grid_width: usize, grid_height: usize, area_width: f32, area_height: f32) -> Self {
        let cell_size = (area_width / grid_width.max(1) as f32)
            .min(area_height / grid_height.max(1) as f32)
            .max(f32::MIN_POSITIVE);
        let offset_x = (area_width - cell_size * grid_width as f32) / 2.0;
        let offset_y = (area_height - cell_size * grid_height as f32) / 2.0;
        Self {
            offset_x,
            offset_y,
            cell_size,
            grid_width,
            grid_height,
        }
    }

    /// Convert screen coordinates to (col, row). The result may lie outside
    /// the grid; the brush clips it.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i64, i64) {
        let col = ((screen_x - self.offset_x) / self.cell_size).floor() as i64;
        let row_from_top = ((screen_y - self.offset_y) / self.cell_size).floor() as i64;
        (col, self.grid_height as i64 - 1 - row_from_top)
    }

    /// Screen position of the top-left corner of a cell. Cells outside the
    /// grid map outside the grid rectangle.
    pub fn grid_to_screen(&self, col: i64, row: i64) -> (f32, f32) {
        let row_from_top = self.grid_height as i64 - 1 - row;
        let screen_x = self.offset_x + col as f32 * self.cell_size;
        let screen_y = self.offset_y + row_from_top as f32 * self.cell_size;
        (screen_x, screen_y)
    }

    /// Screen rectangle (x, y, width, height) covered by the grid
    pub fn grid_rect(&self) -> (f32, f32, f32, f32) {
        (
            self.offset_x,
            self.offset_y,
            self.grid_width as f32 * self.cell_size,
            self.grid_height as f32 * self.cell_size,
        )
    }
}
