use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 16.0;

const CLOSED_COLOR: Color = Color::new(0.45, 0.43, 0.36, 1.0);
const HOVER_COLOR: Color = Color::new(0.6, 0.57, 0.45, 1.0);
const SELECTED_COLOR: Color = Color::new(0.35, 0.33, 0.27, 1.0);
const MENU_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Dropdown selector for the control panel
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            items,
            selected: 0,
            is_open: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Screen rectangle of the header (`None`) or of a menu row
    fn rect(&self, row: Option<usize>) -> Rect {
        let offset = row.map_or(0.0, |i| (i + 1) as f32 * ROW_HEIGHT);
        Rect::new(self.x, self.y + offset, self.width, ROW_HEIGHT)
    }

    fn row_at(&self, point: (f32, f32)) -> Option<usize> {
        let point = vec2(point.0, point.1);
        (0..self.items.len()).find(|&i| self.rect(Some(i)).contains(point))
    }

    fn header_contains(&self, point: (f32, f32)) -> bool {
        self.rect(None).contains(vec2(point.0, point.1))
    }

    /// Feed a left click at `point`. Returns true if the selection changed.
    pub fn click(&mut self, point: (f32, f32)) -> bool {
        if self.header_contains(point) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        match self.row_at(point) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    /// Handle this frame's mouse input. Returns true if the selection changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.click(mouse_pos)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.rect(None);
        let fill = if self.header_contains(mouse_pos) { HOVER_COLOR } else { CLOSED_COLOR };
        draw_rectangle(header.x, header.y, header.w, header.h, fill);
        draw_rectangle_lines(header.x, header.y, header.w, header.h, 2.0, WHITE);
        draw_text(&fit_text(&self.items[self.selected], header.w - 30.0), header.x + 5.0, header.y + 20.0, FONT_SIZE, WHITE);
        draw_text("v", header.x + header.w - 16.0, header.y + 20.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let hovered = self.row_at(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let row = self.rect(Some(i));
            let fill = if hovered == Some(i) {
                HOVER_COLOR
            } else if i == self.selected {
                SELECTED_COLOR
            } else {
                MENU_COLOR
            };
            draw_rectangle(row.x, row.y, row.w, row.h, fill);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, DARKGRAY);
            draw_text(&fit_text(item, row.w - 10.0), row.x + 5.0, row.y + 20.0, FONT_SIZE, WHITE);
        }
    }
}

/// Truncate with an ellipsis so the text fits `max_width` pixels
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenes() -> Dropdown {
        let items = ["Floor", "Basin", "Hourglass"].map(String::from).to_vec();
        Dropdown::new(0.0, 0.0, 100.0, "Scene", items)
    }

    #[test]
    fn test_header_click_toggles_open() {
        let mut dropdown = scenes();
        assert!(!dropdown.click((50.0, 10.0)));
        assert!(dropdown.is_open());
        assert!(!dropdown.click((50.0, 10.0)));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_clicking_an_item_selects_it_and_closes() {
        let mut dropdown = scenes();
        dropdown.click((50.0, 10.0));
        // Third row starts at 3 * ROW_HEIGHT
        assert!(dropdown.click((50.0, 3.0 * ROW_HEIGHT + 5.0)));
        assert_eq!(dropdown.selected(), 2);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_clicks_on_closed_menu_rows_are_ignored() {
        let mut dropdown = scenes();
        assert!(!dropdown.click((50.0, ROW_HEIGHT + 5.0)));
        assert_eq!(dropdown.selected(), 0);
    }

    #[test]
    fn test_clicking_outside_closes_without_change() {
        let mut dropdown = scenes();
        dropdown.click((50.0, 10.0));
        assert!(!dropdown.click((500.0, 500.0)));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected(), 0);
    }

    #[test]
    fn test_set_selected_ignores_out_of_range() {
        let mut dropdown = scenes();
        dropdown.set_selected(1);
        dropdown.set_selected(9);
        assert_eq!(dropdown.selected(), 1);
    }
}
