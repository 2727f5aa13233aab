use macroquad::prelude::*;

/// Clickable panel button with a hover highlight
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
}

const IDLE_COLOR: Color = Color::new(0.45, 0.43, 0.36, 1.0);
const HOVER_COLOR: Color = Color::new(0.6, 0.57, 0.45, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
        }
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&point.0)
            && (self.y..=self.y + self.height).contains(&point.1)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.contains(mouse_pos) { HOVER_COLOR } else { IDLE_COLOR };
        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 30.0, "Step");
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 50.0)));
        assert!(button.contains((60.0, 35.0)));
        assert!(!button.contains((9.9, 35.0)));
        assert!(!button.contains((60.0, 50.1)));
    }
}
