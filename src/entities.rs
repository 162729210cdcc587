//! Entity types for the playfield: pure data plus the geometry helpers the
//! systems share.

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Open-interval overlap: rectangles that only share an edge do not touch.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The player's ship. `x` is the horizontal centre, `y` the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
}

impl Bullet {
    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.size, height: self.size }
    }

    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    pub fn inside(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.x <= width && self.y >= 0.0 && self.y <= height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub word: String,
    /// Downward pixels per frame.
    pub speed: f64,
    pub health: u32,
    pub max_health: u32,
    pub points: u64,
    pub boss: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }

    /// Case-insensitive match against already-normalized input.
    pub fn answers_to(&self, normalized: &str) -> bool {
        self.word.to_lowercase() == normalized
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    /// Hue in degrees; rendered at full saturation, 50% lightness.
    pub hue: f64,
    /// Remaining frames.
    pub life: u32,
}

impl Particle {
    pub fn color(&self) -> String {
        format!("hsl({:.1}, 100%, 50%)", self.hue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, width: w, height: h }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0)));
        assert!(a.overlaps(&rect(9.5, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn bullet_bounds_check_is_inclusive() {
        let mut b = Bullet { x: 800.0, y: 0.0, dx: 0.5, dy: 0.0, size: 8.0 };
        assert!(b.inside(800.0, 500.0));
        b.advance();
        assert!(!b.inside(800.0, 500.0));
    }

    #[test]
    fn word_match_ignores_stored_case() {
        let e = Enemy {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 40.0,
            word: "Cannon".into(),
            speed: 1.0,
            health: 1,
            max_health: 1,
            points: 60,
            boss: false,
        };
        assert!(e.answers_to("cannon"));
        assert!(!e.answers_to("canon"));
    }
}
