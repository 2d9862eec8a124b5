use std::{cell::Cell, fmt, rc::Rc};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse `r,g,b` with decimal components.
    pub fn parse(s: &str) -> Option<Rgb> {
        let mut parts = s.split(',').map(|p| p.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Some(Rgb(r, g, b)),
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        [r, g, b]
    }
}

// Qt's global colors in the order the legend cycles through them. White,
// yellow, light gray and transparent are left out, they vanish on the white
// canvas.
const STANDARD_COLORS: [Rgb; 14] = [
    Rgb(0, 0, 0),
    Rgb(255, 0, 0),
    Rgb(128, 0, 0),
    Rgb(0, 255, 0),
    Rgb(0, 128, 0),
    Rgb(0, 0, 255),
    Rgb(0, 0, 128),
    Rgb(0, 255, 255),
    Rgb(0, 128, 128),
    Rgb(255, 0, 255),
    Rgb(128, 0, 128),
    Rgb(128, 128, 0),
    Rgb(160, 160, 164),
    Rgb(128, 128, 128),
];

/// Fixed list of curve colors handed out round-robin.
///
/// Cloning a palette shares its cursor: every registry holding a clone of the
/// same palette continues the same color sequence.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Rc<[Rgb]>,
    cursor: Rc<Cell<usize>>,
}

impl Palette {
    /// Returns `None` for an empty color list.
    pub fn new(colors: Vec<Rgb>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self {
            colors: colors.into(),
            cursor: Rc::new(Cell::new(0)),
        })
    }

    pub fn standard() -> Self {
        Self {
            colors: STANDARD_COLORS.as_slice().into(),
            cursor: Rc::new(Cell::new(0)),
        }
    }

    pub fn next_color(&self) -> Rgb {
        let idx = self.cursor.get();
        self.cursor.set((idx + 1) % self.colors.len());
        self.colors[idx]
    }

    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
