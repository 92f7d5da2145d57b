//! Pointer input classification.
//!
//! A click on the canvas becomes an [`AddPoint`] intent: the click position is
//! translated into surface-local coordinates and the point class is chosen
//! from the modifier state. Shift selects the blue (secondary) class; any
//! other combination, including none, selects red.

use super::geometry::Point;

/// The two point classes the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointClass {
    /// Primary class, plain click.
    Red,
    /// Secondary class, shift + click.
    Blue,
}

impl PointClass {
    pub fn is_secondary(self) -> bool {
        self == PointClass::Blue
    }

    pub fn label(self) -> &'static str {
        match self {
            PointClass::Red => "red",
            PointClass::Blue => "blue",
        }
    }
}

/// Modifier keys held while the pointer event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        command: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        command: false,
    };
}

impl From<egui::Modifiers> for Modifiers {
    fn from(m: egui::Modifiers) -> Self {
        Self {
            shift: m.shift,
            ctrl: m.ctrl,
            alt: m.alt,
            command: m.command,
        }
    }
}

/// A raw click in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub screen_x: f64,
    pub screen_y: f64,
    pub modifiers: Modifiers,
}

/// Classified request to add one point to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddPoint {
    pub point: Point,
    pub class: PointClass,
}

/// Classify a click relative to a surface whose top-left corner sits at
/// `surface_origin` in screen space.
///
/// The subtraction is exact; no rounding or snapping is applied.
pub fn map_click(click: &PointerClick, surface_origin: Point) -> AddPoint {
    let class = if click.modifiers.shift {
        PointClass::Blue
    } else {
        PointClass::Red
    };
    AddPoint {
        point: Point::new(
            click.screen_x - surface_origin.x,
            click.screen_y - surface_origin.y,
        ),
        class,
    }
}
