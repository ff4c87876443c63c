//! Millimeter geometry for components placed on a panel.
//!
//! All values stored here are already converted to millimeters and rounded
//! to three decimal places, which is the precision emitted into generated
//! source.

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Units per inch assumed for panels whose height is not given in `mm`.
pub const SVG_DPI: f64 = 75.0;

/// Weight of the x coordinate in the reading-order sort key.
const READING_ORDER_X_WEIGHT: f64 = 0.01;

/// Rounds a value to three decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A point in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Geometry of a component shape.
///
/// Rectangles remember their top-left corner and size so that generated code
/// can position them by corner; ellipses (and circles) only carry a center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect {
        top_left: Point,
        width: f64,
        height: f64,
        center: Point,
    },
    Ellipse {
        center: Point,
    },
}

impl Shape {
    /// Builds a rectangle from raw document units.
    ///
    /// Every value is multiplied by `scale` and rounded. The center is derived
    /// from the scaled values before rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen_core::geometry::Shape;
    ///
    /// let rect = Shape::rect(2.0, 3.0, 4.0, 4.0, 1.0);
    /// assert_eq!(rect.center().x(), 4.0);
    /// assert_eq!(rect.center().y(), 5.0);
    /// ```
    pub fn rect(x: f64, y: f64, width: f64, height: f64, scale: f64) -> Self {
        let (x, y, width, height) = (x * scale, y * scale, width * scale, height * scale);
        Self::Rect {
            top_left: Point::new(round3(x), round3(y)),
            width: round3(width),
            height: round3(height),
            center: Point::new(round3(x + width / 2.0), round3(y + height / 2.0)),
        }
    }

    /// Builds an ellipse (or circle) from a raw center in document units.
    pub fn ellipse(cx: f64, cy: f64, scale: f64) -> Self {
        Self::Ellipse {
            center: Point::new(round3(cx * scale), round3(cy * scale)),
        }
    }

    /// Returns the center of the shape.
    pub fn center(&self) -> Point {
        match self {
            Self::Rect { center, .. } | Self::Ellipse { center } => *center,
        }
    }

    /// Returns the top-left corner, available only for rectangles.
    pub fn top_left(&self) -> Option<Point> {
        match self {
            Self::Rect { top_left, .. } => Some(*top_left),
            Self::Ellipse { .. } => None,
        }
    }

    /// Returns `(width, height)`, available only for rectangles.
    pub fn size(&self) -> Option<(f64, f64)> {
        match self {
            Self::Rect { width, height, .. } => Some((*width, *height)),
            Self::Ellipse { .. } => None,
        }
    }

    /// Sort key approximating reading order: rows top to bottom, then left to right.
    pub fn reading_order_key(&self) -> f64 {
        let center = self.center();
        center.y() + READING_ORDER_X_WEIGHT * center.x()
    }
}

/// Returns the document-unit to millimeter factor for a root `height` attribute.
///
/// Heights ending in `mm` are already millimeters. Anything else, including a
/// missing height, is assumed to use 75 units per inch.
///
/// # Examples
///
/// ```
/// use panelgen_core::geometry::scale_for_height;
///
/// assert_eq!(scale_for_height(Some("128.5mm")), 1.0);
/// assert_eq!(scale_for_height(Some("380")), 25.4 / 75.0);
/// ```
pub fn scale_for_height(height: Option<&str>) -> f64 {
    match height {
        Some(height) if height.trim_end().ends_with("mm") => 1.0,
        _ => MM_PER_INCH / SVG_DPI,
    }
}
