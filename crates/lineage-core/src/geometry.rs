//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the geometric types used by Lineage when placing
//! nodes on the layout grid and converting grid cells into pixels.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, either in grid units or in pixels
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Lineage uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Ancestors of the focus node live at negative Y, descendants at positive Y.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use lineage_core::geometry::Point;
/// let point = Point::new(10.0, 20.0).with_y(-1.0);
///
/// assert_eq!(point.x(), 10.0);
/// assert_eq!(point.y(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Maps a grid cell onto pixel space.
    ///
    /// Each axis is multiplied by the matching dimension of `scale` and then
    /// shifted by the matching dimension of `margin`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineage_core::geometry::{Point, Size};
    /// let cell = Point::new(2.0, -1.0);
    /// let pixel = cell.rescale(Size::new(120.0, 70.0), Size::new(10.0, 20.0));
    ///
    /// assert_eq!(pixel.x(), 250.0);
    /// assert_eq!(pixel.y(), -50.0);
    /// ```
    pub fn rescale(self, scale: Size, margin: Size) -> Self {
        Self {
            x: self.x.mul_add(scale.width, margin.width),
            y: self.y.mul_add(scale.height, margin.height),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size grown by `margin` on both sides of each axis
    pub fn add_margin(self, margin: Size) -> Self {
        Self {
            width: margin.width.mul_add(2.0, self.width),
            height: margin.height.mul_add(2.0, self.height),
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates zero-sized bounds located at a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Grows the bounds so that they also contain `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineage_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_point(Point::new(10.0, 10.0))
    ///     .include(Point::new(-5.0, 40.0));
    ///
    /// assert_eq!(bounds.min_x(), -5.0);
    /// assert_eq!(bounds.max_y(), 40.0);
    /// assert_eq!(bounds.width(), 15.0);
    /// ```
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }
}
