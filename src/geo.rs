//! Geographic primitives shared by the camera and map contract.

/// A longitude/latitude pair in degrees.
///
/// Longitude first, matching the renderer's coordinate order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    /// Longitude in degrees, -180 to 180.
    pub lng: f64,
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
}

impl LngLat {
    /// Create a new coordinate pair.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// An axis-aligned geographic bounding box.
///
/// Built by seeding from one point and expanding over the rest, the way
/// the camera derives a fit target from a boundary feature's ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// A degenerate box containing a single point.
    pub fn from_point(point: LngLat) -> Self {
        Self {
            min_lng: point.lng,
            min_lat: point.lat,
            max_lng: point.lng,
            max_lat: point.lat,
        }
    }

    /// Grow the box to include `point`.
    pub fn expand(&mut self, point: LngLat) {
        self.min_lng = self.min_lng.min(point.lng);
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lng = self.max_lng.max(point.lng);
        self.max_lat = self.max_lat.max(point.lat);
    }

    /// The minimal box enclosing all points, or `None` for an empty slice.
    pub fn enclosing(points: &[LngLat]) -> Option<Self> {
        let mut iter = points.iter();
        let mut bounds = Self::from_point(*iter.next()?);
        for point in iter {
            bounds.expand(*point);
        }
        Some(bounds)
    }

    /// Center of the box.
    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Whether the box contains `point` (inclusive edges).
    pub fn contains(&self, point: LngLat) -> bool {
        point.lng >= self.min_lng
            && point.lng <= self.max_lng
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}
