use wayfind_core::Coord;

/// Straight-line (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Total length of the polyline through `points`.
pub fn polyline_length(points: &[Coord]) -> f64 {
    points.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}
