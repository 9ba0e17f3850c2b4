use serde::Serialize;

/// A screen point together with the sample index it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelPoint {
    x: i32,
    y: i32,
    sample: usize
}

impl PixelPoint {
    pub fn new(x: i32, y: i32, sample: usize) -> PixelPoint {
        PixelPoint { x, y, sample }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn sample(&self) -> usize {
        self.sample
    }
}

/// Points in drawing order, ready to hand to a line renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PixelPolyline {
    points: Vec<PixelPoint>
}

impl PixelPolyline {
    pub fn new() -> PixelPolyline {
        PixelPolyline { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> PixelPolyline {
        PixelPolyline { points: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, point: PixelPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<i32> {
        self.points.iter().map(PixelPoint::x).collect()
    }

    pub fn ys(&self) -> Vec<i32> {
        self.points.iter().map(PixelPoint::y).collect()
    }
}

impl FromIterator<PixelPoint> for PixelPolyline {
    fn from_iter<I: IntoIterator<Item = PixelPoint>>(iter: I) -> Self {
        PixelPolyline { points: iter.into_iter().collect() }
    }
}
