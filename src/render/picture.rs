//! Backend-independent drawing description
//!
//! A `Picture` is a tree of primitives. Hosts walk it with whatever graphics
//! library they like, or flatten it with [`super::vertex::tessellate`].

use glam::Vec2;

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

#[derive(Debug, Clone, PartialEq)]
pub enum Picture {
    Blank,
    /// Open polyline
    Line(Vec<Vec2>),
    /// Closed outline
    Polygon(Vec<Vec2>),
    /// Text anchored at its baseline start
    Text(String),
    Color(Color, Box<Picture>),
    Translate(Vec2, Box<Picture>),
    Pictures(Vec<Picture>),
}

impl Picture {
    pub fn line(points: impl IntoIterator<Item = Vec2>) -> Self {
        Picture::Line(points.into_iter().collect())
    }

    pub fn polygon(points: impl IntoIterator<Item = Vec2>) -> Self {
        Picture::Polygon(points.into_iter().collect())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Picture::Text(text.into())
    }

    pub fn colored(self, color: Color) -> Self {
        Picture::Color(color, Box::new(self))
    }

    pub fn translated(self, x: f32, y: f32) -> Self {
        Picture::Translate(Vec2::new(x, y), Box::new(self))
    }

    /// Draw `self` first, then `other` on top
    pub fn over(self, other: Picture) -> Self {
        match self {
            Picture::Pictures(mut pictures) => {
                pictures.push(other);
                Picture::Pictures(pictures)
            }
            picture => Picture::Pictures(vec![picture, other]),
        }
    }

    /// Number of drawable leaves (lines, polygons, text)
    pub fn primitive_count(&self) -> usize {
        match self {
            Picture::Blank => 0,
            Picture::Line(_) | Picture::Polygon(_) | Picture::Text(_) => 1,
            Picture::Color(_, inner) | Picture::Translate(_, inner) => inner.primitive_count(),
            Picture::Pictures(pictures) => pictures.iter().map(Picture::primitive_count).sum(),
        }
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Picture::Text(text) => out.push(text),
            Picture::Color(_, inner) | Picture::Translate(_, inner) => inner.collect_texts(out),
            Picture::Pictures(pictures) => pictures.iter().for_each(|p| p.collect_texts(out)),
            Picture::Blank | Picture::Line(_) | Picture::Polygon(_) => {}
        }
    }
}
