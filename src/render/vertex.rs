//! Vertex types for 2D rendering
//!
//! Flattens a [`Picture`] into a line-list vertex buffer (two vertices per
//! segment) that a GPU host can upload as-is. Text is left to the host's font
//! renderer and produces no vertices.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::picture::{Color, Picture};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Color used when no `Picture::Color` wraps a primitive
pub const DEFAULT_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// Flatten `picture` into line-list vertices
pub fn tessellate(picture: &Picture) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    push_picture(&mut vertices, picture, Vec2::ZERO, DEFAULT_COLOR);
    vertices
}

/// Raw bytes for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

fn push_picture(out: &mut Vec<Vertex>, picture: &Picture, offset: Vec2, color: Color) {
    match picture {
        Picture::Blank | Picture::Text(_) => {}
        Picture::Line(points) => push_segments(out, points.windows(2), offset, color),
        Picture::Polygon(points) => {
            push_segments(out, points.windows(2), offset, color);
            // Close the outline
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                if points.len() > 2 {
                    push_segment(out, last, first, offset, color);
                }
            }
        }
        Picture::Color(color, inner) => push_picture(out, inner, offset, *color),
        Picture::Translate(delta, inner) => push_picture(out, inner, offset + *delta, color),
        Picture::Pictures(pictures) => {
            for picture in pictures {
                push_picture(out, picture, offset, color);
            }
        }
    }
}

fn push_segments<'a>(
    out: &mut Vec<Vertex>,
    pairs: impl Iterator<Item = &'a [Vec2]>,
    offset: Vec2,
    color: Color,
) {
    for pair in pairs {
        push_segment(out, pair[0], pair[1], offset, color);
    }
}

fn push_segment(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, offset: Vec2, color: Color) {
    let (a, b) = (a + offset, b + offset);
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
}
