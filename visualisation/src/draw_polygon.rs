use bounce_engine as be;

use macroquad::prelude::*;
use i_triangle::float::triangulatable::Triangulatable;

const DISK_SEGMENTS: u32 = 48;

/// Triangulated mesh of a disk, in world coordinates
pub fn disk_mesh(disk: be::Disk, color: Color) -> Mesh {
    let outline = disk.polygon(DISK_SEGMENTS);
    let triangulation = outline.as_slice().triangulate().to_triangulation();

    Mesh {
        vertices: triangulation.points.iter().map(|point| Vertex {
            position: point.extend(0.),
            uv: Vec2::ZERO,
            color: color.into(),
            normal: Vec4::ZERO,
        }).collect(),
        indices: triangulation.indices,
        texture: None,
    }
}

pub fn draw_disk(disk: be::Disk, color: Color) {
    draw_mesh(&disk_mesh(disk, color));
}
