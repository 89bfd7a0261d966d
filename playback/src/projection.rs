//! World space to radar space to drawing surface.

use common::MapConfig;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    pos_x: f64,
    pos_y: f64,
    scale: f64,
    radar_width: f64,
    radar_height: f64,
    surface_width: f64,
    surface_height: f64,
}

impl Projector {
    pub fn new(map: &MapConfig, surface_width: f64, surface_height: f64) -> Self {
        let map = map.clone().with_default_radar_size();

        Self {
            pos_x: map.pos_x,
            pos_y: map.pos_y,
            scale: map.scale,
            radar_width: map.radar_width as f64,
            radar_height: map.radar_height as f64,
            surface_width,
            surface_height,
        }
    }

    /// World coordinates to radar pixels. World y grows up, radar y grows down.
    pub fn world_to_map(&self, world_x: f64, world_y: f64) -> Point {
        Point {
            x: (world_x - self.pos_x) / self.scale,
            y: (self.pos_y - world_y) / self.scale,
        }
    }

    pub fn map_to_surface(&self, map: Point) -> Point {
        Point {
            x: map.x / self.radar_width * self.surface_width,
            y: map.y / self.radar_height * self.surface_height,
        }
    }

    pub fn world_to_surface(&self, world_x: f64, world_y: f64) -> Point {
        self.map_to_surface(self.world_to_map(world_x, world_y))
    }
}

/// Game yaw (degrees, counter-clockwise) to clockwise screen radians.
pub fn yaw_to_screen(yaw_degrees: f64) -> f64 {
    -yaw_degrees.to_radians()
}
