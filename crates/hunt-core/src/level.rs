//! Level geometry: rooms and the tunnels that join them.
//!
//! Room 0 is always the spawn room. Tunnels are not stored; every peripheral
//! room is joined to the spawn room by one straight tunnel derived from the two
//! room centers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box room. Immutable after generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Floor-level center of the room.
    pub center: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub has_entities: bool,
}

/// A straight corridor from the spawn room to a peripheral room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunnel {
    pub from: usize,
    pub to: usize,
    /// Point where the tunnel leaves the spawn room wall.
    pub start: Vec3,
    /// Point where the tunnel enters the peripheral room wall.
    pub end: Vec3,
    pub length: f32,
}

/// Ordered rooms of one generated level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelGraph {
    pub rooms: Vec<Room>,
}

impl Room {
    /// Minimum corner (floor level).
    pub fn min(&self) -> Vec3 {
        self.center - Vec3::new(self.width * 0.5, 0.0, self.depth * 0.5)
    }

    /// Maximum corner (ceiling level).
    pub fn max(&self) -> Vec3 {
        self.center + Vec3::new(self.width * 0.5, self.height, self.depth * 0.5)
    }

    /// Horizontal half-extents shrunk by `margin`, never below zero.
    pub fn inner_half_extents(&self, margin: f32) -> (f32, f32) {
        (
            (self.width * 0.5 - margin).max(0.0),
            (self.depth * 0.5 - margin).max(0.0),
        )
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Distance from the center to the wall along a horizontal unit direction.
    fn wall_distance(&self, direction: Vec3) -> f32 {
        let tx = if direction.x.abs() > f32::EPSILON {
            self.width * 0.5 / direction.x.abs()
        } else {
            f32::INFINITY
        };
        let tz = if direction.z.abs() > f32::EPSILON {
            self.depth * 0.5 / direction.z.abs()
        } else {
            f32::INFINITY
        };
        tx.min(tz)
    }
}

impl LevelGraph {
    /// The spawn room, if the level has any rooms.
    pub fn spawn_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    /// Rooms flagged for population, with their indices.
    pub fn populated_rooms(&self) -> impl Iterator<Item = (usize, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.has_entities)
    }

    /// One tunnel per peripheral room, in room order.
    pub fn tunnels(&self) -> Vec<Tunnel> {
        let Some(spawn) = self.spawn_room() else {
            return Vec::new();
        };

        self.rooms
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, room)| {
                let offset = room.center - spawn.center;
                let flat = Vec3::new(offset.x, 0.0, offset.z);
                let distance = flat.length();
                if distance <= f32::EPSILON {
                    return None;
                }
                let direction = flat / distance;
                let start = spawn.center + direction * spawn.wall_distance(direction);
                let end = room.center - direction * room.wall_distance(direction);
                Some(Tunnel {
                    from: 0,
                    to: index,
                    start,
                    end,
                    length: start.distance(end),
                })
            })
            .collect()
    }

    /// Axis-aligned bounds enclosing every room as `(min, max)`.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut rooms = self.rooms.iter();
        let first = rooms.next()?;
        Some(rooms.fold((first.min(), first.max()), |(min, max), room| {
            (min.min(room.min()), max.max(room.max()))
        }))
    }
}
