//! Tile map with solid cells, used as the world the frog hops around in.
//!
//! One cell per integer coordinate, (0, 0) top left. Resolution is axis
//! separable: the x step is tried first from where the frog stood before the
//! tick, then the y step from the corrected x. An axis whose destination cell is
//! solid or off the map keeps its old coordinate, so the frog slides along walls
//! instead of sticking to them. Only destination cells are checked.

use std::collections::HashSet;
use std::path::Path;

use fred_core::{CollaboratorError, CollisionBody, World};
use glam::IVec2;
use serde::Deserialize;

use crate::load::{read_json, LoadError};

#[derive(Debug, Deserialize, Clone)]
pub struct MapFile {
    pub version: String,
    pub map_id: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub solids: Vec<GridCell>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone)]
pub struct GridMap {
    pub version: String,
    pub map_id: String,
    pub width: i32,
    pub height: i32,
    solids: HashSet<GridCell>,
}

impl GridMap {
    pub fn from_file(file: MapFile) -> Self {
        let solids = file.solids.into_iter().collect();
        Self {
            version: file.version,
            map_id: file.map_id,
            width: file.width,
            height: file.height,
            solids,
        }
    }

    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn is_solid(&self, cell: IVec2) -> bool {
        self.solids.contains(&GridCell {
            x: cell.x,
            y: cell.y,
        })
    }

    fn is_blocked(&self, cell: IVec2) -> bool {
        !self.in_bounds(cell) || self.is_solid(cell)
    }

    /// Where a body at `from` moving by `velocity` ends up.
    pub fn resolve_move(&self, from: IVec2, velocity: IVec2) -> IVec2 {
        let mut resolved = from;

        let step_x = IVec2::new(from.x.saturating_add(velocity.x), from.y);
        if !self.is_blocked(step_x) {
            resolved.x = step_x.x;
        }

        let step_y = IVec2::new(resolved.x, from.y.saturating_add(velocity.y));
        if !self.is_blocked(step_y) {
            resolved.y = step_y.y;
        }

        resolved
    }
}

impl World for GridMap {
    fn resolve_collisions(
        &mut self,
        body: &mut CollisionBody<'_>,
    ) -> Result<(), CollaboratorError> {
        let resolved = self.resolve_move(body.previous_position(), body.velocity());
        if resolved != body.position() {
            log::debug!(
                "map '{}' blocked move to {}, settled at {}",
                self.map_id,
                body.position(),
                resolved
            );
            body.set_position(resolved);
        }
        Ok(())
    }
}

pub fn load_map_from_path(path: &Path) -> Result<GridMap, LoadError> {
    let file: MapFile = read_json(path)?;
    validate_map_file(&file)?;
    Ok(GridMap::from_file(file))
}

fn validate_map_file(file: &MapFile) -> Result<(), LoadError> {
    if file.width <= 0 || file.height <= 0 {
        return Err(LoadError::invalid("map", "width and height must be > 0"));
    }

    let mut seen = HashSet::new();
    for cell in &file.solids {
        if cell.x < 0 || cell.x >= file.width || cell.y < 0 || cell.y >= file.height {
            return Err(LoadError::invalid(
                "map",
                format!("solid cell out of bounds ({}, {})", cell.x, cell.y),
            ));
        }
        if !seen.insert(*cell) {
            return Err(LoadError::invalid(
                "map",
                format!("duplicate solid cell ({}, {})", cell.x, cell.y),
            ));
        }
    }
    // Actors are born at the origin.
    if seen.contains(&GridCell { x: 0, y: 0 }) {
        return Err(LoadError::invalid("map", "spawn cell (0, 0) must be open"));
    }
    Ok(())
}
