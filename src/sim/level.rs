//! Level definitions: spawn walls and the waves behind them
//!
//! Walls are ordered along the scroll axis. A level is validated once when
//! it's built; the simulation trusts it afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Regular,
    Boss,
}

/// Side of the screen a spawn appears on, relative to the scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnSide {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnDescriptor {
    pub kind: EnemyKind,
    pub side: SpawnSide,
}

impl SpawnDescriptor {
    pub const fn new(kind: EnemyKind, side: SpawnSide) -> Self {
        Self { kind, side }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnWall {
    /// World x the player has to reach to release the wave
    pub trigger_x: f32,
    pub spawns: Vec<SpawnDescriptor>,
    /// Wave released
    #[serde(skip)]
    pub triggered: bool,
    /// Wave beaten (implies `triggered`)
    #[serde(skip)]
    pub destroyed: bool,
}

impl SpawnWall {
    pub fn new(trigger_x: f32, spawns: Vec<SpawnDescriptor>) -> Self {
        Self {
            trigger_x,
            spawns,
            triggered: false,
            destroyed: false,
        }
    }

    /// Released but not yet beaten
    pub fn is_active(&self) -> bool {
        self.triggered && !self.destroyed
    }
}

#[derive(Debug, Deserialize)]
struct LevelDef {
    chapter: u32,
    walls: Vec<SpawnWall>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelDef")]
pub struct Level {
    pub chapter: u32,
    walls: Vec<SpawnWall>,
}

impl TryFrom<LevelDef> for Level {
    type Error = LevelError;

    fn try_from(def: LevelDef) -> Result<Self, Self::Error> {
        Level::new(def.chapter, def.walls)
    }
}

impl Level {
    /// Build a level, checking wall order and the single-boss rule
    pub fn new(chapter: u32, walls: Vec<SpawnWall>) -> Result<Self, LevelError> {
        let mut boss_wall: Option<usize> = None;
        for (index, wall) in walls.iter().enumerate() {
            if !wall.trigger_x.is_finite() {
                return Err(LevelError::NonFiniteTrigger { index });
            }
            if index > 0 && wall.trigger_x < walls[index - 1].trigger_x {
                return Err(LevelError::UnsortedWalls {
                    index,
                    trigger_x: wall.trigger_x,
                    previous_x: walls[index - 1].trigger_x,
                });
            }
            for spawn in &wall.spawns {
                if spawn.kind != EnemyKind::Boss {
                    continue;
                }
                match boss_wall {
                    Some(first) => {
                        return Err(LevelError::MultipleBosses {
                            first,
                            second: index,
                        });
                    }
                    None => boss_wall = Some(index),
                }
            }
        }

        let mut level = Self { chapter, walls };
        level.reset();
        Ok(level)
    }

    /// Parse and validate; a bad wall list keeps its own error variant
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let def: LevelDef = serde_json::from_str(json).map_err(LevelError::Parse)?;
        Self::try_from(def)
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded chapter {} ({} walls) from {}",
            level.chapter,
            level.walls.len(),
            path.display()
        );
        Ok(level)
    }

    /// Chapter 1: the boss wall first, then three enemy waves. Every wall
    /// sits three quarters of a screen past the previous one.
    pub fn chapter_one(screen_width: f32) -> Self {
        use EnemyKind::*;
        use SpawnSide::*;

        let step = (screen_width * 0.75).trunc();
        let mut wall_x = step;
        let mut walls = vec![SpawnWall::new(
            wall_x,
            vec![SpawnDescriptor::new(Boss, Front)],
        )];
        wall_x += step;

        for i in 0..3 {
            let mut spawns = vec![SpawnDescriptor::new(Regular, Front); 3];
            if i % 2 == 1 {
                spawns.extend([SpawnDescriptor::new(Regular, Back); 2]);
            }
            walls.push(SpawnWall::new(wall_x, spawns));
            wall_x += step;
        }

        Self {
            chapter: 1,
            walls,
        }
    }

    pub fn walls(&self) -> &[SpawnWall] {
        &self.walls
    }

    pub fn wall(&self, index: usize) -> Option<&SpawnWall> {
        self.walls.get(index)
    }

    pub fn wall_mut(&mut self, index: usize) -> Option<&mut SpawnWall> {
        self.walls.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Forget which waves were released or beaten
    pub fn reset(&mut self) {
        for wall in &mut self.walls {
            wall.triggered = false;
            wall.destroyed = false;
        }
    }
}
