//! Staggered mine explosions after a loss.
//!
//! Mine `i` in disclosure order starts `i * EXPLOSION_STAGGER_FRAMES` frames
//! after the sequence begins, steps through `EXPLOSION_STAGES` images at
//! `EXPLOSION_FRAMES_PER_STAGE` frames each and then rests on the final image.

use std::collections::HashMap;

use crate::constants::{EXPLOSION_FRAMES_PER_STAGE, EXPLOSION_STAGES, EXPLOSION_STAGGER_FRAMES};
use crate::game::{Coord, Detonation};

/// What a single mine looks like on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineSprite {
    /// Its turn has not come yet; drawn as a hidden cell.
    Pending,
    Exploding { stage: u8 },
    Spent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionSequence {
    start_frame: u64,
    starts: HashMap<Coord, u64>,
}

impl ExplosionSequence {
    pub fn new(start_frame: u64, detonations: &[Detonation]) -> Self {
        let starts = detonations
            .iter()
            .map(|d| {
                let offset = (d.order as u64).saturating_mul(EXPLOSION_STAGGER_FRAMES);
                (d.coord, start_frame.saturating_add(offset))
            })
            .collect();

        Self {
            start_frame,
            starts,
        }
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    /// Sprite for the mine at `coord`, or `None` if no mine is animated there.
    pub fn sprite_at(&self, coord: Coord, frame: u64) -> Option<MineSprite> {
        let start = *self.starts.get(&coord)?;
        if frame < start {
            return Some(MineSprite::Pending);
        }
        let stage = (frame - start) / EXPLOSION_FRAMES_PER_STAGE;
        if stage < EXPLOSION_STAGES {
            Some(MineSprite::Exploding { stage: stage as u8 })
        } else {
            Some(MineSprite::Spent)
        }
    }
}
