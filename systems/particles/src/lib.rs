#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Particle generator and per-tick decay.
//!
//! Particles are pure data handed to the renderer. Positions and velocities
//! are measured in cells; velocities are per 60 Hz frame so decay scales with
//! the real frame delta.

use std::{f32::consts::TAU, time::Duration};

use glam::Vec2;
use rand::Rng;
use sand_serpent_core::{tuning, GridPos, GridSize, Particle, ParticleKind, Rgb};

/// Reference pixel size of a cell that burst speeds were tuned against.
const PIXELS_PER_CELL: f32 = 20.0;
const FRAMES_PER_SECOND: f32 = 60.0;
const BURST_DECAY: f32 = 0.02;
const AMBIENT_DECAY: f32 = 0.001;
const BURST_GRAVITY: f32 = 0.02 / PIXELS_PER_CELL;
const SAND: Rgb = Rgb::from_rgb(0xf5, 0xb7, 0x46);

fn cell_center(cell: GridPos) -> Vec2 {
    Vec2::new(cell.x() as f32 + 0.5, cell.y() as f32 + 0.5)
}

fn burst(origin: Vec2, angle: f32, speed_px: f32, size_px: f32, color: Rgb) -> Particle {
    Particle {
        position: origin,
        velocity: Vec2::from_angle(angle) * (speed_px / PIXELS_PER_CELL),
        life: 1.0,
        size: size_px / PIXELS_PER_CELL,
        color,
        alpha: 1.0,
        kind: ParticleKind::Burst,
    }
}

/// Emits `count` particles radiating evenly from the centre of `cell`.
pub fn eat_burst<R>(cell: GridPos, color: Rgb, count: usize, rng: &mut R) -> Vec<Particle>
where
    R: Rng + ?Sized,
{
    let origin = cell_center(cell);
    (0..count)
        .map(|index| {
            let angle = TAU * index as f32 / count as f32 + rng.gen::<f32>() * 0.5;
            let speed = 1.0 + rng.gen::<f32>() * 3.0;
            let size = 2.0 + rng.gen::<f32>() * 3.0;
            burst(origin, angle, speed, size, color)
        })
        .collect()
}

/// Emits a few particles from each of the first body segments.
pub fn death_burst<R>(segments: &[GridPos], color: Rgb, rng: &mut R) -> Vec<Particle>
where
    R: Rng + ?Sized,
{
    let mut particles = Vec::with_capacity(
        segments.len().min(tuning::DEATH_PARTICLE_SEGMENTS) * tuning::DEATH_PARTICLES_PER_SEGMENT,
    );
    for segment in segments.iter().take(tuning::DEATH_PARTICLE_SEGMENTS) {
        let origin = cell_center(*segment);
        for _ in 0..tuning::DEATH_PARTICLES_PER_SEGMENT {
            let angle = rng.gen::<f32>() * TAU;
            let speed = 1.0 + rng.gen::<f32>() * 4.0;
            let size = 3.0 + rng.gen::<f32>() * 4.0;
            particles.push(burst(origin, angle, speed, size, color));
        }
    }
    particles
}

/// Emits one grain of drifting sand somewhere on the field.
pub fn ambient_grain<R>(grid: GridSize, rng: &mut R) -> Particle
where
    R: Rng + ?Sized,
{
    let extent = grid.get() as f32;
    Particle {
        position: Vec2::new(rng.gen::<f32>() * extent, rng.gen::<f32>() * extent),
        velocity: Vec2::new(
            (rng.gen::<f32>() - 0.5) * 0.3,
            -0.2 - rng.gen::<f32>() * 0.3,
        ) / PIXELS_PER_CELL,
        life: 1.0,
        size: (1.0 + rng.gen::<f32>() * 2.0) / PIXELS_PER_CELL,
        color: SAND,
        alpha: 0.3 + rng.gen::<f32>() * 0.3,
        kind: ParticleKind::Ambient,
    }
}

/// Tops ambient sand back up to its target count.
pub fn replenish_ambient<R>(particles: &mut Vec<Particle>, grid: GridSize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let present = particles
        .iter()
        .filter(|particle| particle.kind == ParticleKind::Ambient)
        .count();
    for _ in present..tuning::AMBIENT_PARTICLE_COUNT {
        particles.push(ambient_grain(grid, rng));
    }
    enforce_cap(particles);
}

/// Appends freshly emitted particles, dropping the oldest beyond the cap.
pub fn emit(particles: &mut Vec<Particle>, fresh: Vec<Particle>) {
    particles.extend(fresh);
    enforce_cap(particles);
}

/// Advances every particle by `dt` and drops the ones that have faded.
pub fn decay(particles: &mut Vec<Particle>, dt: Duration) {
    let frames = dt.as_secs_f32() * FRAMES_PER_SECOND;
    for particle in particles.iter_mut() {
        particle.position += particle.velocity * frames;
        match particle.kind {
            ParticleKind::Burst => {
                particle.life -= BURST_DECAY * frames;
                particle.alpha = particle.life.max(0.0);
                particle.velocity.y += BURST_GRAVITY * frames;
            }
            ParticleKind::Ambient => {
                particle.life -= AMBIENT_DECAY * frames;
            }
        }
    }
    particles.retain(|particle| particle.life > 0.0);
    enforce_cap(particles);
}

fn enforce_cap(particles: &mut Vec<Particle>) {
    if particles.len() > tuning::MAX_PARTICLES {
        let excess = particles.len() - tuning::MAX_PARTICLES;
        let _ = particles.drain(..excess);
    }
}
