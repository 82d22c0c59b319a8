//! Choreography timelines
//!
//! A timeline is a list of tagged steps played in order against an entity's
//! pose. Steps with a duration interpolate from the pose captured when the
//! step began; cue steps fire instantly and are returned to the owner.
//! Leftover time carries into the next step, so results don't depend on
//! how a span of time is split into ticks.

use glam::{Vec2, Vec4};

use super::interp::Interp;
use crate::with_alpha;

/// Instant signals a timeline hands back to its owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Owner's fixed visual sequence is over; drop it from the simulation
    Remove,
    /// Damage flash finished
    Recovered,
    /// Boss reached its arena and starts patrolling
    StartBattle,
    /// Face left (`true`) or right (`false`)
    Flip(bool),
    /// Stage intro: turn the TV on
    TvOn,
    /// Stage intro: start the music
    StartMusic,
    /// Screen fade-out reached its end
    FadeComplete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Delay(f32),
    MoveTo {
        target: Vec2,
        duration: f32,
        interp: Interp,
    },
    MoveBy {
        delta: Vec2,
        duration: f32,
        interp: Interp,
    },
    Tint {
        color: Vec4,
        duration: f32,
        interp: Interp,
    },
    /// Change only the alpha channel
    Alpha {
        alpha: f32,
        duration: f32,
        interp: Interp,
    },
    Cue(Cue),
}

impl Step {
    pub fn move_to(target: Vec2, duration: f32, interp: Interp) -> Self {
        Step::MoveTo {
            target,
            duration,
            interp,
        }
    }

    pub fn move_by(delta: Vec2, duration: f32, interp: Interp) -> Self {
        Step::MoveBy {
            delta,
            duration,
            interp,
        }
    }

    pub fn tint(color: Vec4, duration: f32) -> Self {
        Step::Tint {
            color,
            duration,
            interp: Interp::Linear,
        }
    }

    fn duration(&self) -> f32 {
        match *self {
            Step::Delay(d) => d,
            Step::MoveTo { duration, .. }
            | Step::MoveBy { duration, .. }
            | Step::Tint { duration, .. }
            | Step::Alpha { duration, .. } => duration,
            Step::Cue(_) => 0.0,
        }
    }
}

/// The parts of an entity a timeline may drive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub color: Vec4,
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    index: usize,
    elapsed: f32,
    /// Pose at the start of the current step
    start: Option<Pose>,
    looping: bool,
}

impl Timeline {
    /// Play the steps once
    pub fn once(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Default::default()
        }
    }

    /// Play the steps forever
    pub fn looping(steps: Vec<Step>) -> Self {
        Self {
            steps,
            looping: true,
            ..Default::default()
        }
    }

    /// Nothing left to play (a looping timeline never finishes unless empty)
    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Drop every pending step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Advance by `dt`, writing into `pose` and returning the cues that fired
    pub fn advance(&mut self, dt: f32, pose: &mut Pose) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut remaining = dt.max(0.0);
        // Guards a loop made only of zero-length steps
        let mut instant_steps = 0;

        while !self.is_finished() {
            let step = self.steps[self.index];
            let start = *self.start.get_or_insert(*pose);
            let duration = step.duration();

            if let Step::Cue(cue) = step {
                cues.push(cue);
            } else {
                self.elapsed += remaining;
                let done = self.elapsed >= duration;
                let t = if duration > 0.0 {
                    (self.elapsed / duration).min(1.0)
                } else {
                    1.0
                };
                apply(&step, &start, t, pose);
                if !done {
                    break;
                }
                remaining = self.elapsed - duration;
            }

            if duration <= 0.0 {
                instant_steps += 1;
                if instant_steps > self.steps.len() {
                    break;
                }
            } else {
                instant_steps = 0;
            }

            self.elapsed = 0.0;
            self.start = None;
            self.index += 1;
            if self.looping && self.is_finished() {
                self.index = 0;
            }
        }

        cues
    }
}

fn apply(step: &Step, start: &Pose, t: f32, pose: &mut Pose) {
    match *step {
        Step::Delay(_) | Step::Cue(_) => {}
        Step::MoveTo { target, interp, .. } => {
            pose.pos = start.pos.lerp(target, interp.apply(t));
        }
        Step::MoveBy { delta, interp, .. } => {
            pose.pos = start.pos.lerp(start.pos + delta, interp.apply(t));
        }
        Step::Tint { color, interp, .. } => {
            pose.color = start.color.lerp(color, interp.apply(t));
        }
        Step::Alpha { alpha, interp, .. } => {
            let a = start.color.w + (alpha - start.color.w) * interp.apply(t);
            pose.color = with_alpha(pose.color, a);
        }
    }
}
