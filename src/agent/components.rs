//! Agent domain: patrol/chase behavior state machine.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Horizontal distance under which a chasing agent stops closing in, so it
/// does not oscillate on top of its target.
pub const CHASE_STOP_DISTANCE: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    Idle,
    /// Agents start on their patrol route.
    #[default]
    Patrol,
    Chase,
}

/// What a chase falls back to when the target is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisengageMode {
    /// Pause in place before resuming patrol.
    #[default]
    IdleFirst,
    /// Head straight back to the patrol route.
    PatrolDirect,
}

/// Ground agent behavior: patrol a horizontal span, chase the target while it
/// stays in range, give up after a timeout out of sight.
///
/// Detection is hysteretic: a chase starts inside `aggro_range` but only ends
/// beyond `chase_range`, which is kept `>= aggro_range` by config validation.
#[derive(Component, Debug, Clone)]
pub struct AgentBehavior {
    pub state: AgentState,
    pub patrol_left: f32,
    pub patrol_right: f32,
    /// +1.0 or -1.0; direction of the next patrol leg.
    pub patrol_dir: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub aggro_range: f32,
    /// Optional vertical band for detection. `None` uses plain distance.
    pub aggro_range_y: Option<f32>,
    pub chase_range: f32,
    /// Seconds a chase persists with the target out of detection range.
    pub chase_timeout: f32,
    pub(crate) chase_timer: f32,
    /// Pause at each patrol border (and after an `IdleFirst` disengage).
    pub idle_time: f32,
    pub(crate) idle_timer: f32,
    pub disengage: DisengageMode,
    /// Horizontal velocity decided by the last [`AgentBehavior::tick`].
    pub desired_velocity_x: f32,
}

impl Default for AgentBehavior {
    fn default() -> Self {
        Self {
            state: AgentState::Patrol,
            patrol_left: -50.0,
            patrol_right: 50.0,
            patrol_dir: 1.0,
            patrol_speed: 40.0,
            chase_speed: 80.0,
            aggro_range: 120.0,
            aggro_range_y: None,
            chase_range: 180.0,
            chase_timeout: 2.0,
            chase_timer: 0.0,
            idle_time: 1.0,
            idle_timer: 0.0,
            disengage: DisengageMode::IdleFirst,
            desired_velocity_x: 0.0,
        }
    }
}

impl AgentBehavior {
    /// Is the target close enough to start a chase?
    pub fn in_aggro(&self, pos: Vec2, target: Vec2) -> bool {
        self.within(pos, target, self.aggro_range)
    }

    /// Is the target still close enough to keep an active chase alive?
    pub fn in_chase_bounds(&self, pos: Vec2, target: Vec2) -> bool {
        self.within(pos, target, self.chase_range)
    }

    fn within(&self, pos: Vec2, target: Vec2, range: f32) -> bool {
        match self.aggro_range_y {
            Some(band) => (target.x - pos.x).abs() <= range && (target.y - pos.y).abs() <= band,
            None => pos.distance(target) <= range,
        }
    }

    /// Force an immediate chase, e.g. when this agent takes a hit. The chase
    /// still times out normally if the attacker stays out of range.
    pub fn on_damaged(&mut self) {
        self.state = AgentState::Chase;
        self.chase_timer = 0.0;
    }

    pub fn chase_timer(&self) -> f32 {
        self.chase_timer
    }

    /// Advance the state machine one tick and decide the horizontal velocity,
    /// which is also left in `desired_velocity_x` for the movement pass.
    /// `target` is `None` when no living target exists.
    pub fn tick(&mut self, pos: Vec2, target: Option<Vec2>, dt: f32) -> f32 {
        self.desired_velocity_x = match self.state {
            AgentState::Idle => self.tick_idle(pos, target, dt),
            AgentState::Patrol => self.tick_patrol(pos, target),
            AgentState::Chase => self.tick_chase(pos, target, dt),
        };
        self.desired_velocity_x
    }

    fn tick_idle(&mut self, pos: Vec2, target: Option<Vec2>, dt: f32) -> f32 {
        if let Some(target) = target {
            if self.in_aggro(pos, target) {
                self.begin_chase();
                return self.tick_chase(pos, Some(target), 0.0);
            }
        }
        self.idle_timer -= dt;
        if self.idle_timer <= 0.0 {
            self.state = AgentState::Patrol;
        }
        0.0
    }

    fn tick_patrol(&mut self, pos: Vec2, target: Option<Vec2>) -> f32 {
        if let Some(target) = target {
            if self.in_aggro(pos, target) {
                self.begin_chase();
                return self.tick_chase(pos, Some(target), 0.0);
            }
        }
        let at_border = (self.patrol_dir > 0.0 && pos.x >= self.patrol_right)
            || (self.patrol_dir < 0.0 && pos.x <= self.patrol_left);
        if at_border {
            self.patrol_dir = -self.patrol_dir;
            // With nothing of interest nearby, pause at the border before
            // the return leg; otherwise turn around immediately
            let target_far = target.is_none_or(|t| !self.in_chase_bounds(pos, t));
            if target_far {
                self.begin_idle();
                return 0.0;
            }
        }
        self.patrol_dir * self.patrol_speed
    }

    fn tick_chase(&mut self, pos: Vec2, target: Option<Vec2>, dt: f32) -> f32 {
        let Some(target) = target else {
            self.disengage(pos);
            return 0.0;
        };
        if !self.in_chase_bounds(pos, target) {
            self.disengage(pos);
            return 0.0;
        }

        // Timeout only accrues while the target sits in the hysteresis band
        // between aggro_range and chase_range
        if self.in_aggro(pos, target) {
            self.chase_timer = 0.0;
        } else {
            self.chase_timer += dt;
            if self.chase_timer >= self.chase_timeout {
                self.disengage(pos);
                return 0.0;
            }
        }

        let dx = target.x - pos.x;
        if dx.abs() <= CHASE_STOP_DISTANCE {
            0.0
        } else {
            dx.signum() * self.chase_speed
        }
    }

    fn begin_chase(&mut self) {
        self.state = AgentState::Chase;
        self.chase_timer = 0.0;
    }

    fn begin_idle(&mut self) {
        self.state = AgentState::Idle;
        self.idle_timer = self.idle_time;
    }

    fn disengage(&mut self, pos: Vec2) {
        match self.disengage {
            DisengageMode::IdleFirst => self.begin_idle(),
            DisengageMode::PatrolDirect => {
                self.state = AgentState::Patrol;
                // Resume toward the nearer border
                let mid = (self.patrol_left + self.patrol_right) * 0.5;
                self.patrol_dir = if pos.x <= mid { -1.0 } else { 1.0 };
            }
        }
        self.chase_timer = 0.0;
    }
}
