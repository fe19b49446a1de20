//! Exhaustive depth-first search for the highest-damage cast sequence under
//! one gear assignment.
//!
//! The search has no memoization and no pruning beyond the two feasibility
//! checks on each candidate cast, so its cost grows exponentially with the
//! number of casts that fit in the window. Start times are continuous and the
//! set of pending cooldowns has no compact canonical key, so every feasible
//! interleaving is visited.
//!
//! The walk keeps its own frame stack instead of recursing, so the depth (one
//! frame per cast on the current path) is bounded by memory, not by the
//! thread's stack.

use rayon::prelude::*;
use rc_types::{CastEvent, ConfigError, GearAssignment, ScheduleResult, Skill, EPS};
use tracing::debug;

/// A cast placed on the current search path.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlacedCast {
    skill: usize,
    start: f64,
    end: f64,
}

/// Prior availability of the one slot a placed cast overwrote.
#[must_use]
#[derive(Debug)]
struct CastUndo {
    skill: usize,
    saved: f64,
}

/// Mutable state of one search, owned by a single thread.
#[derive(Debug)]
struct ScheduleState {
    /// Earliest start time per skill.
    next_available: Vec<f64>,
    path: Vec<PlacedCast>,
    best_damage: f64,
    /// While `best_live`, the best sequence is `path[..best_len]` and has not
    /// been copied out yet.
    best_len: usize,
    best_live: bool,
    best_path: Vec<PlacedCast>,
    nodes_visited: u64,
}

impl ScheduleState {
    fn new(skill_count: usize) -> Self {
        Self {
            next_available: vec![0.0; skill_count],
            path: Vec::new(),
            best_damage: 0.0,
            best_len: 0,
            best_live: false,
            best_path: Vec::new(),
            nodes_visited: 0,
        }
    }

    fn visit(&mut self, damage: f64) {
        self.nodes_visited += 1;
        if damage > self.best_damage {
            self.best_damage = damage;
            self.best_len = self.path.len();
            self.best_live = true;
        }
    }

    fn place(&mut self, cast: PlacedCast, recast: f64) -> CastUndo {
        let saved = std::mem::replace(&mut self.next_available[cast.skill], cast.end + recast);
        self.path.push(cast);
        CastUndo {
            skill: cast.skill,
            saved,
        }
    }

    /// Pop the last placed cast and restore its skill's availability.
    fn retract(&mut self, undo: CastUndo) {
        if self.best_live && self.path.len() == self.best_len {
            self.best_path.clone_from(&self.path);
            self.best_live = false;
        }
        self.path.pop();
        self.next_available[undo.skill] = undo.saved;
    }

    fn best_path(&self) -> &[PlacedCast] {
        if self.best_live {
            &self.path[..self.best_len]
        } else {
            &self.best_path
        }
    }
}

/// One node on the walk's explicit stack.
#[derive(Debug)]
struct Frame {
    current_time: f64,
    damage: f64,
    /// Next skill index to try as a child of this node.
    next_skill: usize,
    /// Restores the cast that led here when the frame is popped.
    undo: Option<CastUndo>,
}

/// Searches every legal cast ordering for one gear assignment.
#[derive(Debug, Clone)]
pub struct ScheduleSearcher<'a> {
    skills: &'a [Skill],
    recasts: Vec<f64>,
    time_limit: f64,
}

impl<'a> ScheduleSearcher<'a> {
    pub fn new(
        skills: &'a [Skill],
        gear: &GearAssignment,
        time_limit: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            skills,
            recasts: gear.effective_recasts(skills)?,
            time_limit,
        })
    }

    /// Effective recast per skill under this searcher's gear assignment.
    pub fn recasts(&self) -> &[f64] {
        &self.recasts
    }

    /// Single-threaded search of the whole tree.
    pub fn search(&self) -> ScheduleResult {
        let mut state = ScheduleState::new(self.skills.len());
        self.walk(&mut state, 0.0, 0.0);
        debug!("Search finished: {} nodes, best damage {}", state.nodes_visited, state.best_damage);
        self.finish(state.best_damage, state.best_path(), state.nodes_visited)
    }

    /// Search with each top-level branch on its own rayon task.
    ///
    /// Every branch owns an independent state. Branch results are merged in
    /// skill order with the same strictly-greater rule as the serial walk, so
    /// the result is identical to [`ScheduleSearcher::search`].
    pub fn search_parallel(&self) -> ScheduleResult {
        let n = self.skills.len();
        let branches: Vec<Option<ScheduleState>> = (0..n)
            .into_par_iter()
            .map(|skill| {
                let mut state = ScheduleState::new(n);
                let cast = self.next_cast(&state.next_available, skill, 0.0)?;
                let undo = state.place(cast, self.recasts[skill]);
                self.walk(&mut state, cast.end, self.skills[skill].damage);
                state.retract(undo);
                Some(state)
            })
            .collect();

        // The root node itself: nothing cast, zero damage.
        let mut nodes_visited = 1;
        let mut best_damage = 0.0;
        let mut best_path: &[PlacedCast] = &[];
        for state in branches.iter().flatten() {
            nodes_visited += state.nodes_visited;
            if state.best_damage > best_damage {
                best_damage = state.best_damage;
                best_path = state.best_path();
            }
        }
        debug!("Parallel search finished: {} nodes, best damage {}", nodes_visited, best_damage);
        self.finish(best_damage, best_path, nodes_visited)
    }

    /// Depth-first walk of the subtree rooted at the current path.
    ///
    /// A node is visited (and compared with the best) when it is entered,
    /// then its children are tried in skill order. Each child's placement is
    /// retracted when its frame is popped, before the next sibling is tried.
    fn walk(&self, state: &mut ScheduleState, current_time: f64, damage: f64) {
        state.visit(damage);
        let mut stack = vec![Frame {
            current_time,
            damage,
            next_skill: 0,
            undo: None,
        }];

        while let Some(frame) = stack.last_mut() {
            match self.next_child(state, frame) {
                Some((cast, damage)) => {
                    let undo = state.place(cast, self.recasts[cast.skill]);
                    state.visit(damage);
                    stack.push(Frame {
                        current_time: cast.end,
                        damage,
                        next_skill: 0,
                        undo: Some(undo),
                    });
                }
                None => {
                    if let Some(undo) = stack.pop().and_then(|done| done.undo) {
                        state.retract(undo);
                    }
                }
            }
        }
    }

    /// Advance `frame` to its next feasible child cast and that child's damage.
    fn next_child(&self, state: &ScheduleState, frame: &mut Frame) -> Option<(PlacedCast, f64)> {
        while frame.next_skill < self.skills.len() {
            let skill = frame.next_skill;
            frame.next_skill += 1;
            if let Some(cast) = self.next_cast(&state.next_available, skill, frame.current_time) {
                return Some((cast, frame.damage + self.skills[skill].damage));
            }
        }
        None
    }

    /// The cast of `skill` following `current_time`, if it fits the window.
    fn next_cast(&self, next_available: &[f64], skill: usize, current_time: f64) -> Option<PlacedCast> {
        let earliest = next_available[skill];
        if earliest > self.time_limit {
            return None;
        }
        let start = current_time.max(earliest);
        let end = start + self.skills[skill].cast_time;
        if end > self.time_limit + EPS {
            return None;
        }
        Some(PlacedCast { skill, start, end })
    }

    fn finish(&self, total_damage: f64, path: &[PlacedCast], nodes_visited: u64) -> ScheduleResult {
        let timeline: Vec<CastEvent> = path
            .iter()
            .map(|cast| CastEvent {
                skill: cast.skill,
                name: self.skills[cast.skill].name.clone(),
                start: cast.start,
                end: cast.end,
            })
            .collect();
        ScheduleResult {
            total_damage,
            sequence: timeline.iter().map(|event| event.name.clone()).collect(),
            timeline,
            nodes_visited,
        }
    }
}
