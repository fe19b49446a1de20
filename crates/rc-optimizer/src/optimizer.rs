//! Optimization driver: enumerates gear, searches each assignment and keeps
//! the best result.

use rayon::prelude::*;
use rc_types::{
    config_error, internal_error, GearAssignment, OptimizationConfig, OptimizationResult,
    Parallelism, RcResult, ScheduleResult, Skill,
};
use tracing::{debug, info, warn};

use crate::observer::{NoopObserver, ProgressObserver};
use crate::pool::WorkerPool;
use crate::schedule::ScheduleSearcher;
use crate::search::GearEnumerator;
use crate::trial::{GearTrial, OptimizationStatus};

/// Finds the gear assignment and rotation with the highest damage.
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: OptimizationConfig,
}

impl Optimizer {
    /// Validate `config`; an invalid configuration never reaches the search.
    pub fn new(config: OptimizationConfig) -> RcResult<Self> {
        if let Err(e) = config.validate() {
            warn!("Rejected optimization config: {}", e);
            return Err(config_error!(e));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &OptimizationConfig {
        &self.config
    }

    pub fn run(&self) -> RcResult<OptimizationResult> {
        self.run_with(&mut NoopObserver)
    }

    pub fn run_with<O>(&self, observer: &mut O) -> RcResult<OptimizationResult>
    where
        O: ProgressObserver + ?Sized,
    {
        let mut enumerator = GearEnumerator::new(&self.config.skills)?;
        let total = enumerator.grid_size();
        let mut status = OptimizationStatus::new(total);

        info!(
            "Optimizing {} skills over a {}s window: {} gear assignments ({:?})",
            self.config.skills.len(),
            self.config.time_limit,
            total,
            self.config.parallelism
        );
        status.mark_running();
        observer.on_run_start(total);

        match self.evaluate_all(&mut enumerator, &mut status, observer) {
            Ok(()) => status.mark_completed(),
            Err(e) => {
                status.mark_failed(e.to_string());
                observer.on_run_end(&status);
                return Err(e);
            }
        }
        observer.on_run_end(&status);

        let best = status
            .best_trial
            .ok_or_else(|| internal_error!("no gear assignment was evaluated"))?;
        info!(
            "Best setup: {} damage with gear {} after {} search nodes",
            best.damage(),
            best.gear,
            status.nodes_visited
        );

        Ok(OptimizationResult {
            best_damage: best.damage(),
            best_dps: OptimizationResult::dps(best.damage(), self.config.time_limit),
            best_gear_assignment: best.gear,
            best_sequence: best.schedule.sequence,
            best_timeline: best.schedule.timeline,
            time_limit: self.config.time_limit,
            assignments_evaluated: status.assignments_evaluated,
        })
    }

    fn evaluate_all<O>(
        &self,
        enumerator: &mut GearEnumerator,
        status: &mut OptimizationStatus,
        observer: &mut O,
    ) -> RcResult<()>
    where
        O: ProgressObserver + ?Sized,
    {
        let total = enumerator.grid_size();
        let batch_size = self.config.batch_size.max(1);
        let pool = match self.config.parallelism {
            Parallelism::Serial => None,
            Parallelism::Assignments | Parallelism::Full => {
                Some(WorkerPool::new(self.config.workers)?)
            }
        };
        let mut index = 0;

        loop {
            let batch = enumerator.suggest(batch_size);
            if batch.is_empty() {
                break;
            }

            match &pool {
                None => {
                    for gear in batch {
                        observer.on_assignment_start(index, total, &gear);
                        let schedule = self.search(&gear, false)?;
                        self.record(status, observer, GearTrial::new(index, gear, schedule));
                        index += 1;
                    }
                }
                Some(pool) => {
                    for (offset, gear) in batch.iter().enumerate() {
                        observer.on_assignment_start(index + offset, total, gear);
                    }
                    let full = self.config.parallelism == Parallelism::Full;
                    let schedules: Vec<RcResult<ScheduleResult>> = pool.install(|| {
                        batch
                            .par_iter()
                            .map(|gear| self.search(gear, full))
                            .collect()
                    });
                    for (gear, schedule) in batch.into_iter().zip(schedules) {
                        self.record(status, observer, GearTrial::new(index, gear, schedule?));
                        index += 1;
                    }
                }
            }
        }
        Ok(())
    }

    fn search(&self, gear: &GearAssignment, parallel_branches: bool) -> RcResult<ScheduleResult> {
        let searcher = ScheduleSearcher::new(&self.config.skills, gear, self.config.time_limit)?;
        let schedule = if parallel_branches {
            searcher.search_parallel()
        } else {
            searcher.search()
        };
        debug!(
            "Gear {}: {} damage, {} casts, {} nodes",
            gear,
            schedule.total_damage,
            schedule.cast_count(),
            schedule.nodes_visited
        );
        Ok(schedule)
    }

    fn record<O>(&self, status: &mut OptimizationStatus, observer: &mut O, trial: GearTrial)
    where
        O: ProgressObserver + ?Sized,
    {
        let is_best = status.record(&trial);
        if is_best {
            info!(
                "New best at assignment {}: {} damage with gear {}",
                trial.index + 1,
                trial.damage(),
                trial.gear
            );
        }
        observer.on_assignment_end(&trial, is_best);
    }
}

/// Optimize `skills` over `time_limit` seconds with the reference serial
/// search.
pub fn find_best_setup(skills: &[Skill], time_limit: f64) -> RcResult<OptimizationResult> {
    Optimizer::new(OptimizationConfig::new(skills.to_vec(), time_limit))?.run()
}
