//! Discrete-time single-server queueing simulation.
//!
//! A [`Cluster`] models one server fed by a bounded FIFO queue of task
//! identifiers. Each cycle, a task arrives with probability `intensity` and
//! the task in service completes with probability `performance`. Arrivals
//! that find the queue full are rejected and counted — admission control,
//! exercised through exactly the public queue surface:
//! `try_push`/`is_full` on the way in, `pop_front`/`is_empty` on the way
//! out.
//!
//! The simulator is generic over [`RngCore`] so tests can drive it with a
//! seeded generator.
//!
//! # Example
//!
//! ```
//! use berth_cluster::Cluster;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let rng = SmallRng::seed_from_u64(7);
//! let mut cluster = Cluster::new(16, 0.5, 0.4, rng).unwrap();
//! cluster.run(1_000);
//!
//! let stats = cluster.stats();
//! assert_eq!(stats.cycles, 1_000);
//! assert!(stats.completed_tasks <= stats.total_tasks);
//! ```

use core::fmt;

use hdrhistogram::Histogram;
use rand::Rng;
use rand_core::RngCore;
use tracing::{debug, trace};

use berth_queue::Queue;

/// Identifier assigned to a submitted task, starting from 1.
pub type TaskId = u64;

/// Error returned for invalid simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    /// The queue capacity was zero.
    ZeroCapacity,
    /// A probability parameter fell outside `[0, 1]`.
    Rate {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be greater than zero"),
            Self::Rate { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Aggregate counters for a simulation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Tasks that arrived, whether admitted or not.
    pub total_tasks: u64,
    /// Tasks that finished service.
    pub completed_tasks: u64,
    /// Arrivals rejected because the queue was full.
    pub rejected_tasks: u64,
    /// Cycles simulated.
    pub cycles: u64,
    /// Cycles the server spent with no task available.
    pub idle_cycles: u64,
}

impl Stats {
    /// Fraction of arrivals rejected, or 0 when nothing arrived.
    pub fn rejection_ratio(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.rejected_tasks as f64 / self.total_tasks as f64
        }
    }

    /// Fraction of cycles the server was idle, or 0 for an empty run.
    pub fn idle_ratio(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.idle_cycles as f64 / self.cycles as f64
        }
    }

    /// Mean busy cycles per completed task, or 0 when nothing completed.
    pub fn mean_service_cycles(&self) -> f64 {
        if self.completed_tasks == 0 {
            0.0
        } else {
            (self.cycles - self.idle_cycles) as f64 / self.completed_tasks as f64
        }
    }
}

/// A single-server cluster fed by a bounded task queue.
pub struct Cluster<R: RngCore> {
    intensity: f64,
    performance: f64,
    tasks: Queue<TaskId>,
    rng: R,
    current: Option<TaskId>,
    current_cycles: u64,
    next_id: TaskId,
    stats: Stats,
    service: Histogram<u64>,
}

impl<R: RngCore> Cluster<R> {
    /// Creates a cluster with a task queue bounded to `capacity`.
    ///
    /// `intensity` is the per-cycle arrival probability; `performance` the
    /// per-cycle completion probability for the task in service.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] for a zero capacity or a rate outside
    /// `[0, 1]`.
    pub fn new(
        capacity: usize,
        intensity: f64,
        performance: f64,
        rng: R,
    ) -> Result<Self, ParamError> {
        if !(0.0..=1.0).contains(&intensity) {
            return Err(ParamError::Rate {
                name: "intensity",
                value: intensity,
            });
        }
        if !(0.0..=1.0).contains(&performance) {
            return Err(ParamError::Rate {
                name: "performance",
                value: performance,
            });
        }
        let tasks = Queue::with_capacity(capacity).map_err(|_| ParamError::ZeroCapacity)?;
        Ok(Self {
            intensity,
            performance,
            tasks,
            rng,
            current: None,
            current_cycles: 0,
            next_id: 1,
            stats: Stats::default(),
            // Three significant figures is plenty for cycle counts.
            service: Histogram::new(3).unwrap(),
        })
    }

    /// Submits a task, counting it as rejected if the queue is full.
    pub fn submit(&mut self, id: TaskId) {
        self.stats.total_tasks += 1;
        if let Err(rejected) = self.tasks.try_push(id) {
            self.stats.rejected_tasks += 1;
            trace!(id = rejected.into_inner(), "task rejected: queue full");
        }
    }

    /// Draws an arrival for this cycle: with probability `intensity`, the
    /// next task id is submitted.
    pub fn generate(&mut self) {
        if self.rng.random::<f64>() <= self.intensity {
            let id = self.next_id;
            self.next_id += 1;
            self.submit(id);
        }
    }

    /// Performs one service cycle.
    ///
    /// An idle server first pulls the next task from the queue (counting an
    /// idle cycle if there is none); the task in service then completes
    /// with probability `performance`.
    pub fn step(&mut self) {
        self.stats.cycles += 1;

        let id = match self.current {
            Some(id) => id,
            None => match self.tasks.pop_front() {
                None => {
                    self.stats.idle_cycles += 1;
                    return;
                }
                Some(id) => {
                    self.current = Some(id);
                    self.current_cycles = 0;
                    id
                }
            },
        };
        self.current_cycles += 1;

        if self.rng.random::<f64>() > self.performance {
            return;
        }

        self.stats.completed_tasks += 1;
        // The histogram auto-resizes; recording a cycle count cannot fail.
        let _ = self.service.record(self.current_cycles);
        debug!(id, cycles = self.current_cycles, "task completed");
        self.current = None;
    }

    /// Runs `cycles` rounds of arrival draw plus service cycle.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.generate();
            self.step();
        }
    }

    /// Returns the run statistics so far.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the task currently in service, if any.
    pub fn current_task(&self) -> Option<TaskId> {
        self.current
    }

    /// Returns `true` if no task is in service.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the queue's admission bound.
    pub fn capacity(&self) -> usize {
        self.tasks.capacity()
    }

    /// Returns the number of tasks waiting in the queue.
    pub fn queued(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the distribution of busy cycles per completed task.
    pub fn service_cycles(&self) -> &Histogram<u64> {
        &self.service
    }
}
