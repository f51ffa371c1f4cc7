//! The orchestrator: dataset, state machine, and step clock.
//!
//! [`SortEngine`] exclusively owns the bar sequence for the sort's
//! lifetime; the state machine receives temporary mutable access once per
//! fired step and retains nothing between calls. Within one frame the
//! ordering is strict and sequential: commands first, then at most one
//! logical step, then the read-only frame query — mutation and drawing
//! never interleave.

mod command;

pub use command::SortCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Duration;

use crate::algorithm::{ActiveSort, AlgorithmKind, SortStepper};
use crate::dataset::{self, Bar};
use crate::error::SortvizError;
use crate::options::Options;
use crate::render::{self, BarSprite};
use crate::timing::StepClock;

/// The sorting visualization engine.
pub struct SortEngine {
    options: Options,
    /// Owned random source for dataset (re)generation. Explicitly seeded —
    /// never from wall-clock time — so runs are reproducible.
    rng: StdRng,
    bars: Vec<Bar>,
    /// The running state machine, if any. Retired once it reports done.
    active: Option<ActiveSort>,
    clock: StepClock,
    exit_requested: bool,
}

impl SortEngine {
    /// Engine seeded from the OS entropy source.
    ///
    /// # Errors
    ///
    /// [`SortvizError::Config`] if the dataset options are invalid.
    pub fn new(options: Options) -> Result<Self, SortvizError> {
        Self::build(options, StdRng::from_os_rng())
    }

    /// Deterministic engine for reproducible runs and tests.
    ///
    /// # Errors
    ///
    /// [`SortvizError::Config`] if the dataset options are invalid.
    pub fn with_seed(
        options: Options,
        seed: u64,
    ) -> Result<Self, SortvizError> {
        Self::build(options, StdRng::seed_from_u64(seed))
    }

    fn build(options: Options, mut rng: StdRng) -> Result<Self, SortvizError> {
        let bars = dataset::generate(&options.dataset, &mut rng)?;
        let clock = StepClock::new(options.timing.speed);
        Ok(Self {
            options,
            rng,
            bars,
            active: None,
            clock,
            exit_requested: false,
        })
    }

    /// Execute one interactive command.
    ///
    /// # Errors
    ///
    /// [`SortvizError::Config`] if a restart regenerates the dataset with
    /// invalid options.
    pub fn execute(
        &mut self,
        command: SortCommand,
    ) -> Result<(), SortvizError> {
        match command {
            SortCommand::SelectAlgorithm { kind } => {
                self.select_algorithm(kind);
            }
            SortCommand::TogglePause => {
                self.clock.toggle_pause();
                log::info!(
                    "{}",
                    if self.clock.is_paused() { "paused" } else { "resumed" }
                );
            }
            SortCommand::IncreaseSpeed => {
                self.clock.increase_speed();
                log::info!("speed -> {} steps/s", self.clock.speed());
            }
            SortCommand::DecreaseSpeed => {
                self.clock.decrease_speed();
                log::info!("speed -> {} steps/s", self.clock.speed());
            }
            SortCommand::Restart => self.restart()?,
            SortCommand::Exit => {
                self.exit_requested = true;
                log::info!("exit requested");
            }
        }
        Ok(())
    }

    /// Feed elapsed time since the previous frame.
    ///
    /// Advances the running sort by at most one step; a finished sort is
    /// retired so the next frame renders without highlights.
    ///
    /// # Errors
    ///
    /// [`SortvizError::InvariantViolation`] if the state machine detects
    /// it was driven incorrectly. Fatal: the engine should be rebuilt.
    pub fn update(&mut self, delta: Duration) -> Result<(), SortvizError> {
        if !self.clock.tick(delta) {
            return Ok(());
        }
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        active.advance(&mut self.bars)?;
        if active.is_done() {
            log::info!("sort complete");
            self.active = None;
        }
        Ok(())
    }

    /// Build the read-only draw list for the current frame.
    #[must_use]
    pub fn frame(&self) -> Vec<BarSprite> {
        render::frame(&self.bars, self.active.as_ref())
    }

    /// The bar sequence in its current order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Whether a sort is currently running.
    #[must_use]
    pub const fn is_sorting(&self) -> bool {
        self.active.is_some()
    }

    /// Current step rate in steps per second.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.clock.speed()
    }

    /// Whether stepping is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Whether a [`SortCommand::Exit`] has been executed.
    #[must_use]
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// The options the engine was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    fn select_algorithm(&mut self, kind: AlgorithmKind) {
        match kind.build(&self.options.animation) {
            Some(active) => {
                log::info!("starting {} sort", kind.name());
                self.active = Some(active);
                self.clock.reset();
            }
            None => {
                log::warn!("{} sort is not implemented yet", kind.name());
            }
        }
    }

    fn restart(&mut self) -> Result<(), SortvizError> {
        self.bars = dataset::generate(&self.options.dataset, &mut self.rng)?;
        self.active = None;
        self.clock.reset();
        log::info!("dataset regenerated ({} bars)", self.bars.len());
        Ok(())
    }
}
