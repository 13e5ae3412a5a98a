use crate::conversion::{self, Tick};
use crate::upload::{self, error::UploadError};
use crate::workflow::error::WorkflowError;
use dataflow_model::format::DataFormat;
use dataflow_model::upload::UploadCandidate;
use dataflow_model::workflow::{ConversionPhase, WorkflowState};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

pub mod error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// No target was chosen, nothing happened.
    Ignored,
}

/// Owns the upload/convert state and the conversion timer.
///
/// Every wholesale replacement of the state starts a new generation. A running timer only
/// touches the state while its generation is current, so ticks from a cancelled run can
/// never land on a newer state.
#[derive(Debug)]
pub struct Workflow {
    state: Arc<watch::Sender<WorkflowState>>,
    generation: Arc<AtomicU64>,
    tick_period: Duration,
    timer: Option<CancellationToken>,
}

impl Workflow {
    #[must_use]
    pub fn new(tick_period: Duration) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            tick_period,
            timer: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Read-only view for presentation layers.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn available_targets(&self) -> &'static [DataFormat] {
        self.state.borrow().available_targets()
    }

    /// A rejected candidate leaves the state untouched.
    pub fn submit_file(&mut self, candidate: UploadCandidate) -> Result<(), UploadError> {
        let file = upload::accept(candidate)?;
        self.replace(WorkflowState::with_file(file));
        Ok(())
    }

    /// Must run inside a tokio runtime, the timer is a spawned task.
    pub fn start_conversion(&mut self, target: Option<DataFormat>) -> Result<StartOutcome, WorkflowError> {
        let Some(target) = target else {
            tracing::debug!("no target format selected, ignoring conversion request");
            return Ok(StartOutcome::Ignored);
        };
        let Some(file) = self.state.borrow().selected_file.clone() else {
            return Err(WorkflowError::NoFileSelected);
        };
        let runtime = Handle::try_current()?;

        let generation = self.replace(WorkflowState {
            selected_file: Some(file),
            conversion_phase: ConversionPhase::Converting,
            target_format: Some(target),
            progress_percent: 0,
        });

        let token = CancellationToken::new();
        self.timer = Some(token.clone());
        runtime.spawn(run_timer(
            Arc::clone(&self.state),
            Arc::clone(&self.generation),
            generation,
            self.tick_period,
            token,
        ));
        tracing::info!(%target, generation, "conversion started");
        Ok(StartOutcome::Started)
    }

    /// Back to the empty state from any phase. A pending timer is cancelled.
    pub fn reset(&mut self) {
        self.replace(WorkflowState::default());
        tracing::debug!("workflow reset");
    }

    /// Resolves once the state is no longer converting.
    pub async fn wait_for_completion(&self) -> Result<WorkflowState, WorkflowError> {
        let mut receiver = self.state.subscribe();
        let state = receiver
            .wait_for(|state| state.conversion_phase != ConversionPhase::Converting)
            .await?;
        Ok(state.clone())
    }

    fn cancel_timer(&mut self) {
        if let Some(token) = self.timer.take() {
            token.cancel();
        }
    }

    fn replace(&mut self, state: WorkflowState) -> u64 {
        self.cancel_timer();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state.send_replace(state);
        generation
    }
}

impl Drop for Workflow {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

async fn run_timer(
    state: Arc<watch::Sender<WorkflowState>>,
    current_generation: Arc<AtomicU64>,
    generation: u64,
    period: Duration,
    token: CancellationToken,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(generation, "conversion timer cancelled");
                return;
            }
            _ = ticker.tick() => {}
        }

        let mut tick = Tick::Inactive;
        state.send_if_modified(|state| {
            if current_generation.load(Ordering::Acquire) != generation {
                return false;
            }
            tick = conversion::advance(state);
            tick != Tick::Inactive
        });

        match tick {
            Tick::Advanced(progress) => tracing::trace!(generation, progress, "conversion progress"),
            Tick::Completed => {
                tracing::info!(generation, "conversion succeeded");
                return;
            }
            Tick::Inactive => {
                tracing::debug!(generation, "stale conversion timer stopped");
                return;
            }
        }
    }
}
