//! The simulated conversion. Nothing is transformed, a counter moves from 0 to 100.

use dataflow_model::workflow::{ConversionPhase, PROGRESS_COMPLETE, PROGRESS_STEP, WorkflowState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    Advanced(u8),
    Completed,
    /// The state was not converting, the timer should stop.
    Inactive,
}

/// Applies one timer tick.
///
/// The threshold is checked before incrementing: the tick that finds the progress at
/// 100 flips the phase to succeeded and leaves the progress untouched.
pub fn advance(state: &mut WorkflowState) -> Tick {
    if state.conversion_phase != ConversionPhase::Converting {
        return Tick::Inactive;
    }
    if state.progress_percent >= PROGRESS_COMPLETE {
        state.conversion_phase = ConversionPhase::Succeeded;
        return Tick::Completed;
    }
    state.progress_percent = state
        .progress_percent
        .saturating_add(PROGRESS_STEP)
        .min(PROGRESS_COMPLETE);
    Tick::Advanced(state.progress_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataflow_model::format::DataFormat;

    fn converting() -> WorkflowState {
        WorkflowState {
            conversion_phase: ConversionPhase::Converting,
            target_format: Some(DataFormat::Json),
            ..WorkflowState::default()
        }
    }

    #[test]
    fn test_full_run() {
        let mut state = converting();
        let mut observed = vec![state.progress_percent];
        let mut ticks = 0;
        loop {
            ticks += 1;
            match advance(&mut state) {
                Tick::Advanced(progress) => observed.push(progress),
                Tick::Completed => break,
                Tick::Inactive => panic!("run stopped early"),
            }
        }

        assert_eq!(ticks, 11);
        assert_eq!(observed, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(observed.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(observed.iter().all(|progress| progress % 10 == 0 && *progress <= 100));
        assert_eq!(state.conversion_phase, ConversionPhase::Succeeded);
        assert_eq!(state.progress_percent, 100);
    }

    #[test]
    fn test_completed_state_is_inactive() {
        let mut state = converting();
        while advance(&mut state) != Tick::Completed {}
        assert_eq!(advance(&mut state), Tick::Inactive);
        assert_eq!(state.progress_percent, 100);
    }

    #[test]
    fn test_idle_state_is_untouched() {
        let mut state = WorkflowState::default();
        assert_eq!(advance(&mut state), Tick::Inactive);
        assert_eq!(state, WorkflowState::default());
    }
}
