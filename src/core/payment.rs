//! Simulated payment sequence
//!
//! No payment provider is contacted. The sequence only paces status text:
//! four status messages 800 ms apart, then completion after another second.
//! It runs as a single future so the caller can abort it as a unit.

use std::future::Future;
use std::time::Duration;

/// Phase of the scripted payment run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    #[default]
    Idle,
    Validating,
    Processing,
    Confirming,
    Finalizing,
    Done,
}

impl PaymentPhase {
    /// The phase that follows this one; `Done` is terminal
    pub fn next(self) -> Self {
        match self {
            PaymentPhase::Idle => PaymentPhase::Validating,
            PaymentPhase::Validating => PaymentPhase::Processing,
            PaymentPhase::Processing => PaymentPhase::Confirming,
            PaymentPhase::Confirming => PaymentPhase::Finalizing,
            PaymentPhase::Finalizing | PaymentPhase::Done => PaymentPhase::Done,
        }
    }

    /// Status text shown while in this phase
    pub fn message(self) -> Option<&'static str> {
        match self {
            PaymentPhase::Validating => Some("Validating payment information..."),
            PaymentPhase::Processing => Some("Processing payment..."),
            PaymentPhase::Confirming => Some("Confirming transaction..."),
            PaymentPhase::Finalizing => Some("Finalizing order..."),
            PaymentPhase::Idle | PaymentPhase::Done => None,
        }
    }

    /// Delay before entering this phase
    pub fn delay(self) -> Duration {
        match self {
            PaymentPhase::Idle => Duration::ZERO,
            PaymentPhase::Done => COMPLETION_DELAY,
            _ => STEP_DELAY,
        }
    }

    /// True while the sequence is running
    pub fn is_in_progress(self) -> bool {
        !matches!(self, PaymentPhase::Idle | PaymentPhase::Done)
    }
}

/// Pause before each status message
pub const STEP_DELAY: Duration = Duration::from_millis(800);

/// Pause between the last status message and completion
pub const COMPLETION_DELAY: Duration = Duration::from_millis(1000);

/// Toast key shared by all status messages so each replaces the last
pub const PROCESSING_TOAST_ID: &str = "processing";

/// Drive the sequence from `Idle` to `Done`.
///
/// `sleep` is the runtime's timer; `on_phase` is called on entering each
/// phase, `Done` included. Dropping the returned future stops the sequence
/// before the next phase is entered.
pub async fn run_payment_sequence<S, F, P>(sleep: S, mut on_phase: P)
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
    P: FnMut(PaymentPhase),
{
    let mut phase = PaymentPhase::Idle;
    while phase != PaymentPhase::Done {
        phase = phase.next();
        sleep(phase.delay()).await;
        tracing::debug!(?phase, "payment phase");
        on_phase(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{AbortHandle, Abortable, ready};
    use std::cell::RefCell;

    #[test]
    fn test_phase_order() {
        let mut phase = PaymentPhase::Idle;
        let mut seen = Vec::new();
        while phase != PaymentPhase::Done {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                PaymentPhase::Validating,
                PaymentPhase::Processing,
                PaymentPhase::Confirming,
                PaymentPhase::Finalizing,
                PaymentPhase::Done,
            ]
        );
        assert_eq!(PaymentPhase::Done.next(), PaymentPhase::Done);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PaymentPhase::Validating.message(),
            Some("Validating payment information...")
        );
        assert_eq!(PaymentPhase::Finalizing.message(), Some("Finalizing order..."));
        assert_eq!(PaymentPhase::Done.message(), None);
        assert!(PaymentPhase::Processing.is_in_progress());
        assert!(!PaymentPhase::Done.is_in_progress());
    }

    #[test]
    fn test_sequence_runs_to_done_with_fixed_delays() {
        let delays = RefCell::new(Vec::new());
        let mut phases = Vec::new();

        block_on(run_payment_sequence(
            |d| {
                delays.borrow_mut().push(d);
                ready(())
            },
            |p| phases.push(p),
        ));

        assert_eq!(phases.last(), Some(&PaymentPhase::Done));
        assert_eq!(phases.len(), 5);
        assert_eq!(
            delays.into_inner(),
            vec![
                STEP_DELAY,
                STEP_DELAY,
                STEP_DELAY,
                STEP_DELAY,
                COMPLETION_DELAY
            ]
        );
    }

    #[test]
    fn test_aborted_sequence_never_completes() {
        let phases = RefCell::new(Vec::new());
        let (handle, registration) = AbortHandle::new_pair();
        handle.abort();

        let result = block_on(Abortable::new(
            run_payment_sequence(|_| ready(()), |p| phases.borrow_mut().push(p)),
            registration,
        ));

        assert!(result.is_err());
        assert!(phases.borrow().is_empty());
    }
}
