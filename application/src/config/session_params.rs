//! Session behaviour parameters

use quiz_domain::TimerPolicy;

/// Controls how the take-quiz and grade use cases behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    /// What happens when a timed quiz runs out of time
    pub timer_policy: TimerPolicy,
    /// Whether submitted results are sent to the result submitter
    pub record_results: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            timer_policy: TimerPolicy::Cosmetic,
            record_results: true,
        }
    }
}

impl SessionParams {
    pub fn with_timer_policy(mut self, policy: TimerPolicy) -> Self {
        self.timer_policy = policy;
        self
    }

    pub fn with_record_results(mut self, record: bool) -> Self {
        self.record_results = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = SessionParams::default();
        assert_eq!(params.timer_policy, TimerPolicy::Cosmetic);
        assert!(params.record_results);
    }

    #[test]
    fn test_builder_methods() {
        let params = SessionParams::default()
            .with_timer_policy(TimerPolicy::AutoSubmit)
            .with_record_results(false);
        assert!(params.timer_policy.enforces_limit());
        assert!(!params.record_results);
    }
}
