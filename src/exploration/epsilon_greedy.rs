use rand::{thread_rng, Rng};

use super::Choice;

/// Epsilon greedy exploration policy with a fixed threshold expressed in parts per thousand
///
/// A threshold of `100` explores on roughly 10% of decisions, `0` never explores and `1000`
/// always explores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpsilonGreedy {
    threshold: u16,
}

impl EpsilonGreedy {
    /// Upper end of the range the threshold is drawn against
    pub const SCALE: u16 = 1000;

    /// Initialize epsilon greedy policy with a per-mille exploration threshold
    ///
    /// **Panics** if `threshold` is not in the interval `[0,1000]`
    pub fn new(threshold: u16) -> Self {
        assert!(
            threshold <= Self::SCALE,
            "Invalid value for `threshold`. Must be in the interval [0, {}].",
            Self::SCALE,
        );
        Self { threshold }
    }

    /// Probability of exploring on a single decision
    pub fn epsilon(&self) -> f64 {
        f64::from(self.threshold) / f64::from(Self::SCALE)
    }

    /// Invoke epsilon greedy policy
    pub fn choose(&self) -> Choice {
        if thread_rng().gen_range(0..Self::SCALE) < self.threshold {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_never_explores() {
        let policy = EpsilonGreedy::new(0);
        assert!(
            (0..100_000).all(|_| policy.choose() == Choice::Exploit),
            "Threshold 0 disables exploration"
        );
    }

    #[test]
    fn full_threshold_always_explores() {
        let policy = EpsilonGreedy::new(1000);
        assert!(
            (0..100_000).all(|_| policy.choose() == Choice::Explore),
            "Threshold 1000 always explores"
        );
    }

    #[test]
    fn epsilon_is_per_mille() {
        assert_eq!(EpsilonGreedy::default().epsilon(), 0.1);
    }

    #[test]
    #[should_panic(expected = "Must be in the interval [0, 1000]")]
    fn threshold_out_of_range() {
        EpsilonGreedy::new(1001);
    }
}
