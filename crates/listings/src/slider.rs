//! Range-slider criteria (budgets, loan amount, tenure).
//!
//! The listing pages only ever offer values inside a fixed range on a
//! fixed step, so criteria built from free input are settled onto it first.

use serde::Serialize;

/// An inclusive numeric range with a step and a starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Slider {
    pub const fn new(min: u32, max: u32, step: u32, default: u32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Pull `value` into `[min, max]` and round it to the nearest step
    /// above `min`, never past `max`.
    pub fn clamp(&self, value: u32) -> u32 {
        let step = self.step.max(1);
        let offset = value.clamp(self.min, self.max) - self.min;
        let snapped = self.min + (offset + step / 2) / step * step;
        if snapped > self.max { snapped - step } else { snapped }
    }

    /// Whether `value` is a position the slider can hold as-is.
    pub fn is_settled(&self, value: u32) -> bool {
        self.clamp(value) == value
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Weekly accommodation budget in pounds.
pub const ACCOMMODATION_BUDGET: Slider = Slider::new(80, 400, 1, 250);
/// Total course fee budget in pounds.
pub const COURSE_BUDGET: Slider = Slider::new(500, 20_000, 100, 12_000);
/// Loan amount needed in pounds.
pub const LOAN_AMOUNT: Slider = Slider::new(5_000, 120_000, 1_000, 40_000);
/// Repayment tenure needed in years.
pub const LOAN_TENURE: Slider = Slider::new(3, 15, 1, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_into_range() {
        assert_eq!(ACCOMMODATION_BUDGET.clamp(10), 80);
        assert_eq!(ACCOMMODATION_BUDGET.clamp(150), 150);
        assert_eq!(ACCOMMODATION_BUDGET.clamp(9_999), 400);
        assert_eq!(LOAN_TENURE.clamp(20), 15);
    }

    #[test]
    fn test_clamp_snaps_to_step() {
        assert_eq!(LOAN_AMOUNT.clamp(90_001), 90_000);
        assert_eq!(LOAN_AMOUNT.clamp(90_500), 91_000);
        assert_eq!(COURSE_BUDGET.clamp(12_049), 12_000);
        assert_eq!(COURSE_BUDGET.clamp(19_990), 20_000);
        assert!(!LOAN_AMOUNT.is_settled(40_250));
        assert!(LOAN_AMOUNT.is_settled(LOAN_AMOUNT.default));

        // The top of the range wins over a step that would overshoot it
        let odd = Slider::new(0, 10, 4, 0);
        assert_eq!(odd.clamp(10), 8);
        assert_eq!(odd.clamp(7), 8);
    }

    #[test]
    fn test_defaults_lie_in_range() {
        for slider in [ACCOMMODATION_BUDGET, COURSE_BUDGET, LOAN_AMOUNT, LOAN_TENURE] {
            assert!(slider.contains(slider.default));
            assert!(slider.is_settled(slider.default));
        }
    }
}
