//! ROI estimation for the calculator view

use serde::{Deserialize, Serialize};

/// Calculator form state. Serialized into the share-link payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub team_size: f64,
    pub hourly_rate: f64,
    pub hours_saved_per_week: f64,
    /// 0..=100
    pub adoption_rate_pct: f64,
    pub license_cost_per_user_month: f64,
    pub onboarding_cost: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        RoiInputs {
            team_size: 50.0,
            hourly_rate: 65.0,
            hours_saved_per_week: 3.0,
            adoption_rate_pct: 70.0,
            license_cost_per_user_month: 30.0,
            onboarding_cost: 5000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoiOutcome {
    pub annual_savings: f64,
    pub annual_cost: f64,
    pub net_benefit: f64,
    /// Percentage; `0.0` when annual cost is zero.
    pub roi_pct: f64,
    /// `None` when there are no savings to pay the cost back.
    pub payback_months: Option<f64>,
}

pub fn calculate(inputs: &RoiInputs) -> RoiOutcome {
    let adoption = (inputs.adoption_rate_pct / 100.0).clamp(0.0, 1.0);
    let annual_savings =
        inputs.team_size * adoption * inputs.hours_saved_per_week * inputs.hourly_rate * 52.0;
    let annual_cost =
        inputs.team_size * inputs.license_cost_per_user_month * 12.0 + inputs.onboarding_cost;
    let net_benefit = annual_savings - annual_cost;
    let roi_pct = if annual_cost > 0.0 {
        net_benefit / annual_cost * 100.0
    } else {
        0.0
    };
    let payback_months = if annual_savings > 0.0 {
        Some(annual_cost / (annual_savings / 12.0))
    } else {
        None
    };
    RoiOutcome {
        annual_savings,
        annual_cost,
        net_benefit,
        roi_pct,
        payback_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RoiInputs {
        RoiInputs {
            team_size: 100.0,
            hourly_rate: 50.0,
            hours_saved_per_week: 2.0,
            adoption_rate_pct: 50.0,
            license_cost_per_user_month: 10.0,
            onboarding_cost: 8000.0,
        }
    }

    #[test]
    fn test_outcome_fields() {
        let outcome = calculate(&inputs());
        // 100 * 0.5 * 2 * 50 * 52
        assert_eq!(outcome.annual_savings, 260_000.0);
        // 100 * 10 * 12 + 8000
        assert_eq!(outcome.annual_cost, 20_000.0);
        assert_eq!(outcome.net_benefit, 240_000.0);
        assert_eq!(outcome.roi_pct, 1200.0);
        let payback = outcome.payback_months.unwrap();
        assert!((payback - 0.923).abs() < 0.001);
    }

    #[test]
    fn test_zero_cost_has_zero_roi_pct() {
        let mut zero_cost = inputs();
        zero_cost.license_cost_per_user_month = 0.0;
        zero_cost.onboarding_cost = 0.0;
        let outcome = calculate(&zero_cost);
        assert_eq!(outcome.annual_cost, 0.0);
        assert_eq!(outcome.roi_pct, 0.0);
    }

    #[test]
    fn test_zero_savings_has_no_payback() {
        let mut idle = inputs();
        idle.hours_saved_per_week = 0.0;
        let outcome = calculate(&idle);
        assert_eq!(outcome.annual_savings, 0.0);
        assert_eq!(outcome.payback_months, None);
        assert!(outcome.net_benefit < 0.0);
    }

    #[test]
    fn test_adoption_rate_is_clamped() {
        let mut over = inputs();
        over.adoption_rate_pct = 250.0;
        let full = calculate(&over);
        over.adoption_rate_pct = 100.0;
        assert_eq!(full.annual_savings, calculate(&over).annual_savings);
    }

    #[test]
    fn test_share_payload_round_trip() {
        let json = serde_json::to_string(&inputs()).unwrap();
        let back: RoiInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs());
    }
}
