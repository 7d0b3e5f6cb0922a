//! List command: summarize the ordered provisioning plan.

use serde::Serialize;

use crate::domain::Step;

/// One row of the plan listing.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    /// 1-based position in the plan.
    pub position: usize,
    pub name: String,
    /// One-line action description.
    pub action: String,
    pub required: bool,
}

/// Build plan summaries in declaration order.
pub fn plan_summaries(plan: &[Step]) -> Vec<StepSummary> {
    plan.iter()
        .enumerate()
        .map(|(index, step)| StepSummary {
            position: index + 1,
            name: step.name.clone(),
            action: step.action.summary(),
            required: step.required,
        })
        .collect()
}
