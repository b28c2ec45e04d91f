//! Plan selection state
//!
//! Reconciles the enumerated plans with the startup active plan and
//! drives plan-change requests. Rows are keyed by index into the
//! name-sorted list, so two plans sharing a display name stay
//! individually selectable. The active-plan mark comes from a startup
//! snapshot and is not re-polled afterwards.

use tracing::info;

use crate::error::ApplyError;
use crate::powercfg::{PowerPlan, PowerTool};

/// Whether a plan change is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyState {
    Idle,
    Applying,
}

/// What a selection event amounted to
#[derive(Debug)]
pub enum SelectionOutcome {
    /// The plan is now active
    Applied(PowerPlan),
    /// The tool could not activate the plan
    Failed(ApplyError),
    /// Nothing was attempted (unknown row, or a change already in flight)
    Ignored,
}

pub struct SelectionController {
    plans: Vec<PowerPlan>,
    selected: Option<usize>,
    state: ApplyState,
}

impl SelectionController {
    /// Build from enumerated plans and the active identifier captured at
    /// startup. Plans are ordered by name; the row whose identifier
    /// matches starts out selected.
    pub fn new(mut plans: Vec<PowerPlan>, active_guid: &str) -> Self {
        plans.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.guid.cmp(&b.guid)));
        let selected = plans.iter().position(|plan| plan.guid == active_guid);
        Self {
            plans,
            selected,
            state: ApplyState::Idle,
        }
    }

    pub fn plans(&self) -> &[PowerPlan] {
        &self.plans
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Start a change for the given row and return the plan to activate.
    /// Returns None for an unknown row or while another change is in
    /// flight; the caller sees that as a silently ignored event.
    pub fn begin(&mut self, index: usize) -> Option<PowerPlan> {
        if self.state == ApplyState::Applying {
            return None;
        }
        let plan = self.plans.get(index)?.clone();
        self.state = ApplyState::Applying;
        self.selected = Some(index);
        Some(plan)
    }

    /// Return to Idle, however the change went. A failed change keeps the
    /// attempted row selected.
    pub fn finish(&mut self) {
        self.state = ApplyState::Idle;
    }

    /// Handle a row selection end to end: begin, ask the tool, finish.
    pub fn select(&mut self, index: usize, tool: &dyn PowerTool) -> SelectionOutcome {
        let Some(plan) = self.begin(index) else {
            return SelectionOutcome::Ignored;
        };
        info!(name = %plan.name, guid = %plan.guid, "Activating power plan");
        let result = tool.set_active(&plan.guid);
        self.finish();
        match result {
            Ok(()) => SelectionOutcome::Applied(plan),
            Err(err) => SelectionOutcome::Failed(err),
        }
    }
}
