//! What-if scenario builder.
//!
//! One draft at a time is edited, then saved into the scenario list. A run
//! moves a saved scenario to `Running`; it completes `SCENARIO_RUN_DURATION`
//! later, observed through `poll`. Time is passed in by the caller as the
//! session clock so the book stays timer-free.

use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use railops_core::constants::SCENARIO_RUN_DURATION;
use railops_core::enums::{ParameterKind, ScenarioStatus};
use railops_core::records::{ParameterValue, Scenario, ScenarioParameter};

use crate::error::{ReviewError, ReviewResult};
use crate::status::check_transition;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRun {
    completes_at: Duration,
}

/// Saved scenarios plus the draft being edited.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioBook {
    draft: Option<Scenario>,
    scenarios: Vec<Scenario>,
    #[serde(skip)]
    runs: Vec<(String, PendingRun)>,
    #[serde(skip)]
    next_scenario_id: u64,
    #[serde(skip)]
    next_parameter_id: u64,
}

impl ScenarioBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> Option<&Scenario> {
        self.draft.as_ref()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Open a fresh draft, replacing any unsaved one.
    pub fn start_draft(&mut self, now: Duration) -> &Scenario {
        self.next_scenario_id += 1;
        let id = self.next_scenario_id.to_string();
        debug!("scenario draft {id} started");
        self.draft.insert(Scenario {
            id,
            name: String::new(),
            description: String::new(),
            parameters: Vec::new(),
            status: ScenarioStatus::Draft,
            created_at_secs: now.as_secs_f64(),
        })
    }

    fn draft_mut(&mut self) -> ReviewResult<&mut Scenario> {
        self.draft.as_mut().ok_or(ReviewError::NoDraft)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ReviewResult<()> {
        self.draft_mut()?.name = name.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> ReviewResult<()> {
        self.draft_mut()?.description = description.into();
        Ok(())
    }

    /// Append a parameter to the draft and return its id. Name and value
    /// are required; a numeric value is stored as a number.
    pub fn add_parameter(
        &mut self,
        kind: ParameterKind,
        name: &str,
        value: &str,
        description: &str,
    ) -> ReviewResult<String> {
        if self.draft.is_none() {
            return Err(ReviewError::NoDraft);
        }
        if name.is_empty() {
            return Err(ReviewError::IncompleteParameter("name"));
        }
        if value.is_empty() {
            return Err(ReviewError::IncompleteParameter("value"));
        }

        self.next_parameter_id += 1;
        let id = format!("p{}", self.next_parameter_id);
        self.draft_mut()?.parameters.push(ScenarioParameter {
            id: id.clone(),
            kind,
            name: name.to_string(),
            value: ParameterValue::parse(value),
            description: description.to_string(),
        });
        Ok(id)
    }

    pub fn remove_parameter(&mut self, parameter_id: &str) -> ReviewResult<()> {
        let draft = self.draft_mut()?;
        let before = draft.parameters.len();
        draft.parameters.retain(|p| p.id != parameter_id);
        if draft.parameters.len() == before {
            return Err(ReviewError::ParameterNotFound(parameter_id.to_string()));
        }
        Ok(())
    }

    /// Move the draft into the scenario list and return its id. A draft
    /// without a name stays open.
    pub fn save(&mut self) -> ReviewResult<String> {
        let scenario = match self.draft.take() {
            None => return Err(ReviewError::NoDraft),
            Some(draft) if draft.name.is_empty() => {
                self.draft = Some(draft);
                return Err(ReviewError::MissingScenarioName);
            }
            Some(draft) => draft,
        };
        info!(
            "scenario {} saved: {} ({} parameters)",
            scenario.id,
            scenario.name,
            scenario.parameters.len()
        );
        let id = scenario.id.clone();
        self.scenarios.push(scenario);
        Ok(id)
    }

    pub fn discard(&mut self) -> Option<Scenario> {
        let dropped = self.draft.take();
        if let Some(scenario) = &dropped {
            debug!("scenario draft {} discarded", scenario.id);
        }
        dropped
    }

    /// Start a saved scenario. It completes `SCENARIO_RUN_DURATION` after
    /// `now`.
    pub fn run(&mut self, id: &str, now: Duration) -> ReviewResult<()> {
        let scenario = self
            .scenarios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ReviewError::ScenarioNotFound(id.to_string()))?;
        check_transition(id, scenario.status, ScenarioStatus::Running)?;
        scenario.status = ScenarioStatus::Running;

        let completes_at = now + SCENARIO_RUN_DURATION;
        self.runs.push((id.to_string(), PendingRun { completes_at }));
        info!("scenario {id} running until {:.1}s", completes_at.as_secs_f64());
        Ok(())
    }

    /// Complete every run that is due at `now`. Returns the completed ids.
    pub fn poll(&mut self, now: Duration) -> Vec<String> {
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.runs)
            .into_iter()
            .partition(|(_, run)| run.completes_at <= now);
        self.runs = pending;

        let mut completed = Vec::with_capacity(due.len());
        for (id, _) in due {
            if let Some(scenario) = self.scenarios.iter_mut().find(|s| s.id == id) {
                scenario.status = ScenarioStatus::Completed;
                info!("scenario {id} completed");
                completed.push(id);
            }
        }
        completed
    }

    /// Runs still in progress.
    pub fn running(&self) -> usize {
        self.runs.len()
    }
}
