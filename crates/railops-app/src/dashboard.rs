//! Dashboard state: the map animation plus the review boards and the
//! scenario book, driven by serialized frontend commands.

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use railops_core::commands::MapCommand;
use railops_core::enums::{IncidentStatus, ParameterKind, RecommendationStatus, TrainStatus};
use railops_core::records::{Incident, Recommendation, Scenario, TrainRecord};
use railops_core::state::{MapSnapshot, NetworkView};
use railops_review::criteria::ActiveFilter;
use railops_review::fixtures;
use railops_review::scenario::ScenarioBook;
use railops_review::sort::{IncidentSortKey, RecommendationSortKey, SortSpec, TrainSortKey};
use railops_review::stats::{RecommendationStats, StatusCounts};
use railops_review::ReviewBoard;
use railops_sim::{PositionSimulator, SimConfig};

use crate::animation::AnimationLoop;
use crate::error::AppResult;

/// Which review list a filter command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    Trains,
    Recommendations,
    Incidents,
}

/// Everything the frontend can ask of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardCommand {
    StartAnimation,
    StopAnimation,
    /// While the loop runs the command applies at its next tick; while it
    /// is stopped it applies immediately and the returned snapshot shows it.
    Map { command: MapCommand },
    GetMap,

    SetFilter { board: BoardKind, key: String, value: String },
    /// Clears one filter, or all of them when `key` is absent.
    ClearFilter {
        board: BoardKind,
        #[serde(default)]
        key: Option<String>,
    },
    SortTrains { key: TrainSortKey },
    SortRecommendations { key: RecommendationSortKey },
    SortIncidents { key: IncidentSortKey },

    SetTrainStatus { id: String, status: TrainStatus },
    SetRecommendationStatus { id: String, status: RecommendationStatus },
    SetIncidentStatus { id: String, status: IncidentStatus },

    StartScenarioDraft,
    SetScenarioName { name: String },
    SetScenarioDescription { description: String },
    AddScenarioParameter {
        kind: ParameterKind,
        name: String,
        value: String,
        #[serde(default)]
        description: String,
    },
    RemoveScenarioParameter { parameter_id: String },
    SaveScenario,
    DiscardScenario,
    RunScenario { scenario_id: String },
    PollScenarios,
}

/// The updated view a command answers with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardResponse {
    Map {
        running: bool,
        snapshot: Option<MapSnapshot>,
    },
    Trains {
        rows: Vec<TrainRecord>,
        filters: Vec<ActiveFilter>,
        sort: Option<SortSpec<TrainSortKey>>,
        counts: StatusCounts<TrainStatus>,
    },
    Recommendations {
        items: Vec<Recommendation>,
        filters: Vec<ActiveFilter>,
        sort: Option<SortSpec<RecommendationSortKey>>,
        stats: RecommendationStats,
    },
    Incidents {
        items: Vec<Incident>,
        filters: Vec<ActiveFilter>,
        sort: Option<SortSpec<IncidentSortKey>>,
        counts: StatusCounts<IncidentStatus>,
    },
    Scenarios {
        draft: Option<Scenario>,
        scenarios: Vec<Scenario>,
        /// Runs that completed since the last scenarios view.
        completed: Vec<String>,
    },
}

/// Owns all dashboard state. One instance per session.
pub struct Dashboard {
    animation: AnimationLoop,
    trains: ReviewBoard<TrainRecord>,
    recommendations: ReviewBoard<Recommendation>,
    incidents: ReviewBoard<Incident>,
    scenarios: ScenarioBook,
    /// Completed runs not yet returned in a scenarios view.
    unreported_completions: Vec<String>,
    started: Instant,
}

impl Dashboard {
    /// Dashboard over the built-in network map and demo records.
    pub fn new(config: SimConfig) -> AppResult<Self> {
        let simulator = PositionSimulator::default_map(config)?;
        Self::with_parts(
            simulator,
            fixtures::trains(),
            fixtures::recommendations(),
            fixtures::incidents(),
        )
    }

    /// Trains are ordered by number until the user picks a column.
    pub fn with_parts(
        simulator: PositionSimulator,
        trains: Vec<TrainRecord>,
        recommendations: Vec<Recommendation>,
        incidents: Vec<Incident>,
    ) -> AppResult<Self> {
        Ok(Self {
            animation: AnimationLoop::new(simulator),
            trains: ReviewBoard::new(trains)?
                .with_sort(SortSpec::ascending(TrainSortKey::TrainNumber)),
            recommendations: ReviewBoard::new(recommendations)?,
            incidents: ReviewBoard::new(incidents)?,
            scenarios: ScenarioBook::new(),
            unreported_completions: Vec::new(),
            started: Instant::now(),
        })
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationLoop {
        &mut self.animation
    }

    pub fn trains(&self) -> &ReviewBoard<TrainRecord> {
        &self.trains
    }

    pub fn recommendations(&self) -> &ReviewBoard<Recommendation> {
        &self.recommendations
    }

    pub fn incidents(&self) -> &ReviewBoard<Incident> {
        &self.incidents
    }

    pub fn scenarios(&self) -> &ScenarioBook {
        &self.scenarios
    }

    pub fn network(&self) -> AppResult<NetworkView> {
        self.animation.with_simulator(|sim| sim.network().clone())
    }

    /// Time since the dashboard was created.
    pub fn session_time(&self) -> Duration {
        self.started.elapsed()
    }

    /// Handle a command at the current session time.
    pub fn handle(&mut self, command: DashboardCommand) -> AppResult<DashboardResponse> {
        let now = self.session_time();
        self.handle_at(command, now)
    }

    /// Handle a command at session time `now`. Due scenario runs complete
    /// first.
    pub fn handle_at(
        &mut self,
        command: DashboardCommand,
        now: Duration,
    ) -> AppResult<DashboardResponse> {
        debug!("dashboard command {command:?}");
        let completed = self.scenarios.poll(now);
        self.unreported_completions.extend(completed);

        use DashboardCommand as C;
        match command {
            C::StartAnimation => {
                self.animation.start()?;
                self.map_view()
            }
            C::StopAnimation => {
                self.animation.stop()?;
                self.map_view()
            }
            C::Map { command } => {
                self.animation.send(command)?;
                self.map_view()
            }
            C::GetMap => self.map_view(),

            C::SetFilter { board, key, value } => {
                match board {
                    BoardKind::Trains => self.trains.apply_filter(&key, &value)?,
                    BoardKind::Recommendations => self.recommendations.apply_filter(&key, &value)?,
                    BoardKind::Incidents => self.incidents.apply_filter(&key, &value)?,
                }
                Ok(self.board_view(board))
            }
            C::ClearFilter { board, key } => {
                match (board, key) {
                    (BoardKind::Trains, Some(key)) => self.trains.clear_filter(&key)?,
                    (BoardKind::Trains, None) => self.trains.clear_filters(),
                    (BoardKind::Recommendations, Some(key)) => {
                        self.recommendations.clear_filter(&key)?
                    }
                    (BoardKind::Recommendations, None) => self.recommendations.clear_filters(),
                    (BoardKind::Incidents, Some(key)) => self.incidents.clear_filter(&key)?,
                    (BoardKind::Incidents, None) => self.incidents.clear_filters(),
                }
                Ok(self.board_view(board))
            }
            C::SortTrains { key } => {
                self.trains.toggle_sort(key);
                Ok(self.train_view())
            }
            C::SortRecommendations { key } => {
                self.recommendations.toggle_sort(key);
                Ok(self.recommendation_view())
            }
            C::SortIncidents { key } => {
                self.incidents.toggle_sort(key);
                Ok(self.incident_view())
            }

            C::SetTrainStatus { id, status } => {
                self.trains.set_status(&id, status)?;
                Ok(self.train_view())
            }
            C::SetRecommendationStatus { id, status } => {
                self.recommendations.set_status(&id, status)?;
                Ok(self.recommendation_view())
            }
            C::SetIncidentStatus { id, status } => {
                self.incidents.set_status(&id, status)?;
                Ok(self.incident_view())
            }

            C::StartScenarioDraft => {
                self.scenarios.start_draft(now);
                Ok(self.scenario_view())
            }
            C::SetScenarioName { name } => {
                self.scenarios.set_name(name)?;
                Ok(self.scenario_view())
            }
            C::SetScenarioDescription { description } => {
                self.scenarios.set_description(description)?;
                Ok(self.scenario_view())
            }
            C::AddScenarioParameter {
                kind,
                name,
                value,
                description,
            } => {
                self.scenarios
                    .add_parameter(kind, &name, &value, &description)?;
                Ok(self.scenario_view())
            }
            C::RemoveScenarioParameter { parameter_id } => {
                self.scenarios.remove_parameter(&parameter_id)?;
                Ok(self.scenario_view())
            }
            C::SaveScenario => {
                self.scenarios.save()?;
                Ok(self.scenario_view())
            }
            C::DiscardScenario => {
                self.scenarios.discard();
                Ok(self.scenario_view())
            }
            C::RunScenario { scenario_id } => {
                self.scenarios.run(&scenario_id, now)?;
                Ok(self.scenario_view())
            }
            C::PollScenarios => Ok(self.scenario_view()),
        }
    }

    pub fn map_view(&self) -> AppResult<DashboardResponse> {
        Ok(DashboardResponse::Map {
            running: self.animation.is_running(),
            snapshot: self.animation.latest_snapshot()?,
        })
    }

    pub fn board_view(&self, board: BoardKind) -> DashboardResponse {
        match board {
            BoardKind::Trains => self.train_view(),
            BoardKind::Recommendations => self.recommendation_view(),
            BoardKind::Incidents => self.incident_view(),
        }
    }

    pub fn train_view(&self) -> DashboardResponse {
        DashboardResponse::Trains {
            rows: self.trains.view(),
            filters: self.trains.active_filters(),
            sort: self.trains.sort_spec(),
            counts: self.trains.status_counts(),
        }
    }

    pub fn recommendation_view(&self) -> DashboardResponse {
        DashboardResponse::Recommendations {
            items: self.recommendations.view(),
            filters: self.recommendations.active_filters(),
            sort: self.recommendations.sort_spec(),
            stats: self.recommendations.stats(),
        }
    }

    pub fn incident_view(&self) -> DashboardResponse {
        DashboardResponse::Incidents {
            items: self.incidents.view(),
            filters: self.incidents.active_filters(),
            sort: self.incidents.sort_spec(),
            counts: self.incidents.status_counts(),
        }
    }

    /// Scenarios view. Reports each completed run once.
    pub fn scenario_view(&mut self) -> DashboardResponse {
        DashboardResponse::Scenarios {
            draft: self.scenarios.draft().cloned(),
            scenarios: self.scenarios.scenarios().to_vec(),
            completed: std::mem::take(&mut self.unreported_completions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json_shape() {
        let cmd: DashboardCommand = serde_json::from_str(
            r#"{"type":"set_filter","board":"recommendations","key":"category","value":"routing"}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::SetFilter {
                board: BoardKind::Recommendations,
                key: "category".into(),
                value: "routing".into(),
            }
        );

        let cmd: DashboardCommand =
            serde_json::from_str(r#"{"type":"map","command":{"type":"SelectTrain","train_id":"2"}}"#)
                .unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::Map {
                command: MapCommand::SelectTrain {
                    train_id: "2".into()
                }
            }
        );

        let cmd: DashboardCommand = serde_json::from_str(r#"{"type":"clear_filter","board":"trains"}"#).unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::ClearFilter {
                board: BoardKind::Trains,
                key: None
            }
        );
    }

    #[test]
    fn test_response_is_tagged_by_view() {
        let dashboard = Dashboard::new(SimConfig::default()).unwrap();
        let json = serde_json::to_value(dashboard.incident_view()).unwrap();
        assert_eq!(json["view"], "incidents");
        assert_eq!(json["counts"]["active"], 2);
        assert_eq!(json["items"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_trains_default_to_number_order() {
        let dashboard = Dashboard::new(SimConfig::default()).unwrap();
        let DashboardResponse::Trains { rows, sort, .. } = dashboard.train_view() else {
            panic!("expected trains view");
        };
        assert_eq!(sort, Some(SortSpec::ascending(TrainSortKey::TrainNumber)));
        let numbers: Vec<_> = rows.iter().map(|r| r.train_number.as_str()).collect();
        assert_eq!(numbers, ["11111", "12345", "22222", "33333", "67890"]);
    }
}
