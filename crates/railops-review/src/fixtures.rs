//! Demo records loaded by the dashboard at startup.

use railops_core::enums::*;
use railops_core::records::{
    AffectedEntities, EstimatedImpact, Implementation, Incident, IncidentLogEntry, Reasoning,
    Recommendation, TrainRecord,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn train(
    id: &str,
    number: &str,
    name: &str,
    train_type: TrainType,
    status: TrainStatus,
    (origin, destination): (&str, &str),
    (departure, arrival): (&str, &str),
    current_location: &str,
    delay: i32,
    passengers: Option<u32>,
    cargo: Option<&str>,
) -> TrainRecord {
    TrainRecord {
        id: id.into(),
        train_number: number.into(),
        train_name: name.into(),
        train_type,
        status,
        origin: origin.into(),
        destination: destination.into(),
        departure: departure.into(),
        arrival: arrival.into(),
        current_location: current_location.into(),
        delay,
        passengers,
        cargo: cargo.map(str::to_string),
    }
}

/// Rows of the train movements table.
pub fn trains() -> Vec<TrainRecord> {
    vec![
        train(
            "1",
            "12345",
            "Rajdhani Express",
            TrainType::Express,
            TrainStatus::Delayed,
            ("New Delhi", "Mumbai Central"),
            ("16:00", "08:30+1"),
            "Kanpur",
            45,
            Some(1200),
            None,
        ),
        train(
            "2",
            "67890",
            "Shatabdi Express",
            TrainType::Express,
            TrainStatus::OnTime,
            ("Mumbai Central", "New Delhi"),
            ("06:00", "22:30"),
            "Bhopal",
            0,
            Some(800),
            None,
        ),
        train(
            "3",
            "11111",
            "Freight Special",
            TrainType::Freight,
            TrainStatus::Early,
            ("Nagpur", "Mumbai Central"),
            ("22:00", "14:00+1"),
            "Akola",
            -30,
            None,
            Some("Coal - 2000T"),
        ),
        train(
            "4",
            "22222",
            "Local Passenger",
            TrainType::Passenger,
            TrainStatus::OnTime,
            ("Bhopal", "Nagpur"),
            ("14:30", "20:15"),
            "Betul",
            0,
            Some(400),
            None,
        ),
        train(
            "5",
            "33333",
            "Express Special",
            TrainType::Express,
            TrainStatus::Cancelled,
            ("Chennai", "Bangalore"),
            ("18:00", "23:30"),
            "Chennai",
            0,
            Some(600),
            None,
        ),
    ]
}

/// Pending AI recommendations.
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "1".into(),
            title: "Optimize Route for Train 12345 via Alternative Track".into(),
            description: "Reroute Rajdhani Express through less congested track B-7 to reduce delay by 25 minutes".into(),
            category: RecommendationCategory::Routing,
            priority: Priority::High,
            confidence: 92,
            estimated_impact: EstimatedImpact {
                time_reduction: 25,
                cost_saving: 15,
                efficiency_gain: 12,
                risk_reduction: 8,
            },
            reasoning: Reasoning {
                data_points: strings(&[
                    "Main line has 3 trains queued with average 15-minute delays",
                    "Alternative track B-7 is currently clear with 95% reliability",
                    "Historical data shows 5-minute travel time increase on B-7",
                    "Weather conditions favorable for alternative route",
                ]),
                analysis: "Current main line congestion analysis indicates significant delays. Alternative track B-7 offers optimal balance between time efficiency and operational safety. Machine learning models predict 92% success rate for this routing decision.".into(),
                alternatives: strings(&[
                    "Wait for main line clearance",
                    "Use track C-3 (longer route)",
                    "Delay departure by 30 minutes",
                ]),
            },
            implementation: Implementation {
                steps: strings(&[
                    "Notify train crew of route change",
                    "Update signaling system for track B-7",
                    "Coordinate with stations along new route",
                    "Monitor progress and adjust if needed",
                ]),
                duration: "5 minutes".into(),
                resources: strings(&["Signal Controller", "Station Coordinators"]),
                risks: strings(&["Minor passenger confusion", "Slight fuel cost increase"]),
            },
            affected_entities: AffectedEntities {
                trains: strings(&["12345"]),
                stations: strings(&["Kanpur", "Jhansi", "Bhopal"]),
                routes: strings(&["B-7", "Main-Line-A"]),
            },
            status: RecommendationStatus::Pending,
            timestamp: "2024-01-15T15:30:00Z".into(),
        },
        Recommendation {
            id: "2".into(),
            title: "Adjust Platform Assignment at Mumbai Central".into(),
            description: "Move Express 67890 to Platform 3 for faster turnaround and improved passenger flow".into(),
            category: RecommendationCategory::Scheduling,
            priority: Priority::Medium,
            confidence: 87,
            estimated_impact: EstimatedImpact {
                time_reduction: 12,
                cost_saving: 8,
                efficiency_gain: 15,
                risk_reduction: 5,
            },
            reasoning: Reasoning {
                data_points: strings(&[
                    "Platform 3 has 40% faster boarding times based on last 30 days",
                    "Current platform assignment has 15-minute average turnaround",
                    "Platform 3 closer to maintenance facilities by 200 meters",
                    "Passenger flow analysis shows 25% improvement on Platform 3",
                ]),
                analysis: "Platform utilization optimization based on real-time passenger flow data and historical performance metrics. Platform 3 offers superior operational efficiency with minimal disruption to existing schedules.".into(),
                alternatives: strings(&[
                    "Keep current platform",
                    "Use Platform 5",
                    "Delay for optimal platform availability",
                ]),
            },
            implementation: Implementation {
                steps: strings(&[
                    "Update passenger information systems",
                    "Notify ground staff of platform change",
                    "Redirect passenger flow management",
                    "Update train crew instructions",
                ]),
                duration: "3 minutes".into(),
                resources: strings(&["Station Manager", "Ground Staff", "IT Systems"]),
                risks: strings(&["Passenger confusion", "Brief announcement delays"]),
            },
            affected_entities: AffectedEntities {
                trains: strings(&["67890"]),
                stations: strings(&["Mumbai Central"]),
                routes: Vec::new(),
            },
            status: RecommendationStatus::Pending,
            timestamp: "2024-01-15T15:25:00Z".into(),
        },
        Recommendation {
            id: "3".into(),
            title: "Preventive Maintenance Alert for Signal Box A-12".into(),
            description: "Schedule immediate inspection of signal relay system showing early failure indicators".into(),
            category: RecommendationCategory::Maintenance,
            priority: Priority::Critical,
            confidence: 95,
            estimated_impact: EstimatedImpact {
                time_reduction: 0,
                cost_saving: 50,
                efficiency_gain: 0,
                risk_reduction: 35,
            },
            reasoning: Reasoning {
                data_points: strings(&[
                    "Signal response time increased by 15% over last 48 hours",
                    "Temperature sensors show 8°C above normal in relay cabinet",
                    "Similar failures occurred in 3 other locations last month",
                    "Predictive model indicates 78% failure probability within 24 hours",
                ]),
                analysis: "Predictive maintenance algorithms have identified critical failure patterns in signal relay system. Immediate intervention can prevent major service disruption and ensure passenger safety.".into(),
                alternatives: strings(&[
                    "Wait for complete failure",
                    "Reduce train frequency",
                    "Implement manual signaling",
                ]),
            },
            implementation: Implementation {
                steps: strings(&[
                    "Dispatch technical team immediately",
                    "Prepare backup signaling equipment",
                    "Coordinate with affected train schedules",
                    "Implement temporary speed restrictions if needed",
                ]),
                duration: "2 hours".into(),
                resources: strings(&["Signal Engineers", "Technical Team", "Backup Equipment"]),
                risks: strings(&["Service disruption during maintenance", "Weather dependency"]),
            },
            affected_entities: AffectedEntities {
                trains: strings(&["12345", "67890", "11111"]),
                stations: strings(&["Junction A-12"]),
                routes: strings(&["Main-Line-A", "Branch-B7"]),
            },
            status: RecommendationStatus::Pending,
            timestamp: "2024-01-15T15:20:00Z".into(),
        },
    ]
}

fn log_entries(entries: &[(&str, &str, &str)]) -> Vec<IncidentLogEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (message, timestamp, user))| IncidentLogEntry {
            id: (i + 1).to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            user: user.to_string(),
        })
        .collect()
}

/// Incidents on the alerts timeline.
pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "1".into(),
            title: "Signal System Malfunction at Junction A-12".into(),
            description: "Automatic signaling system experiencing intermittent failures causing train delays".into(),
            severity: Severity::Critical,
            status: IncidentStatus::Investigating,
            incident_type: IncidentType::Signal,
            location: "New Delhi - Mumbai Route, Junction A-12".into(),
            reported_by: "Station Master - Junction A-12".into(),
            reported_at: "2024-01-15T14:30:00Z".into(),
            resolved_at: None,
            affected_trains: strings(&["12345", "67890", "11111"]),
            estimated_impact: "45-60 min delays expected".into(),
            actions: log_entries(&[
                ("Dispatched technical team", "2024-01-15T14:35:00Z", "Control Room"),
                ("Activated manual signaling", "2024-01-15T14:40:00Z", "Signal Engineer"),
            ]),
            updates: log_entries(&[
                ("Technical team arrived on site", "2024-01-15T15:00:00Z", "Field Engineer"),
                ("Identified faulty relay in signal box", "2024-01-15T15:15:00Z", "Signal Technician"),
            ]),
        },
        Incident {
            id: "2".into(),
            title: "Heavy Rainfall Alert - Mumbai Section".into(),
            description: "Monsoon rains causing reduced visibility and track flooding in multiple sections".into(),
            severity: Severity::High,
            status: IncidentStatus::Active,
            incident_type: IncidentType::Weather,
            location: "Mumbai - Pune Section".into(),
            reported_by: "Weather Monitoring System".into(),
            reported_at: "2024-01-15T13:15:00Z".into(),
            resolved_at: None,
            affected_trains: strings(&["22222", "33333"]),
            estimated_impact: "Speed restrictions, 15-30 min delays".into(),
            actions: log_entries(&[
                ("Issued speed restriction order", "2024-01-15T13:20:00Z", "Traffic Controller"),
                ("Activated drainage pumps", "2024-01-15T13:25:00Z", "Maintenance Team"),
            ]),
            updates: log_entries(&[
                ("Rainfall intensity increasing", "2024-01-15T13:45:00Z", "Weather Station"),
                ("Track water level at 15cm", "2024-01-15T14:00:00Z", "Track Inspector"),
            ]),
        },
        Incident {
            id: "3".into(),
            title: "Train 12345 Mechanical Failure".into(),
            description: "Rajdhani Express reporting engine overheating, stopped at Kanpur Junction".into(),
            severity: Severity::High,
            status: IncidentStatus::Resolved,
            incident_type: IncidentType::Technical,
            location: "Kanpur Junction".into(),
            reported_by: "Loco Pilot - Train 12345".into(),
            reported_at: "2024-01-15T11:20:00Z".into(),
            resolved_at: Some("2024-01-15T13:45:00Z".into()),
            affected_trains: strings(&["12345"]),
            estimated_impact: "2.5 hour delay".into(),
            actions: log_entries(&[
                ("Emergency stop authorized", "2024-01-15T11:22:00Z", "Control Room"),
                ("Replacement engine dispatched", "2024-01-15T11:30:00Z", "Loco Shed"),
                ("Engine replacement completed", "2024-01-15T13:30:00Z", "Technical Team"),
            ]),
            updates: log_entries(&[
                ("Passengers provided refreshments", "2024-01-15T12:00:00Z", "Station Manager"),
                ("Replacement engine coupled", "2024-01-15T13:35:00Z", "Loco Pilot"),
                ("Train departed Kanpur", "2024-01-15T13:45:00Z", "Station Controller"),
            ]),
        },
        Incident {
            id: "4".into(),
            title: "Scheduled Track Maintenance - Section B7".into(),
            description: "Planned rail replacement work on main line".into(),
            severity: Severity::Medium,
            status: IncidentStatus::Active,
            incident_type: IncidentType::Maintenance,
            location: "Chennai - Bangalore Route, Section B7".into(),
            reported_by: "Maintenance Supervisor".into(),
            reported_at: "2024-01-15T06:00:00Z".into(),
            resolved_at: None,
            affected_trains: strings(&["44444", "55555"]),
            estimated_impact: "Single line working, 10-15 min delays".into(),
            actions: log_entries(&[
                ("Traffic diverted to parallel track", "2024-01-15T06:05:00Z", "Traffic Controller"),
                ("Speed restriction implemented", "2024-01-15T06:10:00Z", "Section Controller"),
            ]),
            updates: log_entries(&[
                ("50% work completed", "2024-01-15T10:00:00Z", "Maintenance Team"),
                ("Expected completion by 16:00", "2024-01-15T12:00:00Z", "Site Engineer"),
            ]),
        },
    ]
}
