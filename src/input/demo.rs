use crate::input::fixture::parse_fixture;
use crate::input::{InputError, LoadedRuns};

#[derive(Debug, Clone, Copy)]
pub struct DemoScenario {
    pub id: &'static str,
    pub name: &'static str,
    source: &'static str,
}

const SCENARIOS: &[DemoScenario] = &[
    DemoScenario {
        id: "cloud-migration",
        name: "Cloud Migration ROI",
        source: include_str!("../../fixtures/cloud_migration.json"),
    },
    DemoScenario {
        id: "warehouse-automation",
        name: "Warehouse Automation",
        source: include_str!("../../fixtures/warehouse_automation.json"),
    },
    DemoScenario {
        id: "ai-chatbot",
        name: "AI Customer Service Chatbot",
        source: include_str!("../../fixtures/ai_chatbot.json"),
    },
];

pub const DEFAULT_SCENARIO: &str = "cloud-migration";

pub fn builtin_scenarios() -> &'static [DemoScenario] {
    SCENARIOS
}

/// Matches on id or display name, case-insensitively.
pub fn find_scenario(key: &str) -> Option<&'static DemoScenario> {
    SCENARIOS
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(key) || s.name.eq_ignore_ascii_case(key))
}

pub fn load_demo(key: &str) -> Result<LoadedRuns, InputError> {
    let scenario = find_scenario(key).ok_or_else(|| InputError::UnknownScenario {
        requested: key.to_string(),
        known: SCENARIOS
            .iter()
            .map(|s| s.id)
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    let mut loaded = parse_fixture(scenario.source, &format!("builtin:{}", scenario.id))?;
    if loaded.scenario.is_none() {
        loaded.scenario = Some(scenario.name.to_string());
    }
    Ok(loaded)
}
