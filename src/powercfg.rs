//! Power-plan discovery and activation via the powercfg tool
//!
//! All three subcommands run as blocking child processes on the UI
//! thread. Query output is parsed from stdout without consulting the
//! exit status; only `/setactive` treats a nonzero exit as failure.
//! Plan lines are localized by the console (`Power Scheme GUID:` /
//! `電源設定の GUID:`), so recognition keys on the `GUID` substring
//! rather than any full prefix.

use std::process::Command;
use tracing::debug;

use crate::constants::powercfg::{ACTIVE_MARKER, GET_ACTIVE, GUID_MARKER, LIST, PROGRAM, SET_ACTIVE};
use crate::error::{ApplyError, EnumerationError};

/// One installed power plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerPlan {
    /// Display name as printed by the console (localized)
    pub name: String,

    /// Stable GUID-like identifier
    pub guid: String,
}

/// Access to the host's power-plan facility
pub trait PowerTool {
    /// Enumerate installed plans, sorted by name then identifier
    fn list_plans(&self) -> Result<Vec<PowerPlan>, EnumerationError>;

    /// Identifier of the plan active right now
    fn active_plan_guid(&self) -> Result<String, EnumerationError>;

    /// Make the plan with this identifier active
    fn set_active(&self, guid: &str) -> Result<(), ApplyError>;
}

/// The real powercfg-backed implementation
#[derive(Debug, Default)]
pub struct Powercfg;

impl Powercfg {
    pub fn new() -> Self {
        Self
    }

    fn run_query(&self, subcommand: &str) -> Result<String, EnumerationError> {
        let output = Command::new(PROGRAM).arg(subcommand).output().map_err(|source| {
            EnumerationError::Launch {
                command: format!("{PROGRAM} {subcommand}"),
                source,
            }
        })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PowerTool for Powercfg {
    fn list_plans(&self) -> Result<Vec<PowerPlan>, EnumerationError> {
        let stdout = self.run_query(LIST)?;
        Ok(parse_plan_list(&stdout))
    }

    fn active_plan_guid(&self) -> Result<String, EnumerationError> {
        let stdout = self.run_query(GET_ACTIVE)?;
        parse_active_guid(&stdout).ok_or_else(|| EnumerationError::UnparseableOutput {
            command: format!("{PROGRAM} {GET_ACTIVE}"),
            output: stdout,
        })
    }

    fn set_active(&self, guid: &str) -> Result<(), ApplyError> {
        let output = Command::new(PROGRAM)
            .arg(SET_ACTIVE)
            .arg(guid)
            .output()
            .map_err(|source| ApplyError::Launch {
                command: format!("{PROGRAM} {SET_ACTIVE} {guid}"),
                source,
            })?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };
        Err(ApplyError::Rejected {
            guid: guid.to_string(),
            diagnostic,
        })
    }
}

/// Parse `/list` output into plans sorted by name (identifier breaks ties).
/// Malformed lines are skipped, never fatal.
pub fn parse_plan_list(output: &str) -> Vec<PowerPlan> {
    let mut plans: Vec<PowerPlan> = output.lines().filter_map(parse_plan_line).collect();
    plans.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.guid.cmp(&b.guid)));
    for plan in &plans {
        debug!(name = %plan.name, guid = %plan.guid, "Discovered power plan");
    }
    plans
}

/// Parse a single plan line: identifier after the first colon, name from
/// the trailing parenthetical with the active marker stripped.
fn parse_plan_line(line: &str) -> Option<PowerPlan> {
    if !line.contains(GUID_MARKER) {
        return None;
    }
    let (head, tail) = line.split_once(" (")?;
    let guid = head.split_once(':')?.1.trim();
    let name: String = tail
        .chars()
        .filter(|&c| c != ')' && c != ACTIVE_MARKER)
        .collect();
    let name = name.trim();
    if guid.is_empty() || name.is_empty() {
        return None;
    }
    Some(PowerPlan {
        name: name.to_string(),
        guid: guid.to_string(),
    })
}

/// Extract the active plan identifier from `/getactivescheme` output:
/// the first whitespace-delimited token after the first colon.
pub fn parse_active_guid(output: &str) -> Option<String> {
    let (_, rest) = output.split_once(':')?;
    rest.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_line_japanese_console() {
        let plans = parse_plan_list(
            "電源設定の GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (バランス)\n",
        );
        assert_eq!(
            plans,
            vec![PowerPlan {
                name: "バランス".to_string(),
                guid: "381b4222-f694-41f0-9685-ff5bb260df2e".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_plan_line_strips_active_marker() {
        let plans = parse_plan_list(
            "Power Scheme GUID: 8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c  (High performance) *\n",
        );
        assert_eq!(plans[0].name, "High performance");
        assert_eq!(plans[0].guid, "8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c");
    }

    #[test]
    fn test_parse_plan_list_sorted_by_name() {
        let output = "\
Power Scheme GUID: 8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c  (High performance)
Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced) *
Power Scheme GUID: a1841308-3541-4fab-bc81-f71556f20b4a  (Power saver)
";
        let plans = parse_plan_list(output);
        let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Balanced", "High performance", "Power saver"]);
    }

    #[test]
    fn test_parse_plan_list_identifier_breaks_name_ties() {
        let output = "\
Power Scheme GUID: bbbbbbbb-0000-0000-0000-000000000000  (Custom)
Power Scheme GUID: aaaaaaaa-0000-0000-0000-000000000000  (Custom)
";
        let plans = parse_plan_list(output);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].guid, "aaaaaaaa-0000-0000-0000-000000000000");
        assert_eq!(plans[1].guid, "bbbbbbbb-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_parse_plan_list_skips_malformed_lines() {
        let output = "\
Existing Power Schemes (* Active)
-----------------------------------
Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)
Power Scheme GUID:   (missing identifier)
Power Scheme GUID: 11111111-0000-0000-0000-000000000000
no marker on this line at all
";
        let plans = parse_plan_list(output);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "Balanced");
    }

    #[test]
    fn test_parse_active_guid() {
        let output = "電源設定の GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (バランス)\n";
        assert_eq!(
            parse_active_guid(output).as_deref(),
            Some("381b4222-f694-41f0-9685-ff5bb260df2e")
        );
    }

    #[test]
    fn test_parse_active_guid_takes_first_token_after_colon() {
        let output = "Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)";
        assert_eq!(
            parse_active_guid(output).as_deref(),
            Some("381b4222-f694-41f0-9685-ff5bb260df2e")
        );
    }

    #[test]
    fn test_parse_active_guid_unparseable_output() {
        assert_eq!(parse_active_guid(""), None);
        assert_eq!(parse_active_guid("no colon anywhere"), None);
        assert_eq!(parse_active_guid("trailing colon only:"), None);
    }
}
