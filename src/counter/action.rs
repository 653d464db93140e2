//! Actions for the toggle/counter screen.

use serde::{Deserialize, Serialize};

use crate::store::{Action, INIT_ACTION_TYPE};

pub const TOGGLE_SWITCH: &str = "TOGGLE_SWITCH";
pub const INCREASE: &str = "INCREASE";
pub const DECREASE: &str = "DECREASE";

/// Actions that can be dispatched to the counter reducer.
///
/// Serialized with the discriminant in a `"type"` field, e.g.
/// `{"type":"INCREASE","difference":5}`. Any discriminant not listed here
/// decodes as [`CounterAction::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CounterAction {
    /// Flip the switch.
    #[serde(rename = "TOGGLE_SWITCH")]
    ToggleSwitch,

    /// Add `difference` to the counter.
    #[serde(rename = "INCREASE")]
    Increase { difference: i64 },

    /// Subtract one from the counter.
    #[serde(rename = "DECREASE")]
    Decrease,

    /// Dispatched by the store on construction.
    #[serde(rename = "@@unistate/INIT")]
    Init,

    #[serde(other)]
    Unknown,
}

impl Action for CounterAction {
    fn action_type(&self) -> &str {
        match self {
            CounterAction::ToggleSwitch => TOGGLE_SWITCH,
            CounterAction::Increase { .. } => INCREASE,
            CounterAction::Decrease => DECREASE,
            CounterAction::Init => INIT_ACTION_TYPE,
            CounterAction::Unknown => "UNKNOWN",
        }
    }

    fn init() -> Self {
        CounterAction::Init
    }
}

pub fn toggle_switch() -> CounterAction {
    CounterAction::ToggleSwitch
}

pub fn increase(difference: i64) -> CounterAction {
    CounterAction::Increase { difference }
}

pub fn decrease() -> CounterAction {
    CounterAction::Decrease
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn factories_carry_their_discriminant() {
        assert_eq!(toggle_switch().action_type(), TOGGLE_SWITCH);
        assert_eq!(increase(3).action_type(), INCREASE);
        assert_eq!(decrease().action_type(), DECREASE);
        assert_eq!(CounterAction::init().action_type(), INIT_ACTION_TYPE);
    }

    #[test]
    fn increase_serializes_with_type_field() {
        let value = serde_json::to_value(increase(5)).unwrap();
        assert_eq!(value, json!({"type": "INCREASE", "difference": 5}));
    }

    #[test]
    fn decodes_known_types() {
        let action: CounterAction = serde_json::from_value(json!({"type": "DECREASE"})).unwrap();
        assert_eq!(action, decrease());

        let action: CounterAction =
            serde_json::from_value(json!({"type": "INCREASE", "difference": -2})).unwrap();
        assert_eq!(action, increase(-2));
    }

    #[test]
    fn unlisted_type_decodes_as_unknown() {
        let action: CounterAction = serde_json::from_value(json!({"type": "RESET"})).unwrap();
        assert_eq!(action, CounterAction::Unknown);
    }

    #[test]
    fn increase_without_difference_is_rejected() {
        let result = serde_json::from_value::<CounterAction>(json!({"type": "INCREASE"}));
        assert!(result.is_err());
    }
}
