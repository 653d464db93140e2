//! Headless `apply` command: the command-line input and print collaborators.

use std::io::{self, Write};
use std::num::ParseIntError;
use std::sync::{Arc, Weak};

use anyhow::Context;
use parking_lot::Mutex;
use serde_json::{json, Value};
use thiserror::Error;

use crate::counter::{CounterState, CounterStore, DECREASE, INCREASE, TOGGLE_SWITCH};
use crate::store::ACTION_TYPE_FIELD;

/// Errors turning a command-line word into an action object.
#[derive(Debug, Error)]
pub enum ActionParseError {
    #[error("Unknown action '{0}' (expected toggle, inc, inc:N, dec or a JSON object)")]
    UnknownWord(String),

    #[error("Invalid difference in '{word}': {source}")]
    BadDifference {
        word: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid JSON action '{word}': {source}")]
    Json {
        word: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Translate one command-line word into an untyped action object.
///
/// JSON objects are passed through as-is so the store can validate them;
/// shorthand words map to the action factories' serialized form.
pub fn parse_action(word: &str, increase_step: i64) -> Result<Value, ActionParseError> {
    let trimmed = word.trim();
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).map_err(|source| ActionParseError::Json {
            word: word.to_string(),
            source,
        });
    }

    let (name, argument) = match trimmed.split_once(':') {
        Some((name, argument)) => (name, Some(argument)),
        None => (trimmed, None),
    };

    match (name.to_ascii_lowercase().as_str(), argument) {
        ("toggle", None) => Ok(json!({ ACTION_TYPE_FIELD: TOGGLE_SWITCH })),
        ("dec" | "decrease", None) => Ok(json!({ ACTION_TYPE_FIELD: DECREASE })),
        ("inc" | "increase", None) => Ok(increase_value(increase_step)),
        ("inc" | "increase", Some(argument)) => {
            let difference =
                argument
                    .trim()
                    .parse::<i64>()
                    .map_err(|source| ActionParseError::BadDifference {
                        word: word.to_string(),
                        source,
                    })?;
            Ok(increase_value(difference))
        }
        _ => Err(ActionParseError::UnknownWord(word.to_string())),
    }
}

fn increase_value(difference: i64) -> Value {
    json!({ ACTION_TYPE_FIELD: INCREASE, "difference": difference })
}

/// Write one state as a single JSON line.
pub fn print_state<W: Write>(out: &mut W, state: &CounterState) -> io::Result<()> {
    serde_json::to_writer(&mut *out, state)?;
    writeln!(out)
}

/// Dispatch every word in order, printing state as it changes.
///
/// Without `quiet`, the initial state and the state after each dispatch are
/// printed by a store observer. With `quiet`, only the final state is
/// printed. Stops at the first action that fails.
pub fn run_apply<W: Write>(
    store: &Arc<CounterStore>,
    words: &[String],
    increase_step: i64,
    quiet: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let rendered: Arc<Mutex<Vec<Arc<CounterState>>>> = Arc::new(Mutex::new(Vec::new()));

    let subscription = if quiet {
        None
    } else {
        print_state(out, &store.get_state())?;
        let weak: Weak<CounterStore> = Arc::downgrade(store);
        let sink = Arc::clone(&rendered);
        Some(store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                sink.lock().push(store.get_state());
            }
        }))
    };

    let result = dispatch_all(store, words, increase_step, &rendered, out);

    if let Some(subscription) = subscription {
        subscription.unsubscribe();
    }
    result?;

    if quiet {
        print_state(out, &store.get_state())?;
    }
    out.flush()?;
    Ok(())
}

fn dispatch_all<W: Write>(
    store: &CounterStore,
    words: &[String],
    increase_step: i64,
    rendered: &Mutex<Vec<Arc<CounterState>>>,
    out: &mut W,
) -> anyhow::Result<()> {
    for word in words {
        let value = parse_action(word, increase_step)?;
        let action = store
            .dispatch_value(value)
            .inspect_err(|err| tracing::warn!(action = %word, error = %err, "Rejected action"))
            .with_context(|| format!("Failed to dispatch '{}'", word))?;
        tracing::debug!(?action, "Dispatched action");

        let states: Vec<_> = rendered.lock().drain(..).collect();
        for state in states {
            print_state(out, &state)?;
        }
    }
    Ok(())
}
