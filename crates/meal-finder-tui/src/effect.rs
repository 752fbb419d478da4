/// Effect system for Redux architecture
/// Reducers return (State, Vec<Effect>) where Effects describe side effects to perform
/// The update() function executes these effects
use anyhow::Result;
use log::debug;

use crate::{App, actions::Action, task::BackgroundTask};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone)]
pub enum Effect {
    /// Trigger the one-shot background fetch of the meal listing
    FetchMeals,

    /// Hand the current raw query to the debouncer, superseding any pending
    /// emission
    Debounce { query: String },

    /// Dispatch another action (for chaining)
    DispatchAction(Action),

    /// Batch multiple effects
    Batch(Vec<Effect>),

    /// No effect
    None,
}

/// Execute an effect and return follow-up actions to dispatch
/// This maintains clean architecture by avoiding direct action dispatching from effects
pub fn execute_effect(app: &mut App, effect: Effect) -> Result<Vec<Action>> {
    let mut follow_up_actions = Vec::new();

    match effect {
        Effect::None => {}

        Effect::FetchMeals => {
            follow_up_actions.push(Action::SetLoadingState(crate::state::LoadingState::Loading));
            let _ = app.task_tx.send(BackgroundTask::FetchMeals {
                client: app.client.clone(),
            });
        }

        Effect::Debounce { query } => {
            debug!("Scheduling debounce for query {:?}", query);
            app.debouncer.submit(query);
        }

        Effect::DispatchAction(action) => {
            follow_up_actions.push(action);
        }

        Effect::Batch(effects) => {
            for effect in effects {
                let actions = execute_effect(app, effect)?;
                follow_up_actions.extend(actions);
            }
        }
    }

    Ok(follow_up_actions)
}
