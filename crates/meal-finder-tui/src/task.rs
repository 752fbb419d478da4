/// Background task system for the network fetch, keeping the UI loop free
use log::{debug, error};
use mealdb_client::{ClientError, Meal, MealDbClient};
use tokio::sync::mpsc;

/// Fixed user-facing message for any fetch failure. The underlying error
/// detail goes to the log only.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch meals";

/// Results from background task execution
/// These are sent back to the main loop and converted to Actions
#[derive(Debug)]
pub enum TaskResult {
    /// The one-shot listing fetch finished
    MealsFetched(Result<Vec<Meal>, String>),
}

/// Background tasks that can be executed asynchronously
#[derive(Debug)]
pub enum BackgroundTask {
    /// Fetch the meal listing (issued exactly once, at bootstrap)
    FetchMeals { client: MealDbClient },
}

/// Background task worker that processes the fetch without blocking the UI.
/// Aborting the returned handle on shutdown also cancels any in-flight
/// request, so a late response can never touch state after teardown.
pub fn start_task_worker(
    mut task_rx: mpsc::UnboundedReceiver<BackgroundTask>,
    result_tx: mpsc::UnboundedSender<TaskResult>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(task) = task_rx.recv().await {
            process_task(task, &result_tx).await;
        }
    })
}

async fn process_task(task: BackgroundTask, result_tx: &mpsc::UnboundedSender<TaskResult>) {
    match task {
        BackgroundTask::FetchMeals { client } => {
            debug!("Fetching meal listing...");
            let result = to_user_result(client.fetch_meals().await);

            match &result {
                Ok(meals) => debug!("Loaded {} meals", meals.len()),
                Err(msg) => debug!("Fetch failed, reporting '{}'", msg),
            }

            let _ = result_tx.send(TaskResult::MealsFetched(result));
        }
    }
}

/// Collapse any client error into the fixed user-facing message, logging the
/// detail for the debug console.
fn to_user_result(result: Result<Vec<Meal>, ClientError>) -> Result<Vec<Meal>, String> {
    result.map_err(|err| {
        error!("Fetching meal listing failed: {err}");
        FETCH_ERROR_MESSAGE.to_string()
    })
}
