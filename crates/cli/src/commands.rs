use std::sync::Arc;

use anyhow::Context;
use fyyur_bridge::{DeleteOutcome, Feedback, Flash, FormSubmissionBridge, SubmitEvent, VenueList};
use fyyur_client::{ClientConfig, VenueApi};
use fyyur_core::environment::Environment;
use fyyur_core::VenueId;

use crate::cli::CreateArgs;

/// Build the API client from the environment, with `base_url` taking
/// precedence over `FYYUR_API_URL` when given.
pub fn build_api(base_url: Option<&str>) -> anyhow::Result<Arc<VenueApi>> {
    let mut config = ClientConfig::from_env().context("loading client configuration")?;
    if let Some(url) = base_url {
        config = ClientConfig::new(url).with_timeout_secs(config.request_timeout_secs);
    }
    tracing::debug!(base_url = %config.base_url, "Using venue server");
    Ok(Arc::new(VenueApi::new(&config)?))
}

pub async fn create(api: Arc<VenueApi>, args: CreateArgs) -> anyhow::Result<()> {
    let feedback = Arc::new(Feedback::new());
    let bridge = FormSubmissionBridge::new(api, feedback.clone());

    let fields = args.into_fields();
    let mut event = SubmitEvent::new();
    let result = bridge.submit(&mut event, &fields).await;

    print_flashes(&feedback);
    result.context("venue was not created")
}

/// Click the delete control of every listed id at once.
pub async fn delete(api: Arc<VenueApi>, ids: &[String]) -> anyhow::Result<()> {
    let feedback = Arc::new(Feedback::new());
    let list = VenueList::new(api, feedback.clone());

    let ids = ids
        .iter()
        .map(|raw| VenueId::new(raw.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    for id in &ids {
        list.push(id.clone(), id.to_string());
    }

    let results = futures::future::join_all(ids.iter().map(|id| list.click_delete(id))).await;

    print_flashes(&feedback);

    let mut failed = 0usize;
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(DeleteOutcome::Removed) => {}
            Ok(outcome) => tracing::debug!(venue_id = %id, ?outcome, "Delete skipped"),
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} venue(s) could not be deleted", ids.len());
    }
    Ok(())
}

pub fn env() -> anyhow::Result<()> {
    let environment = Environment::from_env()?;
    println!("{}", serde_json::to_string_pretty(&environment)?);
    Ok(())
}

pub fn login_url() -> anyhow::Result<()> {
    let environment = Environment::from_env()?;
    println!("{}", environment.auth0.authorize_url());
    Ok(())
}

fn print_flashes(feedback: &Feedback) {
    for flash in feedback.drain() {
        match flash {
            Flash::Success(message) => println!("{message}"),
            Flash::Error(message) => eprintln!("{message}"),
        }
    }
}
