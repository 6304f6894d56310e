//! Load driver — runs each issued load as a background task.
//!
//! Every [`Loader::spawn`] reads and decodes one file on its own tokio task,
//! collected in a [`JoinSet`] that yields each [`LoadOutcome`]. Outcomes
//! arrive in completion order, which need not be issue order; the
//! controller's ticket sequencing sorts that out on [`Loader::drain_into`].

use crate::controller::{Applied, Controller, LoadOutcome, LoadTicket, Payload};
use std::path::PathBuf;
use stormtrack_core::config::Config;
use stormtrack_sources::{fetch, landfall_adapter_for, SourceAdapter, SourceError, TrackJson};
use tokio::task::JoinSet;

#[derive(Default)]
pub struct Loader {
    tasks: JoinSet<LoadOutcome>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `path` with `adapter` for `ticket`.
    ///
    /// Every spawned load yields exactly one outcome. A decoder that panics
    /// answers its ticket with [`SourceError::Task`].
    pub fn spawn<A>(&mut self, ticket: LoadTicket, adapter: A, path: PathBuf)
    where
        A: SourceAdapter + 'static,
        A::Output: Into<Payload>,
    {
        let load = tokio::spawn(async move {
            let result = fetch::load(&adapter, &path).await;
            if let Err(err) = &result {
                tracing::debug!(seq = ticket.seq(), path = %path.display(), error = %err, "load task failed");
            }
            LoadOutcome::new(ticket, result)
        });
        self.tasks.spawn(async move {
            load.await.unwrap_or_else(|err| {
                tracing::error!(seq = ticket.seq(), error = %err, "load task died");
                LoadOutcome::new(
                    ticket,
                    Err::<Payload, _>(SourceError::Task { reason: err.to_string() }),
                )
            })
        });
    }

    /// Number of spawned loads whose outcome has not been received.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the next outcome, in completion order. `None` once nothing
    /// is in flight.
    pub async fn next(&mut self) -> Option<LoadOutcome> {
        loop {
            match self.tasks.join_next().await? {
                Ok(outcome) => return Some(outcome),
                // Only reachable when the runtime is shutting down.
                Err(err) => tracing::warn!(error = %err, "load lost during shutdown"),
            }
        }
    }

    /// Apply every outstanding outcome to `controller` as it completes.
    pub async fn drain_into(&mut self, controller: &mut Controller) -> Vec<Applied> {
        let mut applied = Vec::with_capacity(self.in_flight());
        while let Some(outcome) = self.next().await {
            applied.push(controller.apply(outcome));
        }
        applied
    }
}

/// Issue the startup loads (tracks plus the configured landfall variant)
/// and apply them.
pub async fn load_all(controller: &mut Controller, config: &Config) -> Vec<Applied> {
    load_startup(controller, config, None).await
}

/// Startup loads for viewing a single year, which is then selected.
///
/// A tabular landfall file is filtered to `year` while it is read, so the
/// store and year index only hold that year. JSON landfall files are loaded
/// whole.
pub async fn load_year(controller: &mut Controller, config: &Config, year: &str) -> Vec<Applied> {
    let applied = load_startup(controller, config, Some(year)).await;
    controller.select_year(year);
    applied
}

async fn load_startup(controller: &mut Controller, config: &Config, year: Option<&str>) -> Vec<Applied> {
    let mut loader = Loader::new();

    let ticket = controller.begin_track_load();
    loader.spawn(ticket, TrackJson, config.sources.tracks.clone());

    let variant = controller.variant();
    let path = config.sources.landfalls(variant).to_path_buf();
    let adapter = landfall_adapter_for(&path, year);
    tracing::debug!(source = adapter.name(), year = ?year, path = %path.display(), "loading landfalls");
    let ticket = controller.begin_landfall_load(variant);
    loader.spawn(ticket, adapter, path);

    loader.drain_into(controller).await
}

/// Switch landfall variant and wait for the new snapshot.
pub async fn toggle_variant(controller: &mut Controller, config: &Config) -> Applied {
    let ticket = controller.toggle_variant();
    let Some(variant) = ticket.variant() else {
        return Applied::Failed;
    };
    let path = config.sources.landfalls(variant).to_path_buf();

    let mut loader = Loader::new();
    loader.spawn(ticket, landfall_adapter_for(&path, None), path);
    loader
        .drain_into(controller)
        .await
        .pop()
        .unwrap_or(Applied::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use stormtrack_core::{LandfallEvent, SourceVariant};
    use stormtrack_sources::LandfallJson;

    const LANDFALLS: &str = r#"[
        {"Year": "2004", "Hurricane": "CHARLEY", "Date": "20040813", "Time": "1945",
         "Latitude": 26.6, "Longitude": -82.2, "Max Wind Speed (knots)": 130},
        {"Year": "1992", "Hurricane": "ANDREW", "Date": "19920824", "Time": "0905",
         "Latitude": 25.5, "Longitude": -80.3, "Max Wind Speed (knots)": 145}
    ]"#;

    #[tokio::test]
    async fn spawned_load_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landfalls.json");
        std::fs::write(&path, LANDFALLS).unwrap();

        let mut controller = Controller::new(&Config::defaults());
        let mut loader = Loader::new();
        let ticket = controller.begin_landfall_load(SourceVariant::UsingIndicator);
        loader.spawn(ticket, LandfallJson, path);
        assert_eq!(loader.in_flight(), 1);

        let applied = loader.drain_into(&mut controller).await;
        assert_eq!(applied, vec![Applied::Landfalls { events: 2, years: 2 }]);
        assert_eq!(controller.years(), ["2004", "1992"]);
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn missing_file_fails_without_clearing() {
        let mut controller = Controller::new(&Config::defaults());
        let mut loader = Loader::new();
        let ticket = controller.begin_track_load();
        loader.spawn(ticket, TrackJson, PathBuf::from("/no/such/tracks.json"));

        let applied = loader.drain_into(&mut controller).await;
        assert_eq!(applied, vec![Applied::Failed]);
        assert!(controller.tracks().is_empty());
    }

    /// Stands in for a decoder with a bug.
    struct Panicking;

    impl SourceAdapter for Panicking {
        type Output = Vec<LandfallEvent>;

        fn name(&self) -> &'static str {
            "panicking"
        }

        fn decode(&self, _payload: &[u8]) -> stormtrack_sources::Result<Vec<LandfallEvent>> {
            panic!("decoder bug");
        }
    }

    #[tokio::test]
    async fn panicking_decoder_fails_its_ticket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landfalls.json");
        std::fs::write(&path, LANDFALLS).unwrap();

        let mut controller = Controller::new(&Config::defaults());
        let mut loader = Loader::new();
        let ticket = controller.begin_landfall_load(SourceVariant::UsingIndicator);
        loader.spawn(ticket, Panicking, path);

        let applied = tokio::time::timeout(Duration::from_secs(5), loader.drain_into(&mut controller))
            .await
            .expect("drain must finish after a panic");
        assert_eq!(applied, vec![Applied::Failed]);
        assert!(!controller.is_loading());
        assert_eq!(loader.in_flight(), 0);
        assert!(loader.next().await.is_none());
    }

    #[tokio::test]
    async fn panicking_outcome_carries_task_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landfalls.json");
        std::fs::write(&path, LANDFALLS).unwrap();

        let mut loader = Loader::new();
        let ticket = LoadTicket::Landfalls { seq: 7, variant: SourceVariant::UsingIndicator };
        loader.spawn(ticket, Panicking, path);

        let outcome = loader.next().await.unwrap();
        assert_eq!(outcome.ticket, ticket);
        assert!(matches!(outcome.result, Err(SourceError::Task { .. })));
    }
}
