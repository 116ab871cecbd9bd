//! Hook runner implementation.
//!
//! One linear pass per invocation:
//! arguments → trigger notice → normalize → classify → move → completion.
//! Every step is written to the hook log and mirrored to `tracing`.

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::classify::{plan, ClassifyError, SeriesMatcher};
use crate::config::{Config, PathsConfig, StripMode};
use crate::hooklog::{HookEvent, HookLog};
use crate::placer::{PlacementJob, Placer};

use super::types::{HookOutcome, Invocation};

/// Runs the post-download hook against a placer and a hook log.
pub struct HookRunner<P: Placer, L: HookLog> {
    paths: PathsConfig,
    strip_mode: StripMode,
    matcher: SeriesMatcher,
    placer: P,
    log: L,
}

impl<P: Placer, L: HookLog> HookRunner<P, L> {
    /// Creates a runner from the loaded configuration.
    pub fn new(config: &Config, placer: P, log: L) -> Result<Self, ClassifyError> {
        let matcher = SeriesMatcher::from_config(&config.classify)?;
        Ok(Self::with_matcher(
            config.paths.clone(),
            config.classify.strip_mode,
            matcher,
            placer,
            log,
        ))
    }

    pub fn with_matcher(
        paths: PathsConfig,
        strip_mode: StripMode,
        matcher: SeriesMatcher,
        placer: P,
        log: L,
    ) -> Self {
        Self {
            paths,
            strip_mode,
            matcher,
            placer,
            log,
        }
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Runs the hook for the given process arguments (`args[0]` is the
    /// program name).
    ///
    /// Never fails: every problem ends up in the hook log and in the outcome.
    pub async fn run(&self, args: &[String]) -> HookOutcome {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("hook", run_id = %run_id);
        self.run_inner(args, run_id).instrument(span).await
    }

    async fn run_inner(&self, args: &[String], run_id: String) -> HookOutcome {
        let invocation = match Invocation::from_args(args) {
            Ok(invocation) => invocation,
            Err(e) => {
                debug!("Rejecting invocation: {}", e);
                self.record(HookEvent::NotEnoughArguments {
                    args: args.to_vec(),
                });
                self.record(HookEvent::Separator);
                return HookOutcome::InsufficientArguments;
            }
        };

        self.record(HookEvent::Separator);
        self.record(HookEvent::Triggered);
        self.record(HookEvent::ContentPath {
            path: invocation.content_path.clone(),
        });
        self.record(HookEvent::TorrentName {
            name: invocation.torrent_name.clone(),
        });

        let decision = plan(
            &invocation.content_path,
            &self.paths,
            self.strip_mode,
            &self.matcher,
        );
        self.record(HookEvent::Stripped {
            file_name: decision.stripped.clone(),
        });
        if let Some(indicator) = self.matcher.matched_by(&decision.file_name) {
            debug!("Series indicator {:?} matched {}", indicator, decision.file_name);
        }
        self.record(HookEvent::Detected {
            kind: decision.kind,
            file_name: decision.file_name.clone(),
            destination: decision.destination.clone(),
        });

        let job = PlacementJob::new(
            run_id,
            &invocation.content_path,
            &decision.destination,
        );
        let outcome = match self.placer.place(job).await {
            Ok(placed) => {
                self.record(HookEvent::Moved {
                    destination: decision.destination.clone(),
                    method: placed.method,
                });
                HookOutcome::Moved { decision, placed }
            }
            Err(e) => {
                let kind = e.kind();
                self.record(HookEvent::MoveFailed {
                    destination: decision.destination.clone(),
                    kind,
                    reason: e.to_string(),
                });
                HookOutcome::MoveFailed { decision, kind }
            }
        };

        self.record(HookEvent::Completed);
        self.record(HookEvent::Separator);
        outcome
    }

    fn record(&self, event: HookEvent) {
        if event.is_failure() {
            warn!("{}", event);
        } else {
            info!("{}", event);
        }
        self.log.record(&event);
    }
}
