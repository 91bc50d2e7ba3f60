use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use interaction_core::{
    config::PageSettings, load_settings, load_settings_from, InputOutcome, InteractionController,
};
use shared::{
    domain::{DialogKind, DialogOutcome},
    protocol::UiInput,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; defaults to `page.toml` in the working directory if present.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed a JSON array of UI inputs through the page and print the final snapshot.
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long, value_enum, default_value_t = AutoDialog::Manual)]
        auto_dialog: AutoDialog,
    },
    /// Print the snapshot of a freshly loaded page.
    Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AutoDialog {
    /// Leave dialogs pending until the script resolves them.
    Manual,
    Accept,
    /// Dismiss confirms; alerts can only be accepted.
    Dismiss,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = resolve_settings(cli.settings.as_deref())?;

    match cli.command {
        Command::Replay {
            script,
            auto_dialog,
        } => {
            let inputs = read_script(&script).await?;
            let page = replay(settings, inputs, auto_dialog).await;
            print_snapshot(&page)?;
        }
        Command::Snapshot => {
            let page = InteractionController::with_recording_host(settings);
            print_snapshot(&page)?;
        }
    }

    Ok(())
}

fn resolve_settings(path: Option<&Path>) -> Result<PageSettings> {
    match path {
        Some(path) => load_settings_from(path),
        None => Ok(load_settings()),
    }
}

async fn read_script(path: &Path) -> Result<Vec<UiInput>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read script '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid script '{}'", path.display()))
}

/// Single-threaded event loop: each input is handled to completion before the
/// next one is taken off the queue.
async fn replay(
    settings: PageSettings,
    inputs: Vec<UiInput>,
    auto_dialog: AutoDialog,
) -> InteractionController {
    let mut page = InteractionController::with_recording_host(settings);
    let outcomes = page.subscribe_dialog_outcomes();
    let (tx, mut rx) = mpsc::unbounded_channel::<UiInput>();

    for input in inputs {
        if tx.send(input).is_err() {
            break;
        }
    }
    drop(tx);

    while let Some(input) = rx.recv().await {
        match page.dispatch(input) {
            InputOutcome::Handled(reaction) => debug!(?reaction, "input handled"),
            InputOutcome::Ignored => debug!("input ignored"),
            InputOutcome::Rejected(notice) => {
                warn!(code = ?notice.code, reason = %notice.message, "input rejected")
            }
        }
        auto_resolve(&mut page, auto_dialog);

        for resolution in outcomes.try_iter() {
            info!(
                handle = resolution.handle.0,
                kind = ?resolution.request.kind,
                outcome = ?resolution.outcome,
                "dialog resolved"
            );
        }
    }

    page
}

/// Queued dialogs surface one after another, so keep answering until none is pending.
fn auto_resolve(page: &mut InteractionController, auto_dialog: AutoDialog) {
    while let Some((handle, request)) = page.pending_dialog() {
        let outcome = match (auto_dialog, request.kind) {
            (AutoDialog::Manual, _) => return,
            (AutoDialog::Dismiss, DialogKind::Confirm) => DialogOutcome::Dismissed,
            (AutoDialog::Accept | AutoDialog::Dismiss, _) => DialogOutcome::Accepted,
        };
        if let InputOutcome::Rejected(notice) =
            page.dispatch(UiInput::ResolveDialog { handle, outcome })
        {
            warn!(reason = %notice.message, "automatic dialog resolution failed");
            return;
        }
    }
}

fn print_snapshot(page: &InteractionController) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&page.snapshot())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(target: &str) -> UiInput {
        UiInput::Click {
            target: target.into(),
        }
    }

    #[test]
    fn settings_flag_is_accepted_after_either_subcommand() {
        let cli = Cli::try_parse_from(["page_driver", "snapshot", "--settings", "x.toml"])
            .expect("snapshot args");
        assert_eq!(cli.settings, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Command::Snapshot));

        let cli = Cli::try_parse_from([
            "page_driver",
            "replay",
            "--script",
            "s.json",
            "--settings",
            "x.toml",
        ])
        .expect("replay args");
        assert_eq!(cli.settings, Some(PathBuf::from("x.toml")));
        let Command::Replay {
            script,
            auto_dialog,
        } = cli.command
        else {
            panic!("expected replay");
        };
        assert_eq!(script, PathBuf::from("s.json"));
        assert_eq!(auto_dialog, AutoDialog::Manual);

        let cli = Cli::try_parse_from(["page_driver", "--settings", "y.toml", "snapshot"])
            .expect("leading settings");
        assert_eq!(cli.settings, Some(PathBuf::from("y.toml")));
    }

    #[tokio::test]
    async fn replay_with_auto_dismiss_cancels_the_confirm() {
        let page = replay(
            PageSettings::default(),
            vec![click("#native-confirm")],
            AutoDialog::Dismiss,
        )
        .await;

        assert_eq!(page.page_message(), Some("User cancelled the confirmation."));
        assert!(page.pending_dialog().is_none());
    }

    #[tokio::test]
    async fn auto_dismiss_still_accepts_alerts() {
        let page = replay(
            PageSettings::default(),
            vec![click("#native-alert")],
            AutoDialog::Dismiss,
        )
        .await;

        assert!(page.pending_dialog().is_none());
        assert!(page.last_notice().is_none());
    }

    #[tokio::test]
    async fn manual_mode_leaves_dialogs_pending() {
        let page = replay(
            PageSettings::default(),
            vec![click("#native-alert"), click("#btn-hover")],
            AutoDialog::Manual,
        )
        .await;

        assert!(page.pending_dialog().is_some());
    }

    #[tokio::test]
    async fn bundled_script_parses_and_registers() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts/usability.json");
        let inputs = read_script(&path).await.expect("script");
        let page = replay(PageSettings::default(), inputs, AutoDialog::Dismiss).await;

        let snapshot = page.snapshot();
        assert_eq!(snapshot.form.message.as_deref(), Some("Thanks John Doe"));
        assert!(snapshot.drop_zone.label.contains("Item: card"));
        assert_eq!(snapshot.hover_label, "Pointer Detected");
    }
}
