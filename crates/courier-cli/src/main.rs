use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use courier_core::domain::{
    ActivateEvent, EventKind, EventOutcome, HostEvent, InstallEvent, NotificationClickEvent,
    NotificationRecord, ProgressState, PushEvent,
};
use courier_core::impls::InMemoryHost;
use courier_core::{Agent, AgentBuilder, CourierConfig, ProgressIndicator};

/// Hosts the notification agent against in-memory adapters and replays a
/// script of push / click / navigation steps.
#[derive(Debug, Parser)]
#[command(name = "courier", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of steps; a built-in demo runs when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Stale cache names present before activation.
    #[arg(long = "stale-cache", default_value = "courier-v0")]
    stale_caches: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Step {
    /// Push with a JSON payload.
    Push(serde_json::Value),
    /// Push with raw text (or none), for malformed payloads.
    PushRaw(Option<String>),
    /// Click the n-th notification shown so far.
    Click(usize),
    OpenWindow(String),
    CloseWindows,
    /// Route transition taking this many milliseconds.
    NavigateMs(u64),
}

fn demo_script() -> Vec<Step> {
    vec![
        Step::Push(serde_json::json!({
            "title": "New message",
            "body": "Ana: are you joining the study group?",
            "type": "chat",
            "data": { "chatId": "room-17" }
        })),
        Step::Click(0),
        Step::Push(serde_json::json!({
            "title": "Exam scheduled",
            "body": "Linear Algebra, Friday 10:00",
            "type": "calendar",
            "data": { "calendarId": "exam-42" }
        })),
        Step::Click(1),
        Step::NavigateMs(400),
    ]
}

fn load_script(path: &Path) -> anyhow::Result<Vec<Step>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing script {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CourierConfig::load(path)?,
        None => CourierConfig::default(),
    };
    let steps = match &cli.script {
        Some(path) => load_script(path)?,
        None => demo_script(),
    };

    let host = InMemoryHost::new();
    for name in &cli.stale_caches {
        host.caches.insert(name);
    }
    host.caches.insert(&config.agent.cache_name);

    let agent = AgentBuilder::new()
        .with_default_handlers(host.ports(), &config.agent)?
        .expect_events(&EventKind::ALL)
        .build()?;
    let progress = ProgressIndicator::new(config.progress.clone())?;

    report(agent.handle(HostEvent::Install(InstallEvent)).await?);
    report(agent.handle(HostEvent::Activate(ActivateEvent)).await?);

    let mut shown: Vec<NotificationRecord> = Vec::new();
    for step in steps {
        run_step(&agent, &host, &progress, &mut shown, step).await?;
    }

    tracing::info!(calls = host.journal.calls().len(), "done");
    Ok(())
}

async fn run_step(
    agent: &Agent,
    host: &InMemoryHost,
    progress: &ProgressIndicator,
    shown: &mut Vec<NotificationRecord>,
    step: Step,
) -> anyhow::Result<()> {
    match step {
        Step::Push(payload) => {
            let event = PushEvent::new(payload.to_string());
            push(agent, shown, event).await?;
        }
        Step::PushRaw(text) => {
            push(agent, shown, PushEvent { text }).await?;
        }
        Step::Click(index) => {
            let Some(record) = shown.get(index).cloned() else {
                bail!("click({index}): only {} notifications shown", shown.len());
            };
            let event = HostEvent::NotificationClick(NotificationClickEvent::new(record));
            report(agent.dispatch(event)?.settled().await?);
        }
        Step::OpenWindow(url) => {
            let window = host.windows.add_window(&url);
            tracing::info!(window = %window.id, %url, "window opened by user");
        }
        Step::CloseWindows => {
            host.windows.close_all();
            tracing::info!("all windows closed");
        }
        Step::NavigateMs(ms) => navigate(progress, Duration::from_millis(ms)).await?,
    }
    Ok(())
}

async fn push(agent: &Agent, shown: &mut Vec<NotificationRecord>, event: PushEvent) -> anyhow::Result<()> {
    let outcome = agent.handle(HostEvent::Push(event)).await?;
    if let EventOutcome::NotificationShown(record) = &outcome {
        shown.push(record.clone());
    }
    report(outcome);
    Ok(())
}

async fn navigate(progress: &ProgressIndicator, duration: Duration) -> anyhow::Result<()> {
    let mut rx = progress.subscribe();
    let renderer = tokio::spawn({
        let mut rx = progress.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let state = *rx.borrow_and_update();
                render(state);
            }
        }
    });

    progress.track(tokio::time::sleep(duration)).await;
    rx.wait_for(|state| !state.is_loading)
        .await
        .context("progress indicator dropped")?;

    renderer.abort();
    eprintln!();
    tracing::info!(?duration, "navigation finished");
    Ok(())
}

fn render(state: ProgressState) {
    const WIDTH: usize = 40;
    let filled = (((state.current / 100.0) * WIDTH as f64).round() as usize).min(WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), " ".repeat(WIDTH - filled));
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "\r[{bar}] {:5.1}%", state.current);
    let _ = stderr.flush();
}

fn report(outcome: EventOutcome) {
    match outcome {
        EventOutcome::Installed => tracing::info!("agent installed"),
        EventOutcome::Activated { purged } => tracing::info!(?purged, "agent activated"),
        EventOutcome::NotificationShown(record) => tracing::info!(
            notification = %record.id,
            title = record.title.as_deref().unwrap_or(""),
            body = record.body.as_deref().unwrap_or(""),
            "notification shown"
        ),
        EventOutcome::Focused(window) => {
            tracing::info!(window = %window.id, url = %window.url, "focused window")
        }
        EventOutcome::Opened { url, window } => tracing::info!(
            %url,
            window = ?window.map(|w| w.id.to_string()),
            "opened window"
        ),
    }
}
