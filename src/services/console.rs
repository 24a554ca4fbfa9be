use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::info;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::session::{LookupOutcome, Session, SessionEvent};
use crate::api::models::StatsResponse;
use crate::config::AppConfig;
use crate::http::ReqwestTransport;
use crate::report;

/// One-shot lookup printed to stdout
pub struct StatsService {
    config: AppConfig,
    json: bool,
    analysis: bool,
}

impl StatsService {
    pub fn new(config: AppConfig, json: bool, analysis: bool) -> Self {
        Self {
            config,
            json,
            analysis,
        }
    }

    pub async fn run(&self, handle: &str) -> Result<()> {
        let session = Session::from_config(&self.config)?;

        match session.request_lookup(handle).await? {
            LookupOutcome::Ready => {}
            LookupOutcome::Failed { message } => bail!(message),
            LookupOutcome::Superseded => bail!("Lookup for {} was superseded", handle),
        }
        let snapshot = session.snapshot().context("Lookup finished without data")?;

        if self.json {
            let body = serde_json::to_string_pretty(&StatsResponse::from_snapshot(&snapshot))?;
            println!("{}", body);
            return Ok(());
        }

        print!("{}", report::snapshot_report(&snapshot));

        if self.analysis {
            info!("  → Running analysis for {}", snapshot.username);
            let summary = session
                .request_analysis_refresh()
                .await
                .context("Analysis was interrupted")?;
            println!();
            print!("{}", report::summary(&summary));
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ShellInput<'a> {
    Blank,
    Quit,
    Retry,
    Analysis,
    Lookup(&'a str),
}

fn parse_input(line: &str) -> ShellInput<'_> {
    match line.trim() {
        "" => ShellInput::Blank,
        "quit" | "exit" => ShellInput::Quit,
        "retry" => ShellInput::Retry,
        "analysis" => ShellInput::Analysis,
        handle => ShellInput::Lookup(handle),
    }
}

/// Interactive session over stdin.
///
/// Requests run in the background, so typing a new handle while one is
/// still loading replaces it.
pub struct ShellService {
    config: AppConfig,
}

impl ShellService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let session = Arc::new(Session::from_config(&self.config)?);
        let printer = spawn_printer(session.clone());

        println!("Type a handle to look it up, `retry`, `analysis` or `quit`.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match parse_input(&line) {
                ShellInput::Blank => {}
                ShellInput::Quit => break,
                ShellInput::Retry => {
                    let session = session.clone();
                    tokio::spawn(async move {
                        if session.request_retry().await.is_none() {
                            println!("Nothing to retry");
                        }
                    });
                }
                ShellInput::Analysis => {
                    let session = session.clone();
                    tokio::spawn(async move {
                        if session.request_analysis_refresh().await.is_none() {
                            println!("No analysis available; look up a handle first");
                        }
                    });
                }
                ShellInput::Lookup(handle) => {
                    let session = session.clone();
                    let handle = handle.to_string();
                    tokio::spawn(async move {
                        if let Err(e) = session.request_lookup(&handle).await {
                            println!("{}", e.to_string().red());
                        }
                    });
                }
            }
        }

        printer.abort();
        Ok(())
    }
}

// --- Helper Methods ---

fn spawn_printer(session: Arc<Session<ReqwestTransport>>) -> tokio::task::JoinHandle<()> {
    let mut events = session.subscribe();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            print_event(&session, event);
        }
    })
}

fn print_event(session: &Session<ReqwestTransport>, event: SessionEvent) {
    match event {
        SessionEvent::Loading { username } => {
            println!("{}", format!("Loading {}...", username).dimmed());
        }
        SessionEvent::Ready {
            profile,
            aggregates,
        } => {
            print!("{}", report::profile_card(&profile));
            let history = session.history();
            if let Some(data) = history.data() {
                print!("{}", report::activity(data));
            }
            if let Some(notice) = report::history_notice(&history) {
                println!("{}", notice);
            }
            for spec in aggregates.charts() {
                println!();
                print!("{}", report::chart(&spec));
            }
        }
        SessionEvent::Failed { username, message } => {
            println!("{} {}", format!("{}:", username).red().bold(), message.red());
            println!("Type `retry` to try again.");
        }
        SessionEvent::AnalysisReady { summary } => {
            print!("{}", report::summary(&summary));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_handles_are_told_apart() {
        assert_eq!(parse_input("  "), ShellInput::Blank);
        assert_eq!(parse_input("quit"), ShellInput::Quit);
        assert_eq!(parse_input("retry\n"), ShellInput::Retry);
        assert_eq!(parse_input(" analysis "), ShellInput::Analysis);
        assert_eq!(parse_input(" tourist "), ShellInput::Lookup("tourist"));
    }
}
