//! Line-oriented driver for a single voting session.
//!
//! Reads commands (`vote <COLOR>`, `results`, `refresh`, `restart`,
//! `palette`, `help`, `quit`) and writes human-readable replies. Store
//! failures are reported and the loop keeps going, so the same vote can be
//! retried.

use chroma_common::{ChromaError, ColorOption, Palette, Result, VoteError, VoteStore};
use chroma_tally::VoteSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::render::{render_palette, render_snapshot};

const HELP: &str = "commands: vote <COLOR> | results | refresh | restart | palette | help | quit\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Vote(String),
    Results,
    Refresh,
    Restart,
    Palette,
    Help,
    Quit,
}

impl SessionCommand {
    /// `None` for blank lines; unknown input maps to `Help`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_ascii_lowercase();
        let cmd = match command.as_str() {
            "vote" => match parts.next() {
                Some(color) => SessionCommand::Vote(color.to_string()),
                None => SessionCommand::Help,
            },
            "results" => SessionCommand::Results,
            "refresh" => SessionCommand::Refresh,
            "restart" => SessionCommand::Restart,
            "palette" => SessionCommand::Palette,
            "quit" | "exit" => SessionCommand::Quit,
            _ => SessionCommand::Help,
        };
        Some(cmd)
    }
}

/// Looks `name` up in the palette, exact match first, then ignoring ASCII
/// case.
pub fn resolve_option(palette: &Palette, name: &str) -> Result<ColorOption> {
    palette
        .find(name)
        .or_else(|| palette.iter().find(|o| o.name.eq_ignore_ascii_case(name)))
        .cloned()
        .ok_or_else(|| ChromaError::UnknownOption(name.to_string()))
}

/// Runs commands from `input` against `session` until `quit` or end of input.
pub async fn run_session<S, R, W>(session: &VoteSession<S>, input: R, mut output: W) -> Result<()>
where
    S: VoteStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(HELP.as_bytes()).await?;
    output.write_all(render_snapshot(&session.snapshot().await).as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = SessionCommand::parse(&line) else {
            continue;
        };
        debug!("session command: {:?}", command);

        let reply = match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Palette => render_palette(session.palette()),
            SessionCommand::Results => render_snapshot(&session.snapshot().await),
            SessionCommand::Refresh => match session.refresh().await {
                Ok(snapshot) => render_snapshot(&snapshot),
                Err(e) => format!("Could not load votes: {}\n", e),
            },
            SessionCommand::Restart => {
                session.restart().await;
                let snapshot = match session.refresh().await {
                    Ok(snapshot) => snapshot,
                    Err(_) => session.snapshot().await,
                };
                format!("New session started, you can vote again.\n{}", render_snapshot(&snapshot))
            }
            SessionCommand::Vote(name) => match resolve_option(session.palette(), &name) {
                Err(e) => format!("{}\n", e),
                Ok(option) => vote_reply(session, &option).await,
            },
        };

        output.write_all(reply.as_bytes()).await?;
        output.flush().await?;
    }

    Ok(())
}

async fn vote_reply<S: VoteStore>(session: &VoteSession<S>, option: &ColorOption) -> String {
    match session.request_vote(&option.name).await {
        Ok(snapshot) => format!(
            "You voted for {}!\nThanks for voting! You can see the results below.\n{}",
            option.name,
            render_snapshot(&snapshot)
        ),
        Err(ChromaError::Vote(VoteError::AlreadyVoted)) => "You have already voted!\n".to_string(),
        Err(ChromaError::Vote(VoteError::StoreUnavailable(e))) => {
            format!("Failed to cast vote ({}), try again.\n", e)
        }
        Err(e) => format!("{}\n", e),
    }
}
