//! Line-oriented driver for the store.
//!
//! Reads one command per line from stdin, turns it into an intent and prints
//! every committed state. Stands in for the tab views when running the
//! binary by hand.

use std::future::Future;
use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::watch;

use crate::store::Store;
use crate::ui::app::{AppIntent, AppState};
use crate::ui::counter::{CounterBinding, CounterIntent};
use crate::ui::mvi::BindingError;
use crate::ui::profile::{ProfileBinding, ProfileIntent};

pub const HELP: &str = "\
commands:
  + | inc                  increment
  - | dec                  decrement
  delay                    increment after one second
  fact                     look up a fact about the count
  timer on|off             toggle the timer switch
  memo <text>              set the memo
  nick <text>              set the profile nickname
  set <tab> <field> <val>  assign any bindable field
  state                    print the current state
  wait                     block until pending effects finish
  help                     show this text
  quit                     exit";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(AppIntent),
    Show,
    Wait,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unknown tab '{0}' (expected 'counter' or 'profile')")]
    UnknownTab(String),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let intent: AppIntent = match word {
        "" => return Err(CommandError::Empty),
        "+" | "inc" => CounterIntent::Increment.into(),
        "-" | "dec" => CounterIntent::Decrement.into(),
        "delay" => CounterIntent::DelayedIncrementRequested.into(),
        "fact" => CounterIntent::FactRequested.into(),
        "timer" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "timer",
                    expected: "on or off",
                });
            }
            CounterIntent::Binding(CounterBinding::parse("timer", rest)?).into()
        }
        "memo" => CounterIntent::Binding(CounterBinding::Memo(rest.to_string())).into(),
        "nick" => ProfileIntent::Binding(ProfileBinding::Nickname(rest.to_string())).into(),
        "set" => parse_set(rest)?,
        "state" | "show" => return Ok(Command::Show),
        "wait" => return Ok(Command::Wait),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Command::Dispatch(intent))
}

fn parse_set(args: &str) -> Result<AppIntent, CommandError> {
    let missing = CommandError::MissingArgument {
        command: "set",
        expected: "<tab> <field> <value>",
    };
    let (tab, rest) = args.split_once(char::is_whitespace).ok_or(missing.clone())?;
    let (field, value) = match rest.trim().split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None if !rest.trim().is_empty() => (rest.trim(), ""),
        None => return Err(missing),
    };

    match tab {
        "counter" => Ok(CounterIntent::Binding(CounterBinding::parse(field, value)?).into()),
        "profile" => Ok(ProfileIntent::Binding(ProfileBinding::parse(field, value)?).into()),
        other => Err(CommandError::UnknownTab(other.to_string())),
    }
}

/// Render a state snapshot for the terminal.
pub fn render(state: &AppState) -> String {
    let counter = &state.counter;
    let count = if counter.is_loading {
        "…".to_string()
    } else {
        counter.count.to_string()
    };
    format!(
        "[counter] count: {}  timer: {}\n          memo: {:?}\n          fact: {}\n[profile] nickname: {}",
        count,
        if counter.is_timer_enabled { "on" } else { "off" },
        counter.memo,
        counter.fact.as_deref().unwrap_or("-"),
        state.profile.nickname,
    )
}

/// Drive `store` from stdin until `quit`, EOF or Ctrl-C.
pub async fn run(store: Store) -> io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates = store.subscribe();

    emit(&mut stdout, HELP).await?;
    emit(&mut stdout, &render(&store.state())).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Dispatch(intent)) => store.dispatch(intent),
                    Ok(Command::Show) => emit(&mut stdout, &render(&store.state())).await?,
                    Ok(Command::Wait) => {
                        if !wait_settled(&store, &mut updates, &mut stdout, tokio::signal::ctrl_c()).await? {
                            break;
                        }
                    }
                    Ok(Command::Help) => emit(&mut stdout, HELP).await?,
                    Ok(Command::Quit) => break,
                    Err(CommandError::Empty) => {}
                    Err(err) => emit(&mut stdout, &format!("error: {}", err)).await?,
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                emit(&mut stdout, &render(&snapshot)).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    Ok(())
}

/// Block until pending effects finish, still printing each committed state.
///
/// Returns `Ok(false)` if `interrupt` fires first.
async fn wait_settled<W, F>(
    store: &Store,
    updates: &mut watch::Receiver<AppState>,
    out: &mut W,
    interrupt: F,
) -> io::Result<bool>
where
    W: AsyncWrite + Unpin,
    F: Future,
{
    let settled = store.settled();
    tokio::pin!(settled);
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut settled => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                emit(out, &render(&snapshot)).await?;
            }
            _ = &mut interrupt => {
                tracing::info!("Interrupted while waiting for effects");
                return Ok(false);
            }
        }
    }

    // The last effect may commit in the same poll that settles.
    if updates.has_changed().unwrap_or(false) {
        let snapshot = updates.borrow_and_update().clone();
        emit(out, &render(&snapshot)).await?;
    }
    Ok(true)
}

async fn emit<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
