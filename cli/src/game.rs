use std::io::Write;

use anyhow::{Context, Result, bail};
use carrotfield_core::*;

use crate::input::LineSource;
use crate::message::{self, COLS_PROMPT, ROWS_PROMPT, TURN_PROMPT};

/// Asks until the player types an acceptable field dimension.
pub fn prompt_field_size<I, W>(input: &mut I, out: &mut W, prompt: &str) -> Result<Coord>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let Some(line) = input.read_line(prompt).context("reading field size")? else {
            bail!("input closed before a field size was entered");
        };

        match parse_field_size(&line) {
            Ok(size) => return Ok(size),
            Err(err) => {
                log::debug!("Rejected field size {line:?}: {err}");
                writeln!(out, "{}", message::invalid_size())?;
            }
        }
    }
}

pub fn prompt_config<I, W>(input: &mut I, out: &mut W) -> Result<FieldConfig>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let rows = prompt_field_size(input, out, ROWS_PROMPT)?;
    let cols = prompt_field_size(input, out, COLS_PROMPT)?;
    Ok(FieldConfig::new(rows, cols)?)
}

/// Runs turns until the session leaves the active state.
///
/// Running out of input counts as quitting.
pub fn play<I, W>(session: &mut FieldSession, input: &mut I, out: &mut W) -> Result<SessionState>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    while session.state().is_active() {
        writeln!(out, "{}", session.render())?;
        writeln!(out, "{}", message::legend())?;

        let outcome = match input.read_line(TURN_PROMPT).context("reading move")? {
            Some(line) => session.play_line(&line)?,
            None => {
                log::info!("Input closed, quitting");
                session.play(TurnInput::Quit)?
            }
        };

        if let Some(text) = message::for_outcome(outcome) {
            writeln!(out, "{text}")?;
        }
        if outcome.ends_session() {
            writeln!(out, "{}", message::game_over())?;
        }
    }

    out.flush()?;
    Ok(session.state())
}

/// Full session: size prompts, field generation, welcome banner, then play.
pub fn run<I, W, S>(input: &mut I, out: &mut W, source: S) -> Result<SessionState>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
    S: RandomSource,
{
    let config = prompt_config(input, out)?;
    log::debug!("Field config: {config:?}");

    let mut session = FieldSession::generate(config, RandomFieldGenerator::new(source))?;
    writeln!(out, "{}", message::welcome())?;

    let state = play(&mut session, input, out)?;
    log::info!("Session finished: {state:?}");
    Ok(state)
}
