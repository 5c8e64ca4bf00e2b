//! Command scripts replayed against a viewer engine.
//!
//! One step per line. A line is either a command name from the command
//! table (`next-tile`, `fit_to_width`, ...) or one of the parameterized
//! verbs below. `#` starts a comment.
//!
//! ```text
//! page 3
//! rotate -90
//! rotate-all 180
//! viewport 1024x768
//! ```

use anyhow::{anyhow, bail, Context};
use pageview_core::Size;
use pageview_viewer::{CommandId, RotateOptions, ViewerEngine};
use std::fmt;

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Command(CommandId),
    GoToPage(u32),
    Rotate { degrees: i32, all_pages: bool },
    Viewport(Size),
}

/// What a step did to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Applied,
    /// The command was disabled or the move was out of range.
    Ignored,
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Command(id) => write!(f, "{}", id),
            ScriptStep::GoToPage(page) => write!(f, "page {}", page),
            ScriptStep::Rotate {
                degrees,
                all_pages: false,
            } => write!(f, "rotate {}", degrees),
            ScriptStep::Rotate { degrees, .. } => write!(f, "rotate-all {}", degrees),
            ScriptStep::Viewport(size) => write!(f, "viewport {}x{}", size.width, size.height),
        }
    }
}

/// Parses `WIDTHxHEIGHT`.
pub fn parse_size(value: &str) -> anyhow::Result<Size> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("Expected WIDTHxHEIGHT, got '{}'", value))?;
    let size = Size::new(
        w.trim().parse().with_context(|| format!("Bad width in '{}'", value))?,
        h.trim().parse().with_context(|| format!("Bad height in '{}'", value))?,
    );
    if size.is_empty() {
        bail!("Size '{}' has no area", value);
    }
    Ok(size)
}

/// Parses a whole script, reporting the first bad line.
pub fn parse_script(source: &str) -> anyhow::Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (number, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("Line {}: '{}'", number + 1, line))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_line(line: &str) -> anyhow::Result<ScriptStep> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let argument = words.next();
    if words.next().is_some() {
        bail!("Too many arguments");
    }

    let step = match (verb.to_lowercase().as_str(), argument) {
        ("page", Some(arg)) => ScriptStep::GoToPage(arg.parse().context("Bad page number")?),
        ("rotate", Some(arg)) => ScriptStep::Rotate {
            degrees: arg.parse().context("Bad angle")?,
            all_pages: false,
        },
        ("rotate-all", Some(arg)) => ScriptStep::Rotate {
            degrees: arg.parse().context("Bad angle")?,
            all_pages: true,
        },
        ("viewport", Some(arg)) => ScriptStep::Viewport(parse_size(arg)?),
        (_, None) => ScriptStep::Command(verb.parse()?),
        (_, Some(_)) => bail!("'{}' takes no argument", verb),
    };
    Ok(step)
}

/// Applies one step. Precondition failures of fallible verbs are errors;
/// disabled commands and silent navigation are reported as ignored.
pub fn apply(engine: &mut ViewerEngine, step: ScriptStep) -> anyhow::Result<StepOutcome> {
    let outcome = match step {
        ScriptStep::Command(id) => {
            if !engine.is_command_enabled(id) {
                return Ok(StepOutcome::Ignored);
            }
            engine.execute(id)?;
            StepOutcome::Applied
        }
        ScriptStep::GoToPage(page) => {
            if engine.go_to_page(page) {
                StepOutcome::Applied
            } else {
                StepOutcome::Ignored
            }
        }
        ScriptStep::Rotate { degrees, all_pages } => {
            let options = RotateOptions {
                current_page_only: !all_pages,
                ..Default::default()
            };
            engine.rotate(degrees, options)?;
            StepOutcome::Applied
        }
        ScriptStep::Viewport(size) => {
            engine.set_viewport_size(size);
            StepOutcome::Applied
        }
    };
    Ok(outcome)
}

/// One-line summary of the engine state.
pub fn status_line(engine: &ViewerEngine) -> String {
    if !engine.has_document() {
        return "No document".to_string();
    }
    let page = engine.current_page();
    let mut status = format!(
        "Page {}/{} | {} | {} | {:.0}%",
        page,
        engine.page_count(),
        engine.orientation(page),
        engine.fit_mode(),
        engine.scale_factor() * 100.0
    );
    if engine.tile_count() > 1 {
        status.push_str(&format!(
            " | Tile {}/{}",
            engine.tile_index() + 1,
            engine.tile_count()
        ));
    }
    status.push_str(&format!(" | Tool: {}", engine.active_tool()));
    status
}
