//! The pre-write gate.
//!
//! Reads one hook request, runs the checker and decides whether the write
//! may proceed. The gate fails open: only rule violations block a write.
//!
//! | Situation | Exit | stdout | stderr |
//! |-----------|------|--------|--------|
//! | empty input or invalid JSON | 0 | - | - |
//! | valid JSON, not a hook request | 0 | - | one line |
//! | no path or no content | 0 | - | - |
//! | no violations | 0 | - | - |
//! | violations | 2 | block report | - |
//! | fault while checking or reporting | 0 | - | one line |

use std::any::Any;
use std::io::{Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use write_guard_core::Checker;

use crate::report;

/// Exit status that tells the editing tool to block the write.
pub const BLOCK_EXIT_CODE: u8 = 2;

/// Outcome of a gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let the write proceed.
    Allow,
    /// Block the write; the report on stdout is fed back to the agent.
    Block,
}

impl Verdict {
    /// Process exit status for this verdict.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Allow => ExitCode::SUCCESS,
            Self::Block => ExitCode::from(BLOCK_EXIT_CODE),
        }
    }
}

/// Errors reading the hook request.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Nothing but whitespace on stdin.
    #[error("no JSON document on stdin")]
    Empty,

    /// stdin did not start with a valid JSON document.
    #[error("invalid JSON on stdin: {0}")]
    Json(#[source] serde_json::Error),

    /// Valid JSON, but not shaped like a hook request.
    #[error("unexpected hook request shape: {0}")]
    Shape(String),
}

#[derive(Debug, Default, Deserialize)]
struct ToolInput {
    #[serde(default)]
    file_path: Option<String>,
    /// Replacement text of an incremental edit.
    #[serde(default)]
    new_string: Option<String>,
    /// Full content of a whole-file write.
    #[serde(default)]
    content: Option<String>,
}

/// A proposed write with everything needed to check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedWrite {
    /// Target path as given by the editing tool.
    pub file_path: String,
    /// New content: the edit's `new_string`, or the write's `content`.
    pub content: String,
}

/// Reads exactly one JSON document from `reader`.
///
/// Returns `Ok(None)` when the request names no path or carries no content,
/// since the intent of the write cannot be determined.
///
/// # Errors
///
/// Returns an error if the input is empty, not JSON, or not shaped like a
/// hook request. The request and its `tool_input` must be JSON objects and
/// the fields read from `tool_input` must be strings or `null`.
pub fn read_request<R: Read>(reader: R) -> Result<Option<ProposedWrite>, InputError> {
    let value = serde_json::Deserializer::from_reader(reader)
        .into_iter::<Value>()
        .next()
        .ok_or(InputError::Empty)?
        .map_err(InputError::Json)?;

    let mut request = match value {
        Value::Object(request) => request,
        other => {
            return Err(InputError::Shape(format!(
                "expected an object, found {}",
                kind(&other)
            )))
        }
    };

    let tool = match request.remove("tool_input") {
        None => ToolInput::default(),
        Some(fields @ Value::Object(_)) => serde_json::from_value(fields)
            .map_err(|e| InputError::Shape(format!("tool_input: {e}")))?,
        Some(other) => {
            return Err(InputError::Shape(format!(
                "tool_input: expected an object, found {}",
                kind(&other)
            )))
        }
    };

    let file_path = tool.file_path.unwrap_or_default();
    let content = tool
        .new_string
        .filter(|s| !s.is_empty())
        .or(tool.content)
        .unwrap_or_default();

    if file_path.is_empty() || content.is_empty() {
        return Ok(None);
    }

    Ok(Some(ProposedWrite { file_path, content }))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Runs the gate over one request.
///
/// `checker` is only built once a checkable request was read, so a broken
/// configuration never affects requests the gate lets through anyway.
pub fn run<R, O, E, F>(input: R, checker: F, stdout: &mut O, stderr: &mut E) -> Verdict
where
    R: Read,
    O: Write,
    E: Write,
    F: FnOnce() -> Result<Checker>,
{
    let write = match read_request(input) {
        Ok(Some(write)) => write,
        Ok(None) => {
            debug!("request has no path or no content, allowing");
            return Verdict::Allow;
        }
        Err(e @ InputError::Shape(_)) => {
            let _ = writeln!(stderr, "Hook error (allowing operation): {e}");
            return Verdict::Allow;
        }
        Err(e) => {
            debug!(error = %e, "unreadable request, allowing");
            return Verdict::Allow;
        }
    };

    let outcome = catch_fault(|| -> Result<Option<String>> {
        let checker = checker()?;
        let result = checker.check(&write.file_path, &write.content);
        if result.is_clean() {
            return Ok(None);
        }
        Ok(Some(report::block_report(
            &result,
            checker.config().docs_hint(),
        )))
    })
    .and_then(|checked| checked.and_then(|report| deliver(report, stdout)));

    match outcome {
        Ok(verdict) => {
            debug!(path = %write.file_path, ?verdict, "gate decided");
            verdict
        }
        Err(e) => {
            let _ = writeln!(stderr, "Hook error (allowing operation): {}", one_line(&e));
            Verdict::Allow
        }
    }
}

/// Flattens an error chain into a single line for stderr.
fn one_line(error: &anyhow::Error) -> String {
    format!("{error:#}")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn deliver<O: Write>(report: Option<String>, stdout: &mut O) -> Result<Verdict> {
    let Some(report) = report else {
        return Ok(Verdict::Allow);
    };
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write block report")?;
    Ok(Verdict::Block)
}

/// Runs `f`, turning a panic into an error. The panic message is not printed
/// by the default hook; the caller reports it.
fn catch_fault<T>(f: impl FnOnce() -> T) -> Result<T> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);
    outcome.map_err(|payload| anyhow::anyhow!("panic: {}", panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown cause"
    }
}
