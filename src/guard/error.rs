//! Error kinds raised by guarded calls

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced to the caller of a guarded function.
///
/// Exactly one of these terminates a failed call. The fallback path never
/// raises: it converts a would-be [`GuardError::ResultRejected`] into a
/// plain return of the last failing result.
#[derive(Debug, Error, Diagnostic)]
pub enum GuardError {
    /// The guard was configured with a repeat budget of zero, so the
    /// wrapped function can never be attempted.
    #[error("Repeat budget is zero; the wrapped function cannot be attempted")]
    #[diagnostic(
        code(callguard::guard::zero_repeat_budget),
        help("configure a positive attempt count with Guard::repeat_budget")
    )]
    ZeroRepeatBudget,

    /// The input validator rejected the call's arguments before the wrapped
    /// function ran.
    #[error("Input validation failed for arguments: {args}")]
    #[diagnostic(code(callguard::guard::input_rejected))]
    InputRejected {
        /// Rendering of the rejected arguments.
        args: String,
    },

    /// Every attempt was spent and the result validator accepted none of
    /// the outcomes.
    #[error("Result validation failed after {attempts} attempt(s); last result: {result}")]
    #[diagnostic(
        code(callguard::guard::result_rejected),
        help("raise the repeat budget or configure a fallback action")
    )]
    ResultRejected {
        /// Number of attempts spent.
        attempts: u32,
        /// Rendering of the last rejected result.
        result: String,
    },
}
