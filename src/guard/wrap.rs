//! The validating wrapper factory
//!
//! [`Guard`] bundles two validators, an attempt budget, and an optional
//! fallback; [`Guard::wrap`] applies the bundle to a callable, yielding a
//! [`Guarded`] value that enforces the contract on every call.

use std::fmt;

use tracing::{debug, warn};

use crate::guard::capability::{FallbackAction, InputValidator, ResultValidator};
use crate::guard::error::GuardError;

/// Fallback slot type for guards configured without a fallback action.
pub type NoFallback = fn();

/// Immutable configuration for guarded calls: an input validator, a result
/// validator, an attempt budget, and an optional fallback action.
///
/// Building a guard never fails, whatever the values supplied; a zero
/// repeat budget is only rejected when the wrapped function is called.
pub struct Guard<VI, VR, FB = NoFallback> {
    input: VI,
    result: VR,
    repeat_budget: u32,
    fallback: Option<FB>,
}

impl<VI, VR> Guard<VI, VR> {
    /// Create a guard with the two validators, a budget of one attempt,
    /// and no fallback.
    pub fn new(input: VI, result: VR) -> Self {
        Guard {
            input,
            result,
            repeat_budget: 1,
            fallback: None,
        }
    }
}

impl<VI, VR, FB> Guard<VI, VR, FB> {
    /// Set the maximum number of attempts per call.
    ///
    /// Zero is accepted here; every call on the resulting wrapper then
    /// fails with [`GuardError::ZeroRepeatBudget`].
    pub fn repeat_budget(mut self, attempts: u32) -> Self {
        self.repeat_budget = attempts;
        self
    }

    /// Configure an action to run when every attempt fails result
    /// validation.
    ///
    /// With a fallback in place the guarded call invokes it once and
    /// returns the last failing result instead of an error.
    pub fn fallback<G>(self, action: G) -> Guard<VI, VR, G>
    where
        G: FallbackAction,
    {
        Guard {
            input: self.input,
            result: self.result,
            repeat_budget: self.repeat_budget,
            fallback: Some(action),
        }
    }

    /// Wrap a callable, consuming the guard.
    pub fn wrap<F>(self, func: F) -> Guarded<F, VI, VR, FB> {
        Guarded { func, guard: self }
    }
}

/// A callable wrapped with validation and bounded retry.
///
/// Invoke it through [`Guarded::call`]. Multi-argument functions take
/// their arguments as a tuple; the wrapper is generic over the argument
/// and result types and hands the result back unchanged on success.
pub struct Guarded<F, VI, VR, FB = NoFallback> {
    func: F,
    guard: Guard<VI, VR, FB>,
}

impl<F, VI, VR, FB> Guarded<F, VI, VR, FB> {
    /// Invoke the wrapped function under the guard's contract.
    ///
    /// The sequence, per call:
    /// 1. a zero repeat budget fails with [`GuardError::ZeroRepeatBudget`]
    ///    before either validator or the function runs;
    /// 2. the input validator sees the arguments once; rejection fails
    ///    with [`GuardError::InputRejected`] and the function is never
    ///    called;
    /// 3. the function runs up to `repeat_budget` times, stopping at the
    ///    first outcome the result validator accepts, which is returned;
    /// 4. with every attempt spent: a configured fallback runs once and
    ///    the last failing outcome is returned, otherwise the call fails
    ///    with [`GuardError::ResultRejected`].
    ///
    /// Arguments are cloned once per attempt. The result validator is
    /// re-evaluated on every attempt; no outcome is cached across attempts
    /// or calls, and all invocation state is local to this call.
    pub fn call<A, T>(&mut self, args: A) -> Result<T, GuardError>
    where
        F: FnMut(A) -> T,
        A: Clone + fmt::Debug,
        T: fmt::Debug,
        VI: InputValidator<A>,
        VR: ResultValidator<T>,
        FB: FallbackAction,
    {
        if self.guard.repeat_budget == 0 {
            return Err(GuardError::ZeroRepeatBudget);
        }

        if !self.guard.input.check(&args) {
            return Err(GuardError::InputRejected {
                args: format!("{args:?}"),
            });
        }

        let mut remaining = self.guard.repeat_budget;
        loop {
            let outcome = (self.func)(args.clone());
            let accepted = self.guard.result.check(&outcome);
            remaining -= 1;

            if accepted {
                return Ok(outcome);
            }
            debug!(remaining, outcome = ?outcome, "result rejected");

            if remaining == 0 {
                return match self.guard.fallback.as_mut() {
                    Some(action) => {
                        warn!(
                            attempts = self.guard.repeat_budget,
                            "attempts exhausted, invoking fallback"
                        );
                        action.invoke();
                        Ok(outcome)
                    }
                    None => Err(GuardError::ResultRejected {
                        attempts: self.guard.repeat_budget,
                        result: format!("{outcome:?}"),
                    }),
                };
            }
        }
    }
}
