//! Multi-step form wizard controller.
//!
//! Holds the step index, accumulated form values and the current error map.
//! Forward navigation is gated by the step validator; backward navigation is
//! unconditional and never re-validates. Submission itself belongs to the
//! owning service; the wizard only signals readiness and tracks the
//! in-flight flag that keeps a user from double-submitting.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::validator::FieldErrors;

/// When step validators run. Every flow in this client uses [`EveryStep`];
/// the submit-only variant exists for flows that treat `next()` as pure
/// progression and validate the whole form at the end.
///
/// [`EveryStep`]: ValidationPolicy::EveryStep
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ValidationPolicy {
    #[default]
    EveryStep,
    AtSubmitOnly,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// Validation failed; the step did not change and the error map holds
    /// the violations.
    Stayed,
    /// Moved forward to the contained step.
    Advanced(usize),
    /// `next()` on the final step with a clean form: the caller should
    /// serialize and dispatch.
    ReadyToSubmit,
}

#[derive(Clone, Debug)]
pub struct Wizard<F> {
    current_step: usize,
    steps: usize,
    policy: ValidationPolicy,
    form: F,
    errors: FieldErrors,
    submitting: bool,
}

impl<F> Wizard<F> {
    /// `steps` is clamped to at least 1.
    pub fn new(steps: usize, policy: ValidationPolicy, form: F) -> Self {
        Self {
            current_step: 1,
            steps: steps.max(1),
            policy,
            form,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Advance, gated by the step validator under
    /// [`ValidationPolicy::EveryStep`]. On the final step a clean form
    /// yields [`StepOutcome::ReadyToSubmit`] instead of advancing.
    pub fn next(
        &mut self,
        validate_step: impl FnOnce(usize, &F) -> FieldErrors,
    ) -> StepOutcome {
        if self.submitting {
            return StepOutcome::Stayed;
        }

        if self.policy == ValidationPolicy::EveryStep {
            let errors = validate_step(self.current_step, &self.form);
            if !errors.is_empty() {
                self.errors = errors;
                return StepOutcome::Stayed;
            }
        }
        self.errors.clear();

        if self.current_step == self.steps {
            StepOutcome::ReadyToSubmit
        } else {
            self.current_step += 1;
            StepOutcome::Advanced(self.current_step)
        }
    }

    /// Unconditional; never re-validates and leaves the error map alone.
    pub fn previous(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Returns false when a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Failed submission: keep the entered values, surface the server's
    /// field errors.
    pub fn fail_submit(&mut self, errors: FieldErrors) {
        self.submitting = false;
        self.errors = errors;
    }

    /// Successful submission: reset to the first step with a fresh form.
    pub fn finish_submit(&mut self, fresh_form: F) {
        self.submitting = false;
        self.errors.clear();
        self.current_step = 1;
        self.form = fresh_form;
    }

    /// A field edit clears that field's stale error.
    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.shift_remove(field);
    }
}
