//! Interactive mode
//!
//! Presents the input form, submits it as one explicit cycle, renders
//! the outcome and offers another round. The model is loaded once before
//! the loop; each round owns its own inputs and results. Nothing typed
//! into the form outlives the process.

pub mod display;
pub mod input;

use anyhow::Result;

pub use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
use crate::session::{ScoringSession, SubmissionOutcome};
use crate::types::StudentInputs;

/// Interactive session coordinator
pub struct ReplSession<'a> {
    session: &'a ScoringSession,
    display: DisplayManager,
    input: InputHandler,
}

impl<'a> ReplSession<'a> {
    /// Create a new interactive session
    pub fn new(session: &'a ScoringSession, display: DisplayManager) -> Result<Self> {
        Ok(Self {
            session,
            display,
            input: InputHandler::new()?,
        })
    }

    /// Run until the user quits
    pub fn run(&mut self) -> Result<()> {
        self.display
            .show_banner(env!("CARGO_PKG_VERSION"), self.session.status());

        let mut defaults = StudentInputs::default();
        loop {
            let Some(inputs) = self.input.read_form(&defaults)? else {
                break;
            };

            let spinner = self.display.start_prediction();
            let outcome = self.session.submit(inputs);
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            self.display.show_outcome(&outcome);

            // Keep answers as the next round's defaults so a rejected
            // field can be corrected without retyping the rest.
            defaults = inputs;

            if matches!(outcome, SubmissionOutcome::Scored(_)) && !self.input.confirm_again()? {
                break;
            }
        }

        Ok(())
    }
}
