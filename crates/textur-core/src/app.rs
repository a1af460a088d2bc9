//! The update/draw application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! The loop is strictly sequential: one message is read, the model is
//! updated, the screen is redrawn and the diff flushed before the next
//! message is read.

use std::io;

use log::debug;

use crate::screen::{compute_frame, Frame, Screen};
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (terminal, test harness, ...).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> io::Result<()>;

    /// Current screen size as `(rows, cols)`.
    fn size(&self) -> io::Result<(i32, i32)>;

    /// Block until the next message. `None` means the input is exhausted.
    fn next_msg(&mut self) -> io::Result<Option<Msg>>;

    /// Write a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> io::Result<()>;

    /// Restore the terminal. Must be safe to call after a failed `init`.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(model: M, driver: D) -> Self {
        Self { model, driver }
    }

    /// Give back the model once the loop has ended.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Run the loop until the model returns [`Effect::End`] or the driver
    /// runs out of input. The driver is always closed before returning.
    pub fn run(&mut self) -> io::Result<()> {
        let res = self.run_inner();
        self.driver.close();
        res
    }

    fn run_inner(&mut self) -> io::Result<()> {
        self.driver.init()?;
        let (rows, cols) = self.driver.size()?;
        let mut prev = Screen::new(rows, cols);
        let mut curr = Screen::new(rows, cols);

        self.model.update(Msg::Init);
        if self.model.update(Msg::Screen { rows, cols }) == Some(Effect::End) {
            return Ok(());
        }
        self.redraw(&mut prev, &mut curr, true)?;

        while let Some(msg) = self.driver.next_msg()? {
            let resized = match msg {
                Msg::Screen { rows, cols } => {
                    prev = Screen::new(rows, cols);
                    curr = Screen::new(rows, cols);
                    true
                }
                _ => false,
            };
            if let Some(Effect::End) = self.model.update(msg) {
                debug!("model requested end of loop");
                break;
            }
            self.redraw(&mut prev, &mut curr, resized)?;
        }
        Ok(())
    }

    fn redraw(&mut self, prev: &mut Screen, curr: &mut Screen, full: bool) -> io::Result<()> {
        curr.clear();
        self.model.draw(curr);
        let frame = if full {
            compute_frame(&Screen::new(0, 0), curr)
        } else {
            compute_frame(prev, curr)
        };
        if !frame.is_empty() {
            self.driver.flush(frame)?;
        }
        prev.clone_from(curr);
        Ok(())
    }
}
