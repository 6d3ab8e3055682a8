//! Single-threaded message pump for the terminal host.
//!
//! Every desktop mutation happens on this thread, one event at a time, in
//! arrival order. There is no background work to interleave with.

use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Wait up to the poll interval for input, then take everything already
    /// queued behind it. Drag samples arrive in bursts; handling a whole
    /// burst before the next draw keeps the render up with the pointer.
    fn next_batch(&mut self) -> io::Result<Vec<Event>> {
        let mut batch = Vec::new();
        let mut timeout = self.poll_interval;
        while self.driver.poll(timeout)? {
            batch.push(self.driver.read()?);
            timeout = Duration::ZERO;
        }
        Ok(batch)
    }

    /// Runs the loop, taking control of the current thread.
    ///
    /// The `handler` is called with `None` once per iteration before waiting
    /// for input (the place to draw), then with `Some(event)` for each event
    /// of the batch. Events batched behind a `Quit` are dropped.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        while handler(&mut self.driver, None)? == ControlFlow::Continue {
            for event in self.next_batch()? {
                if handler(&mut self.driver, Some(event))? == ControlFlow::Quit {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
