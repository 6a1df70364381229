//! Execution metrics for a running CPU
//!
//! The collector works on windows: it counts what happens until `collect` is
//! called, reports it and starts counting again.

use std::time::{Duration, Instant};

use log::debug;

#[derive(Debug)]
struct Window {
    opened_at: Instant,
    steps: usize,
    faults: usize,
}

impl Window {
    fn open() -> Self {
        Self {
            opened_at: Instant::now(),
            steps: 0,
            faults: 0,
        }
    }
}

/// Report for a closed window
#[derive(Debug)]
pub struct Metrics {
    pub recorded_time: Duration,
    pub instructions_executed: usize,
    pub faults: usize,
    pub instructions_per_second: usize,
}

pub struct Collector {
    window: Window,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            window: Window::open(),
        }
    }

    /// Count one executed instruction, faulting or not
    pub fn observe_step(&mut self, faulted: bool) {
        self.window.steps += 1;
        if faulted {
            self.window.faults += 1;
        }
    }

    /// Close the current window and open a new one
    pub fn collect(&mut self) -> Metrics {
        let window = std::mem::replace(&mut self.window, Window::open());
        debug!("Closing metrics window: {window:?}");

        let recorded_time = window.opened_at.elapsed();
        let micros = recorded_time.as_micros();
        let instructions_per_second = if micros == 0 {
            0
        } else {
            (window.steps as u128 * 1_000_000 / micros) as usize
        };

        Metrics {
            recorded_time,
            instructions_executed: window.steps,
            faults: window.faults,
            instructions_per_second,
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}
