//! Frame-driven wrapper used by a Rust presentation shell.
//!
//! [`Simulation`] pairs an [`Engine`] with the shell settings: it sizes the
//! grid from the canvas, runs the warm-up generations after every reseed,
//! and gates `step()` through a [`Cadence`].

use std::time::Duration;

use tracing::debug;

use crate::automaton::Mode;
use crate::cadence::{Cadence, Speed};
use crate::config::{ShellConfig, Zoom};
use crate::error::Result;
use crate::state::Engine;

pub struct Simulation {
    engine: Engine,
    config: ShellConfig,
    cadence: Cadence,
    running: bool,
}

impl Simulation {
    /// Running, but uninitialized until [`Simulation::fit_canvas`].
    pub fn new(config: ShellConfig) -> Self {
        let mut engine = Engine::new();
        engine.set_mode(config.mode);
        engine.set_rule_code(config.rule_code());

        Simulation {
            engine,
            config,
            cadence: Cadence::new(),
            running: true,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)create the grid for a canvas of the given pixel size.
    pub fn fit_canvas(&mut self, width_px: u32, height_px: u32) -> Result<()> {
        let (rows, cols) = self.config.grid_dimensions(width_px, height_px);
        self.engine.resize(rows, cols)?;
        self.warm_up()
    }

    /// Select a rule in the current mode and reseed.
    pub fn select_rule(&mut self, rule_code: u32) -> Result<()> {
        self.engine.set_rule_code(rule_code);
        self.config.rule = Some(rule_code);
        self.restart()
    }

    /// Switch family; the rule falls back to the family default.
    pub fn select_mode(&mut self, mode: Mode) -> Result<()> {
        self.engine.set_mode(mode);
        self.config.mode = mode;
        self.config.rule = None;
        if self.engine.is_ready() {
            self.warm_up()?;
        }
        Ok(())
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.config.zoom = zoom;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        if self.running {
            self.cadence.reset();
        }
        debug!(running = self.running, "simulation toggled");
    }

    /// Called once per animation frame. Returns whether the grid advanced.
    pub fn frame(&mut self, now: Duration) -> Result<bool> {
        if !self.running || !self.engine.is_ready() {
            return Ok(false);
        }
        if !self.cadence.should_step(now, self.config.speed) {
            return Ok(false);
        }
        self.engine.step()?;
        Ok(true)
    }

    fn restart(&mut self) -> Result<()> {
        if !self.engine.is_ready() {
            return Ok(());
        }
        self.engine.reset()?;
        self.warm_up()
    }

    fn warm_up(&mut self) -> Result<()> {
        for _ in 0..self.config.warmup_generations {
            self.engine.step()?;
        }
        debug!(
            generations = self.config.warmup_generations,
            "warm-up complete"
        );
        Ok(())
    }
}
