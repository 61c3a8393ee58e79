// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-anchor overlay state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! Hidden --show--> Measuring --(geometry ready)--> Positioned
//! Positioned --hide--> Hidden
//! Measuring --hide--> Hidden   (cancels the pending measurement)
//! Positioned --show--> Positioned (idempotent)
//! ```
//!
//! `show` mounts the caller's content invisibly and hands back a [`Ticket`];
//! the host echoes that ticket together with a fresh [`Geometry`] snapshot
//! once the mounted content has a stable measured size. Only then is the
//! placement resolved and the content presented — the overlay is never
//! visible before a computed position exists, so there is no flash at a wrong
//! location.
//!
//! Cancellation is generation-based: `hide` (and each new `show`) advances an
//! internal counter, and a geometry delivery whose ticket does not match the
//! live measurement is dropped. A host that never reports geometry leaves the
//! controller in `Measuring` with nothing shown.

use pergola_placement::{Placement, resolve};

use crate::types::{Geometry, GeometryHost, OverlayConfig, Phase, Ticket};

#[derive(Copy, Clone)]
enum State<T> {
    Hidden,
    Measuring { handle: T, ticket: Ticket },
    Positioned { handle: T, placement: Placement },
}

/// Drives one anchor's overlay through measure → place → present.
///
/// Controllers are independent: each owns only its own transient state, so
/// any number of them can coexist in the same cooperative turn without
/// interference. All host effects go through the `&mut H` passed to each
/// operation; the controller holds no reference to the host.
pub struct OverlayController<H: GeometryHost> {
    state: State<H::Handle>,
    config: OverlayConfig,
    generation: u64,
}

impl<H: GeometryHost> core::fmt::Debug for OverlayController<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverlayController")
            .field("phase", &self.phase())
            .field("config", &self.config)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<H: GeometryHost> OverlayController<H> {
    /// Create a controller in the `Hidden` phase.
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            state: State::Hidden,
            config,
            generation: 0,
        }
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Hidden => Phase::Hidden,
            State::Measuring { .. } => Phase::Measuring,
            State::Positioned { .. } => Phase::Positioned,
        }
    }

    /// The last applied placement, while `Positioned`.
    pub fn placement(&self) -> Option<Placement> {
        match self.state {
            State::Positioned { placement, .. } => Some(placement),
            _ => None,
        }
    }

    /// Static configuration for this anchor.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Begin showing the overlay: mount `content` invisibly and start a
    /// measurement.
    ///
    /// Returns the [`Ticket`] the host must echo at geometry-ready time, or
    /// `None` when already `Measuring` or `Positioned` — `show` is
    /// idempotent and never restarts an in-flight measurement; `content` is
    /// dropped in that case.
    pub fn show(&mut self, host: &mut H, content: H::Content) -> Option<Ticket> {
        if !matches!(self.state, State::Hidden) {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket(self.generation);
        let handle = host.mount_invisible(content, self.config.width);
        self.state = State::Measuring { handle, ticket };
        Some(ticket)
    }

    /// Deliver the measured geometry for an in-flight `show`.
    ///
    /// Resolves the placement against the snapshot, presents the content, and
    /// transitions to `Positioned`. Returns `false` without side effects when
    /// the ticket is stale or no measurement is in flight — the cancellation
    /// contract for deliveries that race a `hide`.
    pub fn geometry_ready(&mut self, host: &mut H, ticket: Ticket, geometry: Geometry) -> bool {
        let State::Measuring {
            handle,
            ticket: live,
        } = self.state
        else {
            return false;
        };
        if ticket != live {
            return false;
        }
        let placement = self.resolve_with(geometry);
        host.present(handle, &placement);
        self.state = State::Positioned { handle, placement };
        true
    }

    /// Re-resolve against a fresh snapshot while `Positioned` (scroll or
    /// resize follow-up) and present the updated placement.
    ///
    /// Returns `false` in any other phase; correctness only requires
    /// resolution at transition time, so this is strictly opt-in.
    pub fn refresh(&mut self, host: &mut H, geometry: Geometry) -> bool {
        let State::Positioned { handle, .. } = self.state else {
            return false;
        };
        let placement = self.resolve_with(geometry);
        host.present(handle, &placement);
        self.state = State::Positioned { handle, placement };
        true
    }

    /// Tear down to `Hidden` from any phase: dismiss mounted content and
    /// invalidate any in-flight measurement.
    pub fn hide(&mut self, host: &mut H) {
        self.generation = self.generation.wrapping_add(1);
        match core::mem::replace(&mut self.state, State::Hidden) {
            State::Hidden => {}
            State::Measuring { handle, .. } | State::Positioned { handle, .. } => {
                host.dismiss(handle);
            }
        }
    }

    fn resolve_with(&self, geometry: Geometry) -> Placement {
        resolve(
            geometry.anchor,
            geometry.overlay,
            geometry.viewport,
            self.config.preferred,
            &self.config.placement,
        )
    }
}
