// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena of overlay controllers keyed by anchor identity.
//!
//! Anchors register at mount time and unregister at unmount; in between,
//! trigger bindings (hover or focus enter/leave, owned by the embedding
//! toolkit) address their controller through the [`AnchorId`] handle. Each
//! slot holds an independent [`OverlayController`]; there is no shared
//! mutable state between anchors, so any number of overlays can be mid-
//! lifecycle in the same cooperative turn.

use alloc::vec::Vec;

use pergola_placement::Placement;

use crate::controller::OverlayController;
use crate::types::{Geometry, GeometryHost, OverlayConfig, Phase, Ticket};

/// Identifier for a registered anchor.
///
/// A small, copyable handle that stays stable for the anchor's lifetime and
/// becomes invalid when the anchor is removed. It consists of a slot index
/// and a generation counter: freed slots are reused with a bumped
/// generation, so a stale `AnchorId` never aliases a different live anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnchorId(pub(crate) u32, pub(crate) u32);

impl AnchorId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What the host must echo back when a measurement completes: the anchor the
/// measurement belongs to and its [`Ticket`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MeasureRequest {
    /// Anchor whose overlay is being measured.
    pub anchor: AnchorId,
    /// Generation token for this measurement.
    pub ticket: Ticket,
}

/// A set of independent overlay controllers, one per registered anchor.
///
/// Operations addressed at a removed or stale [`AnchorId`] are silent
/// no-ops (queries return `None`), so callers may hold on to handles across
/// teardown without bookkeeping.
pub struct Overlays<H: GeometryHost> {
    slots: Vec<Option<OverlayController<H>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl<H: GeometryHost> core::fmt::Debug for Overlays<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Overlays")
            .field("anchors_total", &total)
            .field("anchors_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

impl<H: GeometryHost> Default for Overlays<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: GeometryHost> Overlays<H> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Register an anchor, creating its controller in the `Hidden` phase.
    pub fn insert(&mut self, config: OverlayConfig) -> AnchorId {
        let ctrl = OverlayController::new(config);
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(ctrl);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "AnchorId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(ctrl));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "AnchorId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        AnchorId::new(idx, generation)
    }

    /// Unregister an anchor (its on-screen element unmounted), dismissing any
    /// mounted overlay content first.
    pub fn remove(&mut self, host: &mut H, id: AnchorId) {
        let Some(ctrl) = self.ctrl_opt_mut(id) else {
            return;
        };
        ctrl.hide(host);
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Whether `id` still refers to a live anchor.
    pub fn is_alive(&self, id: AnchorId) -> bool {
        self.generations.get(id.idx()).copied() == Some(id.1)
            && self.slots[id.idx()].is_some()
    }

    /// Number of live anchors.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether no anchors are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Begin showing `id`'s overlay. Returns the [`MeasureRequest`] the host
    /// must echo at geometry-ready time, or `None` when the anchor is dead or
    /// already showing (idempotent, like
    /// [`OverlayController::show`]).
    pub fn show(
        &mut self,
        host: &mut H,
        id: AnchorId,
        content: H::Content,
    ) -> Option<MeasureRequest> {
        let ctrl = self.ctrl_opt_mut(id)?;
        let ticket = ctrl.show(host, content)?;
        Some(MeasureRequest { anchor: id, ticket })
    }

    /// Deliver measured geometry for an earlier [`MeasureRequest`]. Returns
    /// `true` when the placement was applied; `false` for dead anchors and
    /// stale tickets (cancellation).
    pub fn geometry_ready(
        &mut self,
        host: &mut H,
        request: MeasureRequest,
        geometry: Geometry,
    ) -> bool {
        match self.ctrl_opt_mut(request.anchor) {
            Some(ctrl) => ctrl.geometry_ready(host, request.ticket, geometry),
            None => false,
        }
    }

    /// Re-resolve a positioned overlay against fresh geometry (scroll or
    /// resize follow-up). No-op unless `id` is alive and `Positioned`.
    pub fn refresh(&mut self, host: &mut H, id: AnchorId, geometry: Geometry) -> bool {
        match self.ctrl_opt_mut(id) {
            Some(ctrl) => ctrl.refresh(host, geometry),
            None => false,
        }
    }

    /// Tear down `id`'s overlay to `Hidden`, cancelling any in-flight
    /// measurement. The anchor stays registered.
    pub fn hide(&mut self, host: &mut H, id: AnchorId) {
        if let Some(ctrl) = self.ctrl_opt_mut(id) {
            ctrl.hide(host);
        }
    }

    /// The lifecycle phase of `id`'s overlay, or `None` when dead.
    pub fn phase(&self, id: AnchorId) -> Option<Phase> {
        self.ctrl_opt(id).map(OverlayController::phase)
    }

    /// The applied placement of `id`'s overlay, while `Positioned`.
    pub fn placement(&self, id: AnchorId) -> Option<Placement> {
        self.ctrl_opt(id).and_then(OverlayController::placement)
    }

    // --- internals ---

    fn ctrl_opt(&self, id: AnchorId) -> Option<&OverlayController<H>> {
        if self.generations.get(id.idx()).copied() != Some(id.1) {
            return None;
        }
        self.slots.get(id.idx())?.as_ref()
    }

    fn ctrl_opt_mut(&mut self, id: AnchorId) -> Option<&mut OverlayController<H>> {
        if self.generations.get(id.idx()).copied() != Some(id.1) {
            return None;
        }
        self.slots.get_mut(id.idx())?.as_mut()
    }
}
