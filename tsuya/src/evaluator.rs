use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    channels::{ChannelDebug, ChannelOverrides, ObjectChannelState},
    compositor::{composite, ShadeComponents},
    math::Spectrum,
    packet::ShadingPacket,
    resolver::{resolve, Resolution, ShadingMode, SurfaceParameters},
    tsuya_debug,
};

/// The inputs of one shading sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SampleInput {
    /// Values written by the shading graph, used in shader mode
    pub packet: ShadingPacket,
    /// Values driven at the sample, used in material mode
    pub overrides: ChannelOverrides,
}

/// Evaluates batches of samples of one object on the rayon thread pool.
///
/// The snapshot is only read so any number of batches can share it.
pub struct Evaluator<'a> {
    state: &'a ObjectChannelState,
    surface: SurfaceParameters,
}

impl<'a> Evaluator<'a> {
    pub fn new(state: &'a ObjectChannelState) -> Self {
        Self {
            state,
            surface: SurfaceParameters::default(),
        }
    }

    /// Sets the renderer's initial surface parameters for every sample.
    pub fn with_surface(mut self, surface: SurfaceParameters) -> Self {
        self.surface = surface;
        self
    }

    pub fn state(&self) -> &ObjectChannelState {
        self.state
    }

    pub fn resolve_all(&self, samples: &[SampleInput]) -> Vec<Resolution> {
        let start = Instant::now();

        let resolved: Vec<Resolution> = samples
            .par_iter()
            .map(|s| resolve(self.state, &s.packet, &s.overrides, self.surface))
            .collect();

        tsuya_debug!(
            "Resolved {} samples in {} mode in {:.2}ms",
            resolved.len(),
            ShadingMode::from(self.state),
            start.elapsed().as_secs_f32() * 1e3
        );

        resolved
    }

    /// Composites each resolved sample with its lighting contributions.
    ///
    /// Panics if `resolved` and `components` differ in length.
    pub fn shade_all(
        &self,
        resolved: &[Resolution],
        components: &[ShadeComponents],
        debug: ChannelDebug,
    ) -> Vec<Spectrum<f32>> {
        assert_eq!(
            resolved.len(),
            components.len(),
            "Every resolved sample needs its lighting components"
        );

        resolved
            .par_iter()
            .zip(components.par_iter())
            .map(|(r, c)| composite(c, &r.packet, debug))
            .collect()
    }
}
