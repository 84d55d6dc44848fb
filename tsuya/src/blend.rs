use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::{math::Spectrum, packet::ShadingPacket};

/// Interpolation curve used when blending between two samples.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    EnumVariantNames,
)]
pub enum BlendMode {
    #[default]
    Linear,
    Smoothstep,
    Smootherstep,
}

impl BlendMode {
    /// Returns the weight of the second value at `t`.
    ///
    /// Maps 0 to 0 and 1 to 1 exactly for every mode.
    #[inline]
    pub fn weight(self, t: f32) -> f32 {
        match self {
            BlendMode::Linear => t,
            BlendMode::Smoothstep => {
                let t = t.clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }
            BlendMode::Smootherstep => {
                let t = t.clamp(0.0, 1.0);
                t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
            }
        }
    }
}

/// Host blending primitives.
///
/// A packet is blended field by field with the same primitive and mode so
/// every field follows the same curve.
pub trait Blender: Send + Sync {
    fn blend_scalar(&self, a: f32, b: f32, t: f32, mode: BlendMode) -> f32;
    fn blend_color(
        &self,
        a: Spectrum<f32>,
        b: Spectrum<f32>,
        t: f32,
        mode: BlendMode,
    ) -> Spectrum<f32>;
}

/// Weighted sum blending, `a * (1 - w) + b * w` with `w` from the mode's curve.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardBlender;

impl Blender for StandardBlender {
    #[inline]
    fn blend_scalar(&self, a: f32, b: f32, t: f32, mode: BlendMode) -> f32 {
        let w = mode.weight(t);
        a * (1.0 - w) + b * w
    }

    #[inline]
    fn blend_color(
        &self,
        a: Spectrum<f32>,
        b: Spectrum<f32>,
        t: f32,
        mode: BlendMode,
    ) -> Spectrum<f32> {
        let w = mode.weight(t);
        a * (1.0 - w) + b * w
    }
}

/// Blends two packets into a new one.
pub fn blend_packets(
    blender: &impl Blender,
    a: &ShadingPacket,
    b: &ShadingPacket,
    t: f32,
    mode: BlendMode,
) -> ShadingPacket {
    ShadingPacket {
        base_color: blender.blend_color(a.base_color, b.base_color, t, mode),
        metallic: blender.blend_scalar(a.metallic, b.metallic, t, mode),
        specular: blender.blend_scalar(a.specular, b.specular, t, mode),
        roughness: blender.blend_scalar(a.roughness, b.roughness, t, mode),
        emissive_color: blender.blend_color(a.emissive_color, b.emissive_color, t, mode),
        opacity: blender.blend_scalar(a.opacity, b.opacity, t, mode),
        tess_multiplier: blender.blend_scalar(a.tess_multiplier, b.tess_multiplier, t, mode),
        aux_color: blender.blend_color(a.aux_color, b.aux_color, t, mode),
    }
}
