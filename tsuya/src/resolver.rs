use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    channels::{ChannelOverrides, ObjectChannelState},
    math::{clamp, lerp, powf, Spectrum},
    packet::ShadingPacket,
};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct SurfaceFlags: u8 {
        /// Shade with the physically based lighting model
        const PHYSICAL = 0b00001;
        /// Blurry reflections
        const REFLECTION_BLUR = 0b00010;
    }
}

/// Rays traced for blurry reflections.
pub const REFLECTION_RAYS: u32 = 1024;

/// The surface parameters the renderer's lighting model consumes.
///
/// The default is all zeros, callers pass in whatever the renderer set up for the sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceParameters {
    pub diffuse_color: Spectrum<f32>,
    pub diffuse_amount: f32,
    pub specular_color: Spectrum<f32>,
    pub specular_amount: f32,
    pub specular_fresnel: f32,
    pub reflection_color: Spectrum<f32>,
    pub reflection_amount: f32,
    pub reflection_fresnel: f32,
    pub roughness: f32,
    /// Highlight sharpness along the tangent
    pub specular_exponent_u: f32,
    /// Highlight sharpness along the bitangent
    pub specular_exponent_v: f32,
    pub dissolve_amount: f32,
    pub luminance_color: Spectrum<f32>,
    pub luminance_amount: f32,
    pub subsurface_color: Spectrum<f32>,
    pub transmission_color: Spectrum<f32>,
    pub transmission_amount: f32,
    pub reflection_rays: u32,
    /// `false` when the renderer's own reflection type is replaced by these parameters
    pub builtin_reflection: bool,
    pub flags: SurfaceFlags,
}

/// Free scalar outputs consumed by displacement and other auxiliary effects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Drivers {
    pub a: f32,
    pub b: f32,
}

/// How the channels are turned into surface parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum ShadingMode {
    /// Channels come from the material and the renderer's own model shades them.
    Material,
    /// Channels are packed into the surface parameters as is for texture baking.
    Bake,
    /// Channels go through the physically based remap.
    Render,
}

impl ShadingMode {
    pub fn classify(shader_mode: bool, baking_mode: bool) -> Self {
        match (shader_mode, baking_mode) {
            (false, _) => ShadingMode::Material,
            (true, true) => ShadingMode::Bake,
            (true, false) => ShadingMode::Render,
        }
    }
}

impl From<&ObjectChannelState> for ShadingMode {
    fn from(state: &ObjectChannelState) -> Self {
        Self::classify(state.shader_mode, state.baking_mode)
    }
}

/// The output of [`resolve`] for one sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The packet as the compositor and later stages see it
    pub packet: ShadingPacket,
    pub surface: SurfaceParameters,
    /// Only written in shader mode
    pub drivers: Option<Drivers>,
}

/// Turns the channels of one sample into surface parameters.
///
/// `surface` holds the parameters the renderer has set up for the sample;
/// fields the active mode doesn't write are passed through.
pub fn resolve(
    state: &ObjectChannelState,
    packet: &ShadingPacket,
    overrides: &ChannelOverrides,
    mut surface: SurfaceParameters,
) -> Resolution {
    surface.flags |= SurfaceFlags::PHYSICAL | SurfaceFlags::REFLECTION_BLUR;
    surface.builtin_reflection = false;
    surface.reflection_rays = REFLECTION_RAYS;
    surface.luminance_amount = 1.0;

    match ShadingMode::from(state) {
        ShadingMode::Material => Resolution {
            packet: overrides.merge(&state.base),
            surface,
            drivers: None,
        },
        ShadingMode::Bake => {
            let packet = packet.clamped();
            let drivers = bake(&packet, &mut surface);
            Resolution {
                packet,
                surface,
                drivers: Some(drivers),
            }
        }
        ShadingMode::Render => {
            let mut packet = packet.clamped();
            let drivers = render(&mut packet, &mut surface);
            Resolution {
                packet,
                surface,
                drivers: Some(drivers),
            }
        }
    }
}

fn bake(packet: &ShadingPacket, surface: &mut SurfaceParameters) -> Drivers {
    surface.specular_fresnel = 0.0;
    surface.reflection_fresnel = 0.0;

    surface.diffuse_color = packet.base_color;
    surface.specular_color = packet.aux_color;
    surface.reflection_color = Spectrum::ones();
    surface.luminance_color = packet.emissive_color;
    // Remaining channels are packed into otherwise unused colors
    surface.subsurface_color = Spectrum::new(packet.metallic, packet.roughness, packet.specular);
    surface.transmission_color = Spectrum::new(packet.opacity, packet.tess_multiplier, 0.0);

    surface.diffuse_amount = 1.0;
    surface.specular_amount = 1.0;
    surface.roughness = packet.roughness;
    surface.reflection_amount = packet.metallic;
    surface.transmission_amount = packet.opacity;

    Drivers {
        a: packet.specular,
        b: packet.tess_multiplier,
    }
}

// Empirically tuned curves, the constants must stay exact.
// Intermediates round to f32 at the same points the host plug-in stores them,
// terms with double constants are evaluated in f64 before rounding.
fn render(packet: &mut ShadingPacket, surface: &mut SurfaceParameters) -> Drivers {
    surface.specular_fresnel = 1.0;
    surface.reflection_fresnel = 1.0;

    // Micro occlusion
    let mo = clamp(packet.specular * 2.0, 0.0, 1.0);

    // The packet keeps the remapped value for later stages
    packet.metallic = powf(packet.metallic, 3.0);
    let metallic = packet.metallic;
    let roughness = packet.roughness;
    let specular = packet.specular;
    let m = metallic as f64;
    let r = roughness as f64;

    let base = packet.base_color;
    surface.diffuse_color = base * mo;
    // Achromatic specular base
    let base64 = Spectrum::<f64>::from(base);
    let white = Spectrum::<f64>::ones();
    let neutral = white.lerp(white - base64, 0.5);
    surface.specular_color = neutral.lerp(base64, m).to_f32();
    surface.reflection_color = neutral.lerp(base64, m).to_f32();
    surface.luminance_color = packet.emissive_color;

    surface.diffuse_amount = lerp(1.0, 0.5, m) as f32;

    let sa1 = (1.0 - r.powf(0.5)) as f32;
    let sa2 = lerp(0.1, 1.0, sa1 as f64) as f32;
    let sa11 = (1.0 - r.powf(0.7)) as f32;
    // Unclamped, unlike the micro occlusion term
    let sa12 = (lerp(0.05, 0.1, sa11 as f64) * (specular * 2.0) as f64) as f32;
    surface.specular_amount = lerp(sa12, sa2, metallic);

    let sr1 = clamp(roughness * 4.0, 0.0, 1.0);
    let sr2 = lerp(0.08, 0.008, sr1 as f64) as f32;
    let sr3 = roughness.powf(sr2);
    surface.roughness = sr3;
    let sr4 = lerp(sr3 as f64, (sr3 as f64).powf(0.5), m) as f32;
    surface.specular_exponent_u = lerp(10000.0, 1.0, sr4);
    surface.specular_exponent_v = lerp(10000.0, 1.0, sr4);

    let ra1 = lerp(1.0, 0.5, r) as f32;
    // 0.04 at specular 0.5
    let ra2 = lerp(0.0, 1.0, (specular as f64).powf(2.248) * 0.19) as f32;
    surface.reflection_amount = lerp(ra2, ra1, metallic);
    surface.dissolve_amount = 1.0 - packet.opacity;

    Drivers {
        a: specular,
        b: packet.tess_multiplier,
    }
}
