use serde::{Deserialize, Serialize};

use crate::{
    channels::ChannelDebug,
    math::{clamp, lerp, Spectrum},
    packet::ShadingPacket,
};

/// Sharpens the falloff of the light/shadow terminator.
pub const TERMINATOR_TIGHTNESS: f32 = 2.0;

/// Lighting contributions the renderer computed for a sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShadeComponents {
    pub diffuse: Spectrum<f32>,
    pub specular: Spectrum<f32>,
    pub reflection: Spectrum<f32>,
    pub transmission: Spectrum<f32>,
    pub subsurface: Spectrum<f32>,
    pub luminance: Spectrum<f32>,
}

/// Combines the lighting contributions into the final color of a sample.
///
/// Any `debug` mode other than [`ChannelDebug::Off`] skips lighting and
/// outputs the named packet field instead. The result isn't clamped.
pub fn composite(
    components: &ShadeComponents,
    packet: &ShadingPacket,
    debug: ChannelDebug,
) -> Spectrum<f32> {
    match debug {
        ChannelDebug::BaseColor => packet.base_color,
        ChannelDebug::Metallic => Spectrum::splat(packet.metallic),
        ChannelDebug::Specular => Spectrum::splat(packet.specular),
        ChannelDebug::Roughness => Spectrum::splat(packet.roughness),
        ChannelDebug::EmissiveColor => packet.emissive_color,
        ChannelDebug::Opacity => Spectrum::splat(packet.opacity),
        ChannelDebug::TessMultiplier => Spectrum::splat(packet.tess_multiplier),
        ChannelDebug::AuxRgb => packet.aux_color,
        ChannelDebug::Off => {
            let mut color = Spectrum::zeros();
            for i in 0..3 {
                let d = components.diffuse[i];
                let diffuse = lerp(TERMINATOR_TIGHTNESS * d, d, clamp(d, 0.0, 1.0));
                color[i] = diffuse
                    + components.specular[i]
                    + components.reflection[i]
                    + components.transmission[i]
                    + components.subsurface[i]
                    + components.luminance[i];
            }
            color
        }
    }
}
