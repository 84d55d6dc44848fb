use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::{channels::MaterialChannels, math::Spectrum};

/// The per-sample channel values carried through the shading pipe.
pub type ShadingPacket = MaterialChannels;

impl MaterialChannels {
    /// Prepares a fresh packet for the host.
    ///
    /// Only the base color is reset, the remaining fields keep what the caller set.
    pub fn initialize(&mut self) {
        self.base_color = Spectrum::zeros();
    }

    /// Returns the packet with every component clamped to `[0, 1]`.
    pub fn clamped(&self) -> Self {
        Self {
            base_color: self.base_color.clamped(0.0, 1.0),
            metallic: self.metallic.clamp(0.0, 1.0),
            specular: self.specular.clamp(0.0, 1.0),
            roughness: self.roughness.clamp(0.0, 1.0),
            emissive_color: self.emissive_color.clamped(0.0, 1.0),
            opacity: self.opacity.clamp(0.0, 1.0),
            tess_multiplier: self.tess_multiplier.clamp(0.0, 1.0),
            aux_color: self.aux_color.clamped(0.0, 1.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Scalar,
    Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EffectValue {
    Scalar(f32),
    Color(Spectrum<f32>),
}

/// Texture effects that layers can target on a [`ShadingPacket`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter, EnumString, EnumVariantNames)]
pub enum PacketEffect {
    #[strum(serialize = "unrealBaseColor")]
    BaseColor,
    #[strum(serialize = "unrealMetallic")]
    Metallic,
    #[strum(serialize = "unrealSpecular")]
    Specular,
    #[strum(serialize = "unrealRoughness")]
    Roughness,
    #[strum(serialize = "unrealEmissiveColor")]
    EmissiveColor,
    #[strum(serialize = "unrealOpacity")]
    Opacity,
    #[strum(serialize = "unrealTessMultiplier")]
    TessMultiplier,
    #[strum(serialize = "unrealAuxRGB")]
    AuxRgb,
}

impl PacketEffect {
    pub fn kind(self) -> EffectKind {
        match self {
            PacketEffect::BaseColor | PacketEffect::EmissiveColor | PacketEffect::AuxRgb => {
                EffectKind::Color
            }
            _ => EffectKind::Scalar,
        }
    }

    /// Reads the field this effect targets.
    pub fn get(self, packet: &ShadingPacket) -> EffectValue {
        match self {
            PacketEffect::BaseColor => EffectValue::Color(packet.base_color),
            PacketEffect::Metallic => EffectValue::Scalar(packet.metallic),
            PacketEffect::Specular => EffectValue::Scalar(packet.specular),
            PacketEffect::Roughness => EffectValue::Scalar(packet.roughness),
            PacketEffect::EmissiveColor => EffectValue::Color(packet.emissive_color),
            PacketEffect::Opacity => EffectValue::Scalar(packet.opacity),
            PacketEffect::TessMultiplier => EffectValue::Scalar(packet.tess_multiplier),
            PacketEffect::AuxRgb => EffectValue::Color(packet.aux_color),
        }
    }

    /// Writes `value` into the field this effect targets.
    ///
    /// Scalars written to colors are broadcast, colors written to scalars use their first component.
    pub fn set(self, packet: &mut ShadingPacket, value: EffectValue) {
        let scalar = match value {
            EffectValue::Scalar(v) => v,
            EffectValue::Color(c) => c.r,
        };
        let color = match value {
            EffectValue::Scalar(v) => Spectrum::splat(v),
            EffectValue::Color(c) => c,
        };

        match self {
            PacketEffect::BaseColor => packet.base_color = color,
            PacketEffect::Metallic => packet.metallic = scalar,
            PacketEffect::Specular => packet.specular = scalar,
            PacketEffect::Roughness => packet.roughness = scalar,
            PacketEffect::EmissiveColor => packet.emissive_color = color,
            PacketEffect::Opacity => packet.opacity = scalar,
            PacketEffect::TessMultiplier => packet.tess_multiplier = scalar,
            PacketEffect::AuxRgb => packet.aux_color = color,
        }
    }
}
