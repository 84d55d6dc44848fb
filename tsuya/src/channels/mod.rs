mod snapshot;

pub use snapshot::{ChannelError, ChannelReader, ChannelTable, ObjectChannelState};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, EnumVariantNames, IntoEnumIterator};

use crate::math::Spectrum;

/// The channels a material exposes to the host, named as the host knows them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Channel {
    #[strum(serialize = "shaderMode")]
    ShaderMode,
    #[strum(serialize = "bakingMode")]
    BakingMode,
    #[strum(serialize = "baseColor")]
    BaseColor,
    #[strum(serialize = "metallic")]
    Metallic,
    #[strum(serialize = "specular")]
    Specular,
    #[strum(serialize = "roughness")]
    Roughness,
    #[strum(serialize = "emissiveColor")]
    EmissiveColor,
    #[strum(serialize = "uOpacity")]
    Opacity,
    #[strum(serialize = "tessMultiplier")]
    TessMultiplier,
    #[strum(serialize = "channelDebug")]
    ChannelDebug,
    #[strum(serialize = "auxRGB")]
    AuxRgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum ChannelKind {
    Boolean,
    Float,
    Integer,
    Color,
}

/// A single value as the host stores it in a channel slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChannelValue {
    Boolean(bool),
    Float(f32),
    Integer(i32),
}

const COLOR_COMPONENTS: [&str; 3] = ["R", "G", "B"];

impl Channel {
    pub fn kind(self) -> ChannelKind {
        match self {
            Channel::ShaderMode | Channel::BakingMode => ChannelKind::Boolean,
            Channel::BaseColor | Channel::EmissiveColor | Channel::AuxRgb => ChannelKind::Color,
            Channel::ChannelDebug => ChannelKind::Integer,
            Channel::Metallic
            | Channel::Specular
            | Channel::Roughness
            | Channel::Opacity
            | Channel::TessMultiplier => ChannelKind::Float,
        }
    }

    /// Returns the host slot names of this channel.
    ///
    /// Colors occupy one slot per component, e.g. `baseColor.R`.
    pub fn slot_names(self) -> Vec<String> {
        match self.kind() {
            ChannelKind::Color => COLOR_COMPONENTS
                .iter()
                .map(|c| format!("{}.{}", self, c))
                .collect(),
            _ => vec![self.to_string()],
        }
    }

    /// Returns the default value of each slot of this channel.
    pub fn default_slots(self) -> Vec<(String, ChannelValue)> {
        let defaults = MaterialChannels::default();
        let color = |c: Spectrum<f32>| -> Vec<ChannelValue> {
            c.to_array().iter().map(|&v| ChannelValue::Float(v)).collect()
        };
        let values = match self {
            Channel::ShaderMode | Channel::BakingMode => vec![ChannelValue::Boolean(false)],
            Channel::BaseColor => color(defaults.base_color),
            Channel::Metallic => vec![ChannelValue::Float(defaults.metallic)],
            Channel::Specular => vec![ChannelValue::Float(defaults.specular)],
            Channel::Roughness => vec![ChannelValue::Float(defaults.roughness)],
            Channel::EmissiveColor => color(defaults.emissive_color),
            Channel::Opacity => vec![ChannelValue::Float(defaults.opacity)],
            Channel::TessMultiplier => vec![ChannelValue::Float(defaults.tess_multiplier)],
            Channel::ChannelDebug => vec![ChannelValue::Integer(ChannelDebug::Off.index())],
            Channel::AuxRgb => color(defaults.aux_color),
        };
        self.slot_names().into_iter().zip(values).collect()
    }
}

/// Per-channel visualization that replaces the shaded output.
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
    EnumCount,
    EnumIter,
    EnumString,
    EnumVariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ChannelDebug {
    #[default]
    Off,
    BaseColor,
    Metallic,
    Specular,
    Roughness,
    EmissiveColor,
    Opacity,
    TessMultiplier,
    #[serde(rename = "auxRGB")]
    #[strum(serialize = "auxRGB")]
    AuxRgb,
}

impl ChannelDebug {
    /// Maps the host's integer value to a mode, clamping out of range values.
    pub fn from_index(i: i32) -> Self {
        let i = i.clamp(0, Self::COUNT as i32 - 1);
        Self::iter().nth(i as usize).unwrap_or_default()
    }

    pub fn index(self) -> i32 {
        self as i32
    }
}

/// The values of the material channels.
///
/// Used both for the per-object base values and for the per-sample packet.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaterialChannels {
    pub base_color: Spectrum<f32>,
    pub metallic: f32,
    pub specular: f32,
    pub roughness: f32,
    pub emissive_color: Spectrum<f32>,
    pub opacity: f32,
    pub tess_multiplier: f32,
    pub aux_color: Spectrum<f32>,
}

impl Default for MaterialChannels {
    /// Returns the channel defaults the material is set up with.
    fn default() -> Self {
        Self {
            base_color: Spectrum::ones(),
            metallic: 0.0,
            specular: 0.5,
            roughness: 0.5,
            emissive_color: Spectrum::zeros(),
            opacity: 1.0,
            tess_multiplier: 0.5,
            aux_color: Spectrum::zeros(),
        }
    }
}

/// Per-sample values driven by the host's shading graph.
///
/// `None` means the channel is not driven at the sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelOverrides {
    pub base_color: Option<Spectrum<f32>>,
    pub metallic: Option<f32>,
    pub specular: Option<f32>,
    pub roughness: Option<f32>,
    pub emissive_color: Option<Spectrum<f32>>,
    pub opacity: Option<f32>,
    pub tess_multiplier: Option<f32>,
    pub aux_color: Option<Spectrum<f32>>,
}

impl ChannelOverrides {
    /// Returns `base` with every driven channel replaced by its driven value.
    pub fn merge(&self, base: &MaterialChannels) -> MaterialChannels {
        MaterialChannels {
            base_color: self.base_color.unwrap_or(base.base_color),
            metallic: self.metallic.unwrap_or(base.metallic),
            specular: self.specular.unwrap_or(base.specular),
            roughness: self.roughness.unwrap_or(base.roughness),
            emissive_color: self.emissive_color.unwrap_or(base.emissive_color),
            opacity: self.opacity.unwrap_or(base.opacity),
            tess_multiplier: self.tess_multiplier.unwrap_or(base.tess_multiplier),
            aux_color: self.aux_color.unwrap_or(base.aux_color),
        }
    }

    /// Returns `true` if no channel is driven.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
