use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::{Channel, ChannelDebug, ChannelKind, ChannelValue, MaterialChannels};
use crate::{math::Spectrum, tsuya_debug, tsuya_trace};

/// Host side access to the channel values of one evaluation context.
pub trait ChannelReader {
    /// Returns the value in the slot `name` or `None` if the host doesn't know the slot.
    fn read(&self, name: &str) -> Option<ChannelValue>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// The host couldn't resolve the slot.
    Missing(String),
    /// The slot holds a value that can't be read as the channel's kind.
    TypeMismatch {
        name: String,
        expected: ChannelKind,
        found: ChannelValue,
    },
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::Missing(name) => write!(f, "Channel '{}' is not defined", name),
            ChannelError::TypeMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "Channel '{}' should be {} but holds {:?}",
                name, expected, found
            ),
        }
    }
}

impl std::error::Error for ChannelError {}

/// The object level channel values, read once per evaluation pass.
///
/// Immutable once built so samples can be evaluated against it from any
/// number of threads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectChannelState {
    pub shader_mode: bool,
    pub baking_mode: bool,
    pub channel_debug: ChannelDebug,
    /// Fallback values for channels that aren't driven at a sample
    pub base: MaterialChannels,
}

impl ObjectChannelState {
    /// Reads every material channel from `reader`, each slot exactly once.
    ///
    /// Fails on the first slot the host can't resolve or that holds the wrong kind of value.
    pub fn build(reader: &impl ChannelReader) -> Result<Self, ChannelError> {
        let state = Self {
            shader_mode: read_bool(reader, Channel::ShaderMode)?,
            baking_mode: read_bool(reader, Channel::BakingMode)?,
            channel_debug: ChannelDebug::from_index(read_i32(reader, Channel::ChannelDebug)?),
            base: MaterialChannels {
                base_color: read_color(reader, Channel::BaseColor)?,
                metallic: read_f32(reader, Channel::Metallic)?,
                specular: read_f32(reader, Channel::Specular)?,
                roughness: read_f32(reader, Channel::Roughness)?,
                emissive_color: read_color(reader, Channel::EmissiveColor)?,
                opacity: read_f32(reader, Channel::Opacity)?,
                tess_multiplier: read_f32(reader, Channel::TessMultiplier)?,
                aux_color: read_color(reader, Channel::AuxRgb)?,
            },
        };

        tsuya_debug!(
            "Channels read: shader mode {}, baking mode {}, debug {}",
            state.shader_mode,
            state.baking_mode,
            state.channel_debug
        );
        tsuya_trace!("Base values {:?}", state.base);

        Ok(state)
    }
}

fn read_slot(reader: &impl ChannelReader, name: &str) -> Result<ChannelValue, ChannelError> {
    reader
        .read(name)
        .ok_or_else(|| ChannelError::Missing(name.to_string()))
}

fn mismatch(name: &str, expected: ChannelKind, found: ChannelValue) -> ChannelError {
    ChannelError::TypeMismatch {
        name: name.to_string(),
        expected,
        found,
    }
}

fn read_bool(reader: &impl ChannelReader, channel: Channel) -> Result<bool, ChannelError> {
    let name = channel.to_string();
    match read_slot(reader, &name)? {
        ChannelValue::Boolean(v) => Ok(v),
        ChannelValue::Integer(v) => Ok(v != 0),
        found => Err(mismatch(&name, ChannelKind::Boolean, found)),
    }
}

fn read_i32(reader: &impl ChannelReader, channel: Channel) -> Result<i32, ChannelError> {
    let name = channel.to_string();
    match read_slot(reader, &name)? {
        ChannelValue::Integer(v) => Ok(v),
        // Hosts that store everything as floats truncate
        ChannelValue::Float(v) => Ok(v as i32),
        found => Err(mismatch(&name, ChannelKind::Integer, found)),
    }
}

fn read_float_slot(reader: &impl ChannelReader, name: &str) -> Result<f32, ChannelError> {
    match read_slot(reader, name)? {
        ChannelValue::Float(v) => Ok(v),
        ChannelValue::Integer(v) => Ok(v as f32),
        found => Err(mismatch(name, ChannelKind::Float, found)),
    }
}

fn read_f32(reader: &impl ChannelReader, channel: Channel) -> Result<f32, ChannelError> {
    read_float_slot(reader, &channel.to_string())
}

fn read_color(
    reader: &impl ChannelReader,
    channel: Channel,
) -> Result<Spectrum<f32>, ChannelError> {
    let mut color = Spectrum::zeros();
    for (i, name) in channel.slot_names().iter().enumerate() {
        color[i] = read_float_slot(reader, name).map_err(|why| match why {
            ChannelError::TypeMismatch { name, found, .. } => ChannelError::TypeMismatch {
                name,
                expected: ChannelKind::Color,
                found,
            },
            why => why,
        })?;
    }
    Ok(color)
}

/// An in-memory host channel table keyed by slot name.
#[derive(Clone, Debug, Default)]
pub struct ChannelTable {
    slots: HashMap<String, ChannelValue>,
}

impl ChannelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with every channel at its default value.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for channel in Channel::iter() {
            for (name, value) in channel.default_slots() {
                table.set(name, value);
            }
        }
        table
    }

    /// Creates a table holding the given mode flags and base values.
    pub fn from_material(
        shader_mode: bool,
        baking_mode: bool,
        channel_debug: ChannelDebug,
        base: &MaterialChannels,
    ) -> Self {
        let mut table = Self::new();
        table.set_bool(Channel::ShaderMode, shader_mode);
        table.set_bool(Channel::BakingMode, baking_mode);
        table.set(
            Channel::ChannelDebug.to_string(),
            ChannelValue::Integer(channel_debug.index()),
        );
        table.set_color(Channel::BaseColor, base.base_color);
        table.set_f32(Channel::Metallic, base.metallic);
        table.set_f32(Channel::Specular, base.specular);
        table.set_f32(Channel::Roughness, base.roughness);
        table.set_color(Channel::EmissiveColor, base.emissive_color);
        table.set_f32(Channel::Opacity, base.opacity);
        table.set_f32(Channel::TessMultiplier, base.tess_multiplier);
        table.set_color(Channel::AuxRgb, base.aux_color);
        table
    }

    pub fn set(&mut self, name: String, value: ChannelValue) {
        self.slots.insert(name, value);
    }

    pub fn set_bool(&mut self, channel: Channel, value: bool) {
        self.set(channel.to_string(), ChannelValue::Boolean(value));
    }

    pub fn set_f32(&mut self, channel: Channel, value: f32) {
        self.set(channel.to_string(), ChannelValue::Float(value));
    }

    pub fn set_color(&mut self, channel: Channel, value: Spectrum<f32>) {
        for (i, name) in channel.slot_names().into_iter().enumerate() {
            self.set(name, ChannelValue::Float(value[i]));
        }
    }

    /// Removes the slot `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<ChannelValue> {
        self.slots.remove(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl ChannelReader for ChannelTable {
    fn read(&self, name: &str) -> Option<ChannelValue> {
        self.slots.get(name).copied()
    }
}
