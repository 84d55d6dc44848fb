use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    blend::BlendMode,
    channels::{ChannelDebug, ChannelTable, MaterialChannels},
    compositor::ShadeComponents,
    evaluator::SampleInput,
};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(why) => write!(f, "Reading settings failed: {}", why),
            SettingsError::Parse(why) => write!(f, "Parsing settings failed: {}", why),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(why) => Some(why),
            SettingsError::Parse(why) => Some(why),
        }
    }
}

/// Blends the first two resolved packets of the batch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BlendSettings {
    pub t: f32,
    pub mode: BlendMode,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SampleSettings {
    #[serde(flatten)]
    pub input: SampleInput,
    pub components: ShadeComponents,
}

/// A material and a batch of samples to evaluate against it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaterialSettings {
    pub log_level: log::LevelFilter,
    pub shader_mode: bool,
    pub baking_mode: bool,
    pub channel_debug: ChannelDebug,
    pub channels: MaterialChannels,
    pub blend: Option<BlendSettings>,
    pub samples: Vec<SampleSettings>,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            log_level: log::LevelFilter::Warn,
            shader_mode: false,
            baking_mode: false,
            channel_debug: ChannelDebug::default(),
            channels: MaterialChannels::default(),
            blend: None,
            samples: Vec::new(),
        }
    }
}

impl MaterialSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let file = std::fs::File::open(path).map_err(SettingsError::Io)?;
        serde_yaml::from_reader(std::io::BufReader::new(file)).map_err(SettingsError::Parse)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        serde_yaml::from_str(yaml).map_err(SettingsError::Parse)
    }

    /// Returns the channel table a host would hold for this material.
    pub fn channel_table(&self) -> ChannelTable {
        ChannelTable::from_material(
            self.shader_mode,
            self.baking_mode,
            self.channel_debug,
            &self.channels,
        )
    }

    pub fn inputs(&self) -> Vec<SampleInput> {
        self.samples.iter().map(|s| s.input).collect()
    }

    pub fn components(&self) -> Vec<ShadeComponents> {
        self.samples.iter().map(|s| s.components).collect()
    }
}
