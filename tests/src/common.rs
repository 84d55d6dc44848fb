#![cfg(test)]

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tsuya::{
    channels::{ChannelDebug, MaterialChannels, ObjectChannelState},
    math::Spectrum,
    packet::ShadingPacket,
};

pub fn rng() -> Pcg32 {
    Pcg32::seed_from_u64(0x7375_7961)
}

fn unit_color(rng: &mut Pcg32) -> Spectrum<f32> {
    Spectrum::new(rng.gen(), rng.gen(), rng.gen())
}

/// Returns a packet with every component in [0, 1].
pub fn unit_packet(rng: &mut Pcg32) -> ShadingPacket {
    ShadingPacket {
        base_color: unit_color(rng),
        metallic: rng.gen(),
        specular: rng.gen(),
        roughness: rng.gen(),
        emissive_color: unit_color(rng),
        opacity: rng.gen(),
        tess_multiplier: rng.gen(),
        aux_color: unit_color(rng),
    }
}

pub fn state(shader_mode: bool, baking_mode: bool) -> ObjectChannelState {
    ObjectChannelState {
        shader_mode,
        baking_mode,
        channel_debug: ChannelDebug::Off,
        base: MaterialChannels::default(),
    }
}
