use std::time::Instant;
use tsuya::{
    channels::{ChannelDebug, ChannelOverrides, MaterialChannels, ObjectChannelState},
    compositor::{composite, ShadeComponents},
    math::Spectrum,
    packet::ShadingPacket,
    resolver::{resolve, SurfaceParameters},
};

const ITERATIONS: usize = 5000000;

fn report(name: &str, elapsed_ns: u128) {
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_sample = (elapsed_ns as f64) / (ITERATIONS as f64);
    println!(
        "{:<10} took {:6.1} ms total, {:0.2} ns per sample",
        name, elapsed_ms, ns_per_sample
    );
}

fn bench_resolve(state: &ObjectChannelState, packet: &ShadingPacket) {
    let overrides = ChannelOverrides::default();
    let mut packet = *packet;
    let start = Instant::now();
    for i in 0..ITERATIONS {
        packet.roughness = (i % 1024) as f32 / 1023.0;
        let r = resolve(state, &packet, &overrides, SurfaceParameters::default());
        if r.surface.roughness.is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    report("Resolve", start.elapsed().as_nanos());
}

fn bench_shade(state: &ObjectChannelState, packet: &ShadingPacket) {
    let overrides = ChannelOverrides::default();
    let mut components = ShadeComponents {
        diffuse: Spectrum::new(0.3, 0.5, 0.7),
        specular: Spectrum::splat(0.1),
        reflection: Spectrum::splat(0.05),
        ..ShadeComponents::default()
    };
    let mut packet = *packet;
    let start = Instant::now();
    for i in 0..ITERATIONS {
        packet.metallic = (i % 1024) as f32 / 1023.0;
        let r = resolve(state, &packet, &overrides, SurfaceParameters::default());
        components.diffuse = r.surface.diffuse_color;
        let color = composite(&components, &r.packet, ChannelDebug::Off);
        if color.r.is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    report("Shade", start.elapsed().as_nanos());
}

fn main() {
    let packet = ShadingPacket {
        base_color: Spectrum::new(0.8, 0.2, 0.2),
        metallic: 0.25,
        roughness: 0.4,
        ..ShadingPacket::default()
    };

    for (name, shader_mode, baking_mode) in [
        ("Material", false, false),
        ("Bake", true, true),
        ("Render", true, false),
    ] {
        println!("{}", name);
        let state = ObjectChannelState {
            shader_mode,
            baking_mode,
            channel_debug: ChannelDebug::Off,
            base: MaterialChannels::default(),
        };
        bench_resolve(&state, &packet);
        bench_shade(&state, &packet);
    }
}
