#[cfg(test)]
mod tests {
    use crate::common::{rng, state, unit_packet};
    use approx::assert_abs_diff_eq;
    use rand::Rng;
    use tsuya::{
        blend::{blend_packets, BlendMode, StandardBlender},
        channels::{Channel, ChannelDebug, ChannelOverrides, ChannelTable, ObjectChannelState},
        compositor::{composite, ShadeComponents},
        evaluator::{Evaluator, SampleInput},
        math::Spectrum,
    };

    fn random_components(rng: &mut impl Rng) -> ShadeComponents {
        let mut c = || Spectrum::<f32>::new(rng.gen(), rng.gen(), rng.gen()) * 2.0;
        ShadeComponents {
            diffuse: c(),
            specular: c(),
            reflection: c(),
            transmission: c(),
            subsurface: c(),
            luminance: c(),
        }
    }

    #[test]
    fn metallic_debug_ignores_lighting() {
        let mut rng = rng();
        for _ in 0..1000 {
            let packet = unit_packet(&mut rng);
            let components = random_components(&mut rng);
            assert_eq!(
                composite(&components, &packet, ChannelDebug::Metallic),
                Spectrum::splat(packet.metallic)
            );
        }
    }

    #[test]
    fn off_ignores_packet() {
        let mut rng = rng();
        let components = random_components(&mut rng);
        let expected = composite(&components, &unit_packet(&mut rng), ChannelDebug::Off);
        for _ in 0..100 {
            let out = composite(&components, &unit_packet(&mut rng), ChannelDebug::Off);
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn shading_is_nonnegative() {
        let mut rng = rng();
        for _ in 0..1000 {
            let out = composite(
                &random_components(&mut rng),
                &unit_packet(&mut rng),
                ChannelDebug::Off,
            );
            assert!(out.r >= 0.0 && out.g >= 0.0 && out.b >= 0.0);
            assert!(out.is_finite());
        }
    }

    #[test]
    fn render_debug_shows_cubed_metallic() {
        let mut rng = rng();
        let state = state(true, false);
        let evaluator = Evaluator::new(&state);
        let inputs: Vec<SampleInput> = (0..64)
            .map(|_| SampleInput {
                packet: unit_packet(&mut rng),
                overrides: ChannelOverrides::default(),
            })
            .collect();

        let resolved = evaluator.resolve_all(&inputs);
        let components = vec![ShadeComponents::default(); inputs.len()];
        let shaded = evaluator.shade_all(&resolved, &components, ChannelDebug::Metallic);
        for (input, color) in inputs.iter().zip(&shaded) {
            let m = input.packet.metallic;
            assert_abs_diff_eq!(*color, Spectrum::splat(m * m * m), epsilon = 1e-6);
        }
    }

    #[test]
    fn host_pipeline() {
        let mut table = ChannelTable::with_defaults();
        table.set_bool(Channel::ShaderMode, true);
        table.set_f32(Channel::Roughness, 0.8);
        let state = ObjectChannelState::build(&table).unwrap();
        let evaluator = Evaluator::new(&state);

        let mut rng = rng();
        let a = unit_packet(&mut rng);
        let b = unit_packet(&mut rng);
        let inputs = [
            SampleInput {
                packet: a,
                overrides: ChannelOverrides::default(),
            },
            SampleInput {
                packet: blend_packets(&StandardBlender, &a, &b, 1.0, BlendMode::Smootherstep),
                overrides: ChannelOverrides::default(),
            },
        ];
        let resolved = evaluator.resolve_all(&inputs);
        let direct = evaluator.resolve_all(&[SampleInput {
            packet: b,
            overrides: ChannelOverrides::default(),
        }]);
        assert_eq!(resolved[1], direct[0]);

        let components = [random_components(&mut rng), random_components(&mut rng)];
        let shaded = evaluator.shade_all(&resolved, &components, state.channel_debug);
        assert_eq!(shaded.len(), 2);
        assert!(shaded.iter().all(|c| c.is_finite()));
    }
}
