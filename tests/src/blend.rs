#[cfg(test)]
mod tests {
    use crate::common::{rng, unit_packet};
    use approx::assert_abs_diff_eq;
    use strum::IntoEnumIterator;
    use tsuya::blend::{blend_packets, BlendMode, StandardBlender};

    #[test]
    fn endpoints() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = unit_packet(&mut rng);
            let b = unit_packet(&mut rng);
            for mode in BlendMode::iter() {
                assert_eq!(blend_packets(&StandardBlender, &a, &b, 0.0, mode), a);
                assert_eq!(blend_packets(&StandardBlender, &a, &b, 1.0, mode), b);
            }
        }
    }

    #[test]
    fn linear_weighted_sum() {
        let mut rng = rng();
        for i in 0..=16 {
            let t = i as f32 / 16.0;
            let a = unit_packet(&mut rng);
            let b = unit_packet(&mut rng);
            let p = blend_packets(&StandardBlender, &a, &b, t, BlendMode::Linear);

            assert_abs_diff_eq!(p.metallic, a.metallic * (1.0 - t) + b.metallic * t);
            assert_abs_diff_eq!(p.opacity, a.opacity * (1.0 - t) + b.opacity * t);
            assert_abs_diff_eq!(
                p.base_color,
                a.base_color * (1.0 - t) + b.base_color * t
            );
        }
    }

    #[test]
    fn stays_between_inputs() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = unit_packet(&mut rng);
            let b = unit_packet(&mut rng);
            for mode in BlendMode::iter() {
                for i in 0..=8 {
                    let t = i as f32 / 8.0;
                    let p = blend_packets(&StandardBlender, &a, &b, t, mode);
                    let lo = a.roughness.min(b.roughness) - 1e-6;
                    let hi = a.roughness.max(b.roughness) + 1e-6;
                    assert!(
                        (lo..=hi).contains(&p.roughness),
                        "{} at t={} left [{}, {}]: {}",
                        mode,
                        t,
                        lo,
                        hi,
                        p.roughness
                    );
                }
            }
        }
    }

    #[test]
    fn smooth_midpoint() {
        for mode in BlendMode::iter() {
            assert_abs_diff_eq!(mode.weight(0.5), 0.5);
        }
    }
}
