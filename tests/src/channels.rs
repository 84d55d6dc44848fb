#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;
    use tsuya::{
        channels::{
            Channel, ChannelDebug, ChannelError, ChannelKind, ChannelTable, ChannelValue,
            MaterialChannels, ObjectChannelState,
        },
        math::Spectrum,
        packet::{EffectValue, PacketEffect, ShadingPacket},
    };

    #[test]
    fn defaults() {
        let state = ObjectChannelState::build(&ChannelTable::with_defaults()).unwrap();
        assert!(!state.shader_mode);
        assert!(!state.baking_mode);
        assert_eq!(state.channel_debug, ChannelDebug::Off);
        assert_eq!(state.base, MaterialChannels::default());
    }

    #[test]
    fn missing_channel_is_named() {
        for channel in Channel::iter() {
            for name in channel.slot_names() {
                let mut table = ChannelTable::with_defaults();
                table.remove(&name);

                let err = ObjectChannelState::build(&table).unwrap_err();
                assert_eq!(err, ChannelError::Missing(name.clone()));
                assert!(err.to_string().contains(&name));
            }
        }
    }

    #[test]
    fn wrong_kind_is_named() {
        let mut table = ChannelTable::with_defaults();
        table.set("metallic".into(), ChannelValue::Boolean(true));

        let err = ObjectChannelState::build(&table).unwrap_err();
        assert_eq!(
            err,
            ChannelError::TypeMismatch {
                name: "metallic".into(),
                expected: ChannelKind::Float,
                found: ChannelValue::Boolean(true),
            }
        );
        assert!(err.to_string().contains("metallic"));
    }

    #[test]
    fn debug_index_clamped() {
        for (index, expected) in [
            (-4, ChannelDebug::Off),
            (0, ChannelDebug::Off),
            (2, ChannelDebug::Metallic),
            (8, ChannelDebug::AuxRgb),
            (42, ChannelDebug::AuxRgb),
        ] {
            let mut table = ChannelTable::with_defaults();
            table.set("channelDebug".into(), ChannelValue::Integer(index));
            let state = ObjectChannelState::build(&table).unwrap();
            assert_eq!(state.channel_debug, expected, "index {}", index);
        }
    }

    #[test]
    fn colors_read_per_component() {
        let mut table = ChannelTable::with_defaults();
        table.set("emissiveColor.G".into(), ChannelValue::Float(0.25));
        table.set_bool(Channel::ShaderMode, true);

        let state = ObjectChannelState::build(&table).unwrap();
        assert!(state.shader_mode);
        assert_eq!(state.base.emissive_color, Spectrum::new(0.0, 0.25, 0.0));
    }

    #[test]
    fn effects_by_name() {
        let names = [
            "unrealBaseColor",
            "unrealMetallic",
            "unrealSpecular",
            "unrealRoughness",
            "unrealEmissiveColor",
            "unrealOpacity",
            "unrealTessMultiplier",
            "unrealAuxRGB",
        ];
        let mut packet = ShadingPacket::default();
        for (i, (effect, name)) in PacketEffect::iter().zip(names).enumerate() {
            assert_eq!(effect.to_string(), name);
            assert_eq!(PacketEffect::from_str(name), Ok(effect));

            let v = i as f32 / 10.0;
            effect.set(&mut packet, EffectValue::Scalar(v));
            let read = match effect.get(&packet) {
                EffectValue::Scalar(s) => s,
                EffectValue::Color(c) => {
                    assert_eq!(c, Spectrum::splat(v));
                    c.g
                }
            };
            assert_eq!(read, v);
        }
        assert_eq!(PacketEffect::iter().count(), names.len());
        assert!(PacketEffect::from_str("pbrBaseColor").is_err());
        assert_eq!(packet.opacity, 0.5);
        assert_eq!(packet.aux_color, Spectrum::splat(0.7));
    }
}
