use std::path::PathBuf;

use tsuya::{
    blend::{blend_packets, StandardBlender},
    channels::ObjectChannelState,
    evaluator::Evaluator,
    expect,
    settings::MaterialSettings,
    tsuya_error, tsuya_info,
};

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("tsuya.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: tsuya <settings.yaml>");
            std::process::exit(1);
        }
    };

    let settings = expect!(MaterialSettings::load(&path), "Loading settings failed");

    if let Err(why) = setup_logger(settings.log_level) {
        panic!("{}", why);
    };

    let state = match ObjectChannelState::build(&settings.channel_table()) {
        Ok(state) => state,
        Err(why) => {
            tsuya_error!("{}", why);
            std::process::exit(1);
        }
    };
    tsuya_info!(
        "Evaluating {} samples from '{}'",
        settings.samples.len(),
        path.display()
    );

    let evaluator = Evaluator::new(&state);
    let resolved = evaluator.resolve_all(&settings.inputs());
    let shaded = evaluator.shade_all(&resolved, &settings.components(), state.channel_debug);

    for (i, (r, color)) in resolved.iter().zip(&shaded).enumerate() {
        let s = &r.surface;
        println!("sample {}", i);
        println!("  packet      {:?}", r.packet);
        println!(
            "  diffuse     {:?} x {:.4}",
            s.diffuse_color.to_array(),
            s.diffuse_amount
        );
        println!(
            "  specular    {:?} x {:.4}",
            s.specular_color.to_array(),
            s.specular_amount
        );
        println!(
            "  reflection  {:?} x {:.4}",
            s.reflection_color.to_array(),
            s.reflection_amount
        );
        println!(
            "  roughness   {:.4}, exponents {:.1}/{:.1}, dissolve {:.4}",
            s.roughness, s.specular_exponent_u, s.specular_exponent_v, s.dissolve_amount
        );
        if let Some(drivers) = r.drivers {
            println!("  drivers     {:.4} {:.4}", drivers.a, drivers.b);
        }
        println!("  color       {:?}", color.to_array());
    }

    if let (Some(blend), [a, b, ..]) = (settings.blend, resolved.as_slice()) {
        let blended = blend_packets(&StandardBlender, &a.packet, &b.packet, blend.t, blend.mode);
        println!("blend {} at {}", blend.mode, blend.t);
        println!("  packet      {:?}", blended);
    }
}
