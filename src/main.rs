//! Hillwaves - headless driver for the hills-and-waves scene
//!
//! Runs the wave simulation at a fixed frame rate, dropping random ripples
//! on the surface, and optionally records every frame as a heightmap PNG.

mod cli;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use cli::Args;
use hillwaves::recording::HeightmapRecorder;
use hillwaves::scene::HillsAndWaves;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.scene_params().context("invalid scene parameters")?;

    log::info!(
        "Wave grid {}x{}, spacing {} m, step {} s, speed {} m/s, damping {} (Courant {:.3})",
        params.waves.rows,
        params.waves.cols,
        params.waves.spacing_m,
        params.waves.time_step_s,
        params.waves.speed_m_per_s,
        params.waves.damping,
        params.waves.courant_number()
    );
    if params.waves.courant_number() >= std::f32::consts::FRAC_1_SQRT_2 {
        log::warn!("Courant number above 1/sqrt(2): the simulation will blow up");
    }

    let mut scene = HillsAndWaves::new(&params);
    let mut recorder = if args.record {
        let recorder = HeightmapRecorder::new(&params.recording)
            .context("failed to prepare recording directory")?;
        log::info!("Recording frames to {}", recorder.frames_dir().display());
        Some(recorder)
    } else {
        None
    };

    let total_frames = params.recording.total_frames();
    let frame_dt = params.recording.frame_interval_s();
    let fps = params.recording.fps as usize;
    log::info!(
        "Simulating {} s at {} FPS ({} frames)",
        params.recording.duration_secs,
        fps,
        total_frames
    );

    let start = Instant::now();
    let mut ripples = 0;

    for frame in 1..=total_frames {
        let time_s = frame as f32 * frame_dt;
        let stats = scene.frame_move(time_s, frame_dt);
        if stats.ripple.is_some() {
            ripples += 1;
        }

        if let Some(recorder) = recorder.as_mut() {
            recorder
                .capture(&scene.waves)
                .with_context(|| format!("failed to record frame {frame}"))?;
        }

        if frame % fps == 0 {
            log::info!(
                "t={:.2}s steps={} ripples={} energy={:.3} max|h|={:.3}",
                time_s,
                scene.waves.steps_taken(),
                ripples,
                scene.waves.total_energy(),
                scene.waves.max_height()
            );
        }
    }

    let elapsed = start.elapsed();
    log::info!(
        "Done: {} frames, {} steps in {:.2} ms ({:.3} ms/step)",
        total_frames,
        scene.waves.steps_taken(),
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1000.0 / scene.waves.steps_taken().max(1) as f64
    );
    if let Some(recorder) = &recorder {
        log::info!("Wrote {} frames", recorder.frames_written());
    }

    Ok(())
}
