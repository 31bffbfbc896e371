//! Headless walkthrough demo
//!
//! Builds a scene from geometry files given on the command line, scatters a
//! small forest, then drives the camera through a scripted set of input
//! events while printing the resulting view poses. With `--console` it keeps
//! running and accepts `help` / `ambience <v>` / `quit` on stdin.
//!
//! Usage: forest_walk <subject.obj> [vegetation.obj ...] [--seed N] [--console]

use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;

use anyhow::{bail, Context, Result};
use cgmath::Deg;
use log::info;

use sylva::prelude::*;

struct Args {
    subject: PathBuf,
    vegetation: Vec<PathBuf>,
    seed: u64,
    console: bool,
}

fn parse_args() -> Result<Args> {
    let mut subject = None;
    let mut vegetation = Vec::new();
    let mut seed = 1;
    let mut console = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = value.parse().context("--seed needs an integer")?;
            }
            "--console" => console = true,
            _ => {
                if subject.is_none() {
                    subject = Some(PathBuf::from(arg));
                } else {
                    vegetation.push(PathBuf::from(arg));
                }
            }
        }
    }

    let Some(subject) = subject else {
        bail!("usage: forest_walk <subject.obj> [vegetation.obj ...] [--seed N] [--console]");
    };
    Ok(Args {
        subject,
        vegetation,
        seed,
        console,
    })
}

fn build_state(args: &Args) -> Result<SceneState> {
    let options = LoadOptions::default();
    let mut scene = Scene::new();

    let free = scene.add(SceneObject::new("free_camera", Mesh::default()).with_hidden(true));

    let subject_mesh = Mesh::load(&args.subject, &options)
        .with_context(|| format!("loading subject `{}`", args.subject.display()))?;
    let subject = scene.add(
        SceneObject::new("subject", subject_mesh)
            .with_model_yaw_offset(Deg(180.0))
            .with_speed(2.0)
            .with_eyes_height(2.5),
    );

    if !args.vegetation.is_empty() {
        let kinds: Vec<Kind> = args
            .vegetation
            .iter()
            .map(|path| {
                let name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "vegetation".to_string());
                Kind::new(&name, vec![path.clone()])
            })
            .collect();
        let mut builder = ForestBuilder::new(args.seed, options);
        let handles = builder.scatter(
            &mut scene,
            &kinds,
            &Scatter {
                count: 30,
                half_extent: 60.0,
                ground_y: 0.0,
                random_yaw: true,
                scale_range: Some((0.7, 1.6)),
            },
        )?;
        info!("scattered {} vegetation instance(s)", handles.len());
    }

    let rig = CameraRig::new(free, subject);
    Ok(SceneState::new(scene, rig))
}

fn print_pose(state: &SceneState, label: &str) {
    let ViewPose { eye, target } = state.view();
    println!(
        "{label:<14} eye ({:7.2} {:7.2} {:7.2})  target ({:7.2} {:7.2} {:7.2})",
        eye.x, eye.y, eye.z, target.x, target.y, target.z
    );
}

fn scripted_walk(state: &mut SceneState) {
    // fly forward, look around, then ride the subject through both framings
    let script = [
        ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)),
        ControlEvent::Tick,
        ControlEvent::Tick,
        ControlEvent::MouseLook { dx: 120.0, dy: -40.0 },
        ControlEvent::Tick,
        ControlEvent::Tick,
        ControlEvent::KeyUp(MoveKey::Forward),
        ControlEvent::KeyDown(KeyAction::CycleCamera),
        ControlEvent::KeyDown(KeyAction::Move(MoveKey::Forward)),
        ControlEvent::Tick,
        ControlEvent::Tick,
        ControlEvent::KeyDown(KeyAction::CycleCamera),
        ControlEvent::Tick,
        ControlEvent::Tick,
        ControlEvent::KeyUp(MoveKey::Forward),
        ControlEvent::KeyDown(KeyAction::CycleCamera),
    ];

    for event in script {
        state.step(event);
        if matches!(event, ControlEvent::Tick | ControlEvent::KeyDown(KeyAction::CycleCamera)) {
            let label = format!("{:?}", state.rig.mode());
            print_pose(state, &label);
        }
    }
}

fn console_loop(state: &mut SceneState) {
    let commands = spawn_console();
    println!("console ready; type `help`");
    loop {
        match commands.try_recv() {
            Ok(command) => {
                if !state.apply_console(command) {
                    info!("quit requested");
                    break;
                }
                if let ConsoleCommand::Ambience(_) = command {
                    println!("ambient = {:.2}", state.ambient);
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }
        state.step(ControlEvent::Tick);
        std::thread::sleep(TICK_INTERVAL);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let mut state = build_state(&args)?;
    info!(
        "scene ready: {} object(s), seed {}",
        state.scene.len(),
        args.seed
    );

    scripted_walk(&mut state);

    if args.console {
        console_loop(&mut state);
    }
    Ok(())
}
