//! Paddle Bounce entry point
//!
//! Runs a headless session for the configured number of frames against a
//! counting canvas and logs the outcome.
//!
//! Usage: `paddle-bounce [settings.json] [--autopilot] [--layout solo|versus]`

use std::path::PathBuf;
use std::process::ExitCode;

use paddle_bounce::platform::{CountingCanvas, FixedFrames, HeldKeys};
use paddle_bounce::{Layout, Session, Settings};

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Args {
    settings: Option<PathBuf>,
    autopilot: bool,
    layout: Option<Layout>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--autopilot" => parsed.autopilot = true,
            "--layout" => {
                let value = args.next().ok_or("--layout needs a value")?;
                let layout =
                    Layout::from_str(&value).ok_or(format!("unknown layout '{value}'"))?;
                parsed.layout = Some(layout);
            }
            other => parsed.settings = Some(PathBuf::from(other)),
        }
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Paddle Bounce (headless) starting...");

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    settings.autopilot |= args.autopilot;
    if let Some(layout) = args.layout {
        settings.layout = layout;
    }

    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {}", e);
        return ExitCode::FAILURE;
    }

    let mut session = Session::new(&settings);
    let mut clock = FixedFrames::new(settings.frames);
    let mut canvas = CountingCanvas::new();
    let keys = HeldKeys::new();

    let summary = session.run(&mut clock, &keys, &mut canvas);

    let ball = session.ball();
    log::info!(
        "Final ball position ({:.2}, {:.2}), angle {:.4}",
        ball.position().x,
        ball.position().y,
        ball.angle()
    );
    log::info!("{} draw calls issued", canvas.total());
    println!(
        "ticks={} wall_bounces={} paddle_bounces={}",
        summary.ticks, summary.wall_bounces, summary.paddle_bounces
    );

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_is_default() {
        assert_eq!(args(&[]), Ok(Args::default()));
    }

    #[test]
    fn test_layout_flag() {
        let parsed = args(&["cfg.json", "--layout", "versus", "--autopilot"]).unwrap();
        assert_eq!(parsed.settings, Some(PathBuf::from("cfg.json")));
        assert_eq!(parsed.layout, Some(Layout::Versus));
        assert!(parsed.autopilot);
    }

    #[test]
    fn test_bad_layout_is_error() {
        assert!(args(&["--layout", "tiles"]).is_err());
        assert!(args(&["--layout"]).is_err());
    }
}
