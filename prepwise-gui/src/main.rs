#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size};
use tracing::error;

use prepwise_ui::{component::text, font, theme};

use prepwise_gui::{
    auth::message::Route,
    dir::PrepwiseDirectory,
    gui::{Config, GUI},
    logger, VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(PrepwiseDirectory),
    Start(Route),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: prepwise [OPTIONS]

Options:
    --datadir <PATH>    Path of prepwise datadir
    -v, --version       Display prepwise version
    -h, --help          Print help
    --sign-in           Start on the sign-in page (default)
    --sign-up           Start on the sign-up page
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(PrepwiseDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--sign-in" {
            res.push(Arg::Start(Route::SignIn));
        } else if arg == "--sign-up" {
            res.push(Arg::Start(Route::SignUp));
        } else if i > 0 && arg.starts_with("--") {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = match args.as_slice() {
        [] => Config::new(PrepwiseDirectory::new_default()?, None),
        [Arg::Start(route)] => Config::new(PrepwiseDirectory::new_default()?, Some(*route)),
        [Arg::DatadirPath(datadir_path)] => Config::new(datadir_path.clone(), None),
        [Arg::DatadirPath(datadir_path), Arg::Start(route)]
        | [Arg::Start(route), Arg::DatadirPath(datadir_path)] => {
            Config::new(datadir_path.clone(), Some(*route))
        }
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    let log_level = logger::parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("PrepWise".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 520.0,
            height: 760.0,
        },
        min_size: Some(Size {
            width: 460.0,
            height: 640.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["prepwise".into(), "--nonsense".into()]).is_err());
        assert!(parse_args(vec!["prepwise".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::Start(Route::SignUp)]),
            parse_args(vec!["prepwise".into(), "--sign-up".into()]).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(PrepwiseDirectory::new(PathBuf::from("hello"))),
                Arg::Start(Route::SignIn)
            ]),
            parse_args(
                "prepwise --datadir hello --sign-in"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::Start(Route::SignIn),
                Arg::DatadirPath(PrepwiseDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(
                "prepwise --sign-in --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
