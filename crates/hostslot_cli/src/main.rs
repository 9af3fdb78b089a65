//! CLI smoke entry point for `hostslot_core`.
//!
//! - No arguments: print ping and wrapper version.
//! - `check <experience_version> [wrapper_version]`: run the version gate,
//!   exit 1 on a hard incompatibility and 2 on bad usage.
//!
//! Set `HOSTSLOT_LOG_DIR` to an absolute directory to keep the gate's log
//! events; the level defaults to the build mode's level.

use std::process::ExitCode;

const LOG_DIR_ENV: &str = "HOSTSLOT_LOG_DIR";
const EXIT_INCOMPATIBLE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = hostslot_core::init_logging(hostslot_core::default_log_level(), &log_dir)
        {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(run(&args))
}

fn run(args: &[String]) -> u8 {
    match args {
        [] => {
            println!("hostslot_core ping={}", hostslot_core::ping());
            println!("hostslot_core version={}", hostslot_core::wrapper_version());
            0
        }
        [command, experience] if command == "check" => {
            report(experience, hostslot_core::wrapper_version())
        }
        [command, experience, wrapper] if command == "check" => report(experience, wrapper),
        _ => {
            eprintln!("usage: hostslot_cli [check <experience_version> [wrapper_version]]");
            EXIT_USAGE
        }
    }
}

fn report(experience: &str, wrapper: &str) -> u8 {
    let compatible = hostslot_core::validate_versions(experience, wrapper);
    println!(
        "experience={experience} wrapper={wrapper} result={}",
        if compatible { "compatible" } else { "incompatible" }
    );
    if compatible {
        0
    } else {
        EXIT_INCOMPATIBLE
    }
}

#[cfg(test)]
mod tests {
    use super::{run, EXIT_INCOMPATIBLE, EXIT_USAGE};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_arguments_prints_version() {
        assert_eq!(run(&[]), 0);
    }

    #[test]
    fn check_maps_gate_outcome_to_exit_code() {
        assert_eq!(run(&args(&["check", "1.2.0", "1.2.9"])), 0);
        assert_eq!(run(&args(&["check", "1.2.0", "1.4.0"])), 0);
        assert_eq!(run(&args(&["check", "1.2.0", "2.0.0"])), EXIT_INCOMPATIBLE);
        assert_eq!(
            run(&args(&["check", "1.2.0", "not-a-version"])),
            EXIT_INCOMPATIBLE
        );
    }

    #[test]
    fn check_defaults_wrapper_to_own_version() {
        let own = hostslot_core::wrapper_version().to_string();
        assert_eq!(run(&args(&["check", own.as_str()])), 0);
    }

    #[test]
    fn unknown_command_is_usage_error() {
        assert_eq!(run(&args(&["claim", "hero"])), EXIT_USAGE);
        assert_eq!(run(&args(&["check"])), EXIT_USAGE);
    }
}
