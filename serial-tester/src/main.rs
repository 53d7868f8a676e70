// serial-tester-rs/serial-tester/src/main.rs

use std::io;
use std::process::ExitCode;

use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = serial_tester::run_default(&mut out);
    if let Err(e) = &result {
        error!("{}", e);
    }
    // verdicts are informational; a completed run always exits 0
    ExitCode::from(serial_tester::runner::exit_status(&result))
}
