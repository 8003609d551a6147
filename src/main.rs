use std::io;
use std::process::ExitCode;

use ctrans::cli;
use ctrans::run::run;

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli::build_cli().get_matches();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(&matches, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
