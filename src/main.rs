use reveal_chess::cli::cli_config::CliConfig;
use reveal_chess::cli::command_loop::run_stdio_loop;
use reveal_chess::cli::stderr_logger;

fn main() -> std::io::Result<()> {
    let config = CliConfig::from_env();
    if stderr_logger::init(config.log_level).is_err() {
        eprintln!("logger already installed");
    }
    run_stdio_loop(&config)
}
