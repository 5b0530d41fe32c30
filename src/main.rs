use clap::Parser;
use strconv_kit::utils::logger;
use strconv_kit::{config::cli::write_output, CliConfig, ConvertError, Operand};

/// Exit code when the result cannot be written.
const EXIT_OUTPUT: i32 = 3;

fn report(e: &ConvertError, exit_code: i32) -> i32 {
    tracing::error!(
        "Conversion failed: {} (Category: {:?}, exit code {})",
        e,
        e.category(),
        exit_code
    );
    eprintln!("error: {}", e);
    eprintln!("hint: {}", e.recovery_suggestion());
    exit_code
}

fn run(config: &CliConfig) -> i32 {
    if let Some(path) = config.shadowed_input() {
        tracing::warn!(
            "Ignoring --input {}: a positional operand was given",
            path.display()
        );
    }
    let operand = match Operand::resolve(config.command.inline_operand(), config.input.as_deref()) {
        Ok(operand) => operand,
        Err(e) => return report(&e, e.exit_code()),
    };
    tracing::debug!("Operand is {} bytes", operand.as_bytes().len());

    let result = match config.command.execute(&operand) {
        Ok(result) => result,
        Err(e) => return report(&e, e.exit_code()),
    };

    if let Err(e) = write_output(config.output.as_deref(), &result, config.command.emits_text()) {
        return report(&e, EXIT_OUTPUT);
    }
    if let Some(path) = &config.output {
        tracing::info!("Output saved to: {}", path.display());
    }
    0
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    std::process::exit(run(&config));
}
