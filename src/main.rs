mod notes;
mod output;
mod table;

use table::TuningConfig;

fn run(config: &TuningConfig) -> output::Result<()> {
    log::info!(
        "Generating {}-TET table: {} notes, reference note {}",
        config.divisions,
        config.note_count,
        config.reference_note
    );

    let table = table::generate(config);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "Rendered table:\n{}",
            output::to_string(&table, &config.declaration)
        );
    }
    output::write_file(&table, config)
}

fn exit_code(result: &output::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let output::Error::OutputWrite { path, .. } = err;
            log::error!("Failed to write {}: {}", path.display(), err);
            1
        }
    }
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let code = exit_code(&run(&TuningConfig::default()));
    if code != 0 {
        std::process::exit(code);
    }
}
