// Installs a JSON fmt subscriber for the process. Calling it twice is harmless.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}
