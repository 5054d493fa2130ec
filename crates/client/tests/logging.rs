use bot_client::logging::setup_logging;
use tempfile::TempDir;

#[test]
fn log_file_is_created_in_log_dir() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");

    let guard = setup_logging(Some(&log_dir)).unwrap();
    assert!(guard.is_some());
    tracing::info!("hello from the bot");
    drop(guard);

    let contents = std::fs::read_to_string(log_dir.join("bot.log")).unwrap();
    assert!(contents.contains("hello from the bot"));
}
