use foundry_logger::{LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_output_writes_a_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("foundry-file-logging")
        .console(false)
        .file(&log_dir)
        .rotation(Rotation::NEVER)
        .level(LevelFilter::INFO)
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(pattern = "builder", "hello from the file logging test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("hello from the file logging test"));

    Ok(())
}
