// Global static logger handle for flexi_logger
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

/// Initialise process-wide logging with flexi_logger.
///
/// Converter validation emits its progress messages through the `log` facade;
/// this wires that facade to console (and optionally file) output.
pub fn init_logging(
    log_level: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::{FileSpec, Logger};

    let level_str = log_level.unwrap_or("info");

    let mut logger = Logger::try_with_str(level_str)?;

    if color_enabled {
        logger = logger.format(simple_color_format);
    } else {
        logger = logger.format(simple_format);
    }

    // Configure file output if requested
    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    // Start the logger and store the handle
    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

/// Reconfigure the log level at runtime.
///
/// Only the level can change after initialisation; format and file output are
/// fixed by flexi_logger's design once the logger has started.
pub fn reconfigure_logging(log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(handle_mutex) = LOGGER_HANDLE.get() {
        if let Ok(mut handle) = handle_mutex.lock() {
            if let Some(level) = log_level {
                let _ = handle.parse_and_push_temp_spec(level);
            }
            Ok(())
        } else {
            Err("Could not acquire logger handle lock".into())
        }
    } else {
        Err("Logger handle not initialised. Call init_logging first.".into())
    }
}

// Simple text format without colors
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level_abbr = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };

    let target_formatted = format_target_as_path(record.target(), record.line());

    // Format: "YYYY-MM-DD HH:mm:ss.ffff INF message (converter/harness.rs:42)"
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr,
        record.args(),
        target_formatted
    )
}

// Simple color format
fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    let level_colored = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored,
        record.args()
    )
}

// Helper function to format target as file path with line number
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    // Convert plotpath::converter::harness -> converter/harness.rs
    let path_like = if let Some(without_prefix) = target.strip_prefix("plotpath::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_logging_smoke() {
        // First (and only) initialisation in this binary must succeed and
        // leave a handle behind for runtime reconfiguration.
        init_logging(Some("debug"), None, false).expect("logger should initialise");
        assert!(LOGGER_HANDLE.get().is_some());

        log::info!("logging smoke test line");

        reconfigure_logging(Some("info")).expect("level change should succeed after init");
    }

    #[test]
    fn test_simple_format_structure() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Info)
            .target("test_target")
            .args(format_args!("Test message"))
            .build();

        let result = simple_format(&mut buffer, &mut now, &record);
        assert!(result.is_ok(), "Format function should succeed");

        let output = String::from_utf8(buffer).expect("Output should be valid UTF-8");

        assert!(output.contains("INF"), "Should contain level abbreviation");
        assert!(output.contains("Test message"), "Should contain message");
        assert!(
            output.contains("(test_target"),
            "Should contain target in parens"
        );
    }

    #[test]
    fn test_format_target_as_path() {
        assert_eq!(
            format_target_as_path("plotpath::converter::harness", Some(42)),
            "converter/harness.rs:42"
        );
        assert_eq!(
            format_target_as_path("plotpath::locale::translator", None),
            "locale/translator.rs"
        );
        assert_eq!(
            format_target_as_path("other_crate::module", Some(7)),
            "other_crate/module:7"
        );
    }

    #[test]
    #[serial]
    fn test_reconfigure_before_init_fails() {
        // Reconfiguration requires an initialised handle; without one the
        // call reports the missing handle instead of panicking.
        if LOGGER_HANDLE.get().is_none() {
            let result = reconfigure_logging(Some("debug"));
            assert!(result.is_err());
        }
    }
}
