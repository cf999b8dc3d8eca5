use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

/// Installs the process-wide logger.
///
/// Debug level outside prod so raw webhook payloads and upstream responses
/// land in the log.
pub fn setup_simple_logger(is_prod: bool) -> anyhow::Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("order_bridge")
        .build();

    let level = if is_prod {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };

    Ok(SimpleLogger::init(level, logger_config)?)
}
