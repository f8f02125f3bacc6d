use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use file_logger::{log_string, Category, DisplayOptions, Logger, LoggerConfig};

/// Echo-to-console routed through log4rs: the logger's default console sink
/// forwards echoed lines to the `log` facade, so whatever backend the host
/// installs decides where they appear.
fn main() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .unwrap();

    log4rs::init_config(config).unwrap();

    let mut logger_config = LoggerConfig::default();
    logger_config.display = DisplayOptions::TIMESTAMP | DisplayOptions::CATEGORY;
    logger_config.indent_message = false;
    logger_config.echo_to_console = true;

    let mut logger = Logger::new(logger_config);
    logger.start("echo_demo.log", false).unwrap();

    logger.log_string("game started");
    log_string!(logger, "loaded {} assets", 42);
    log_string!(logger, Category::Network, "peer {} connected", "10.0.0.2");
    logger.log_result(1337);

    // Batch mode: the same lines reach echo_demo.log on stop.
    logger.stop().unwrap();

    println!("Done. The echoed lines above are also in echo_demo.log");
}
