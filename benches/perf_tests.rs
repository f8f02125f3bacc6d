use criterion::{criterion_group, criterion_main, Criterion};
use file_logger::{DisplayOptions, Logger, LoggerConfig};
use log::{info, LevelFilter};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::fs;
use std::sync::Once;
use tempfile::tempdir;

const LOG4RS_FILE: &str = "perf_test_log4rs.log";
const ITERATIONS: usize = 10_000;

static LOGGER_INIT: Once = Once::new();

fn setup_log4rs(log_file: &str) {
    LOGGER_INIT.call_once(|| {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} - {m}{n}")))
            .append(true)
            .build(log_file)
            .unwrap();

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(LevelFilter::Info))
            .unwrap();

        log4rs::init_config(config).unwrap();
    });
}

fn bench_logging_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logging Comparison");
    group.sample_size(10); // Fewer samples due to I/O operations

    group.bench_function("buffered_batch_flush", |b| {
        let dir = tempdir().unwrap();
        let path = dir.path().join("perf_test.log");
        let mut config = LoggerConfig::default();
        config.display = DisplayOptions::TIMESTAMP;
        config.indent_message = false;
        config.file_path = path.clone();

        let mut logger = Logger::new(config);
        logger.start(&path, false).unwrap();

        b.iter(|| {
            for i in 0..ITERATIONS {
                logger.log_string(&format!("Test message {i}"));
            }
            // Batch mode: the flush on stop is where the file I/O happens.
            logger.stop().unwrap();
            logger.start(&path, false).unwrap();
        });
    });

    group.bench_function("real_time_per_call_writes", |b| {
        let dir = tempdir().unwrap();
        let path = dir.path().join("perf_test_rt.log");
        let mut config = LoggerConfig::default();
        config.display = DisplayOptions::TIMESTAMP;
        config.indent_message = false;
        config.write_in_real_time = true;
        config.file_path = path.clone();

        let mut logger = Logger::new(config);
        logger.start(&path, false).unwrap();

        // Two orders of magnitude fewer iterations: one open/write/close per
        // call is the cost being measured.
        b.iter(|| {
            for i in 0..ITERATIONS / 100 {
                logger.log_string(&format!("Test message {i}"));
            }
        });
    });

    group.bench_function("log4rs_file_appender", |b| {
        let _ = fs::remove_file(LOG4RS_FILE);
        setup_log4rs(LOG4RS_FILE);

        b.iter(|| {
            for i in 0..ITERATIONS {
                info!("Test message {i}");
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_logging_comparison);
criterion_main!(benches);
