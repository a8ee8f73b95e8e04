use std::error::Error;
use std::process;
use clap::{value_t, App, AppSettings, Arg};
use log::{debug, info, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use inet_conversion::lib_util::shared_version_code;
use inet_conversion::{convert_tokens, ConversionConfig, ParsePolicy};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

// stdout carries only the result, so logs go to stderr.
fn init_log(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn main() {
    let version = shared_version_code();
    let matches = App::new("inet-conversion")
        .version(version.as_str())
        .about("IPv4 dotted-decimal to numeric conversion, and back")
        // `-1` is an octet or a packed address, not a flag.
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("STRICT")
                .short("s")
                .long("strict")
                .help("reject non-numeric tokens and octets outside [0, 255]"),
        )
        .arg(
            Arg::with_name("LOG_LEVEL")
                .short("l")
                .long("log-level")
                .takes_value(true)
                .possible_values(&LOG_LEVELS)
                .default_value("warn")
                .help("log verbosity, written to stderr"),
        )
        .arg(
            Arg::with_name("TOKEN")
                .index(1)
                .multiple(true)
                .required(true)
                .help("four octets, one dotted address, or one packed integer"),
        )
        .get_matches();

    let level = value_t!(matches, "LOG_LEVEL", LevelFilter).unwrap_or_else(|e| e.exit());
    if let Err(e) = init_log(level) {
        eprintln!("warning: logging disabled ({})", e);
    }

    let config = if matches.is_present("STRICT") {
        ConversionConfig::new(ParsePolicy::Strict)
    } else {
        ConversionConfig::default()
    };
    let tokens = matches
        .values_of("TOKEN")
        .map(|values| values.collect::<Vec<&str>>())
        .unwrap_or_default();

    info!("Converting {:?} ({:?}).", tokens, config.parse_policy);

    match convert_tokens(&tokens, &config) {
        Ok(conversion) => println!("{}", conversion),
        Err(e) => {
            debug!("Conversion failed ({:?}).", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
