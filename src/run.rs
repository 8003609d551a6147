//! Command line entry point, kept out of `main` so it can be driven
//! with any input and output.
use std::io::{Read, Write};

use clap::ArgMatches;

use crate::config::Config;
use crate::driver::Driver;
use crate::keywords::{load_table_file, KeywordTable, C_KEYWORDS};
use crate::result::{DriverErr, DriverErrKind, DriverResult};

/// Run the command described by `matches`. `input` stands in for
/// stdin. Returns the total number of keywords found.
pub fn run(matches: &ArgMatches, input: &mut impl Read, out: &mut impl Write) -> DriverResult {
    let config = build_config(matches)?;

    let loaded;
    let table: &KeywordTable = match matches.get_one::<String>("table") {
        Some(path) => {
            loaded = load_table_file(path)?;
            &loaded
        }
        None => &*C_KEYWORDS,
    };

    let driver = Driver::new(table, &config)?;

    if matches.get_flag("list_keywords") {
        driver.list_keywords(out)?;
        flush(out)?;
        return Ok(0);
    }

    let mut count = 0;

    if let Some(code) = matches.get_one::<String>("code") {
        count += driver.execute_text("<code>", code, out)?;
    } else {
        let file_names: Vec<&String> = match matches.get_many::<String>("FILE_NAMES") {
            Some(file_names) => file_names.collect(),
            None => vec![],
        };
        if file_names.is_empty() {
            count += driver.execute_reader("<stdin>", input, out)?;
        }
        for file_name in file_names {
            count += if file_name == "-" {
                driver.execute_reader("<stdin>", input, out)?
            } else {
                driver.execute_file(file_name, out)?
            };
        }
    }

    flush(out)?;
    Ok(count)
}

/// Copy CLI args into the config.
pub fn build_config(matches: &ArgMatches) -> Result<Config, DriverErr> {
    let mut config = Config::default();
    config.set_bool("debug", matches.get_flag("debug"))?;
    config.set_bool("quiet", matches.get_flag("quiet"))?;
    if let Some(format) = matches.get_one::<String>("format") {
        config.set_str("format", format)?;
    }
    if let Some(max_token_len) = matches.get_one::<usize>("max_token_len") {
        config.set_usize("max_token_len", *max_token_len)?;
    }
    Ok(config)
}

fn flush(out: &mut impl Write) -> Result<(), DriverErr> {
    out.flush()
        .map_err(|err| DriverErr::new(DriverErrKind::CouldNotWriteOutput(err.to_string())))
}
