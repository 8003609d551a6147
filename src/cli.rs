use clap::builder::{FalseyValueParser, PossibleValuesParser};
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let file_names_help = concat!(
        "Source files to scan, in order.\n",
        "Use a single dash to read from stdin.\n",
        "When no files are given and -c isn't used, stdin is read.",
    );

    let max_token_len_help = concat!(
        "Longest identifier to collect; longer ones are truncated.\n",
        "Use 0 to collect identifiers of any length."
    );

    Command::new("ctrans")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find C keywords in source text and report their translations")
        .arg(Arg::new("FILE_NAMES").index(1).num_args(0..).help(file_names_help))
        .arg(
            Arg::new("code")
                .short('c')
                .long("code")
                .required(false)
                .num_args(1)
                .conflicts_with("FILE_NAMES")
                .help("Use this to scan short snippets of code"),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .required(false)
                .num_args(1)
                .env("CTRANS_TABLE")
                .help("Keyword table file (lines of <spelling> = <translation>)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .default_value("text")
                .value_parser(PossibleValuesParser::new(["text", "plain", "summary"]))
                .env("CTRANS_FORMAT")
                .help("Report format"),
        )
        .arg(
            Arg::new("max_token_len")
                .short('m')
                .long("max-token-len")
                .default_value("99")
                .value_parser(value_parser!(usize))
                .env("CTRANS_MAX_TOKEN_LEN")
                .help(max_token_len_help),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Don't print banner lines in text format"),
        )
        .arg(
            Arg::new("list_keywords")
                .long("list-keywords")
                .action(ArgAction::SetTrue)
                .help("Print the active keyword table and exit"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("CTRANS_DEBUG")
                .help("Enable debug mode?"),
        )
}
