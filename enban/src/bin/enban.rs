use clap::{Parser, Subcommand};
use enban::{
    parse_all, Bban, BicFormat, BicPattern, BicStyles, CountryAccountPatterns, IbanFormat,
    IbanPattern, IbanStyles,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Enban CLI - Validate and convert IBANs, BBANs and BICs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate IBANs and print their electronic and print forms
    Iban {
        /// IBAN texts, electronic or print form
        #[arg(required = true)]
        texts: Vec<String>,

        /// Reject lower case, surrounding white space and bad check digits
        #[arg(long)]
        strict: bool,
    },
    /// Validate BICs and print their full and compact forms
    Bic {
        /// BIC texts with 8 or 11 characters
        #[arg(required = true)]
        texts: Vec<String>,

        /// Reject lower case and surrounding white space
        #[arg(long)]
        strict: bool,
    },
    /// Compute the IBAN for a domestic account number
    Bban {
        /// ISO 3166-1 alpha-2 country code
        country: String,

        /// Account number in the country's BBAN structure
        account: String,
    },
    /// List the built-in countries and their BBAN structures
    Countries,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let all_valid = match &cli.command {
        Commands::Iban { texts, strict } => handle_iban(texts, *strict),
        Commands::Bic { texts, strict } => handle_bic(texts, *strict),
        Commands::Bban { country, account } => handle_bban(country, account),
        Commands::Countries => {
            handle_countries();
            true
        }
    };

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_iban(texts: &[String], strict: bool) -> bool {
    let styles = if strict {
        IbanStyles::PRINT
    } else {
        IbanStyles::LENIENT
    };
    let pattern = IbanPattern::print().with_styles(styles);
    let report = parse_all(&pattern, texts);

    for (text, result) in texts.iter().zip(report.results()) {
        match result {
            Ok(iban) if iban.is_check_digit_valid() => println!(
                "{text}: valid\n  electronic: {}\n  print:      {}",
                iban.format(IbanFormat::Electronic),
                iban.format(IbanFormat::Print)
            ),
            Ok(iban) => println!(
                "{text}: structure valid, check digit {} is wrong\n  electronic: {}",
                iban.check_digit(),
                iban
            ),
            Err(err) => println!("{text}: invalid ({err})"),
        }
    }

    // A wrong check digit only passes the lenient parse
    report.is_all_valid()
        && report
            .results()
            .iter()
            .flatten()
            .all(|iban| iban.is_check_digit_valid())
}

fn handle_bic(texts: &[String], strict: bool) -> bool {
    let styles = if strict {
        BicStyles::empty()
    } else {
        BicStyles::LENIENT
    };
    let pattern = BicPattern::compact().with_styles(styles);
    let report = parse_all(&pattern, texts);

    for (text, result) in texts.iter().zip(report.results()) {
        match result {
            Ok(bic) => println!(
                "{text}: valid\n  full:    {}\n  compact: {}",
                bic.format(BicFormat::Full),
                bic.format(BicFormat::Compact)
            ),
            Err(err) => println!("{text}: invalid ({err})"),
        }
    }

    report.is_all_valid()
}

fn handle_bban(country: &str, account: &str) -> bool {
    match Bban::new(country, account).and_then(|bban| bban.to_iban()) {
        Ok(iban) => {
            println!("{iban}\n{iban:#}");
            true
        }
        Err(err) => {
            eprintln!("{country} {account}: invalid ({err})");
            false
        }
    }
}

fn handle_countries() {
    let patterns = CountryAccountPatterns::builtin();
    for country in patterns.countries() {
        println!(
            "{}  {:<2}  {:<24}  {}",
            country.code(),
            country.iban_length(),
            country.pattern(),
            country.name().unwrap_or_default()
        );
    }
}
