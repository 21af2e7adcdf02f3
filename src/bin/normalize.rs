//! Command-line front end for the CPF/phone normalizer.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use rust_consig_api::models::{Cpf, PhoneNumber};
use rust_consig_api::normalizer::{format_cpf, format_phone, to_e164};
use rust_consig_api::whatsapp::whatsapp_link;

#[derive(Parser, Debug)]
#[command(
    name = "normalize",
    version,
    about = "Validate and format CPFs and Brazilian phone numbers"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check and mask CPFs (XXX.XXX.XXX-XX)
    Cpf {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Check and mask phone numbers with DDD
    Phone {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print wa.me links for phone numbers
    Whatsapp {
        #[arg(required = true)]
        values: Vec<String>,
        /// Text to pre-fill in the chat
        #[arg(long, short)]
        message: Option<String>,
    },
}

fn describe_cpf(raw: &str) -> (bool, String) {
    match Cpf::parse(raw) {
        Ok(cpf) => (true, format!("{}\tvalid", cpf)),
        Err(_) => (false, format!("{}\tinvalid", format_cpf(raw))),
    }
}

fn describe_phone(raw: &str) -> (bool, String) {
    match PhoneNumber::parse(raw) {
        Ok(phone) => {
            let e164 = to_e164(phone.as_str()).unwrap_or_else(|| "-".to_string());
            (true, format!("{}\tvalid\t{:?}\t{}", phone, phone.kind(), e164))
        }
        Err(_) => (false, format!("{}\tinvalid", format_phone(raw))),
    }
}

fn describe_whatsapp(raw: &str, message: Option<&str>) -> (bool, String) {
    match whatsapp_link(raw, message) {
        Ok(url) => (true, url.to_string()),
        Err(e) => (false, e.to_string()),
    }
}

/// One output line per value, plus whether every value was valid.
fn run(cmd: &Command) -> (bool, Vec<String>) {
    let results: Vec<(bool, String)> = match cmd {
        Command::Cpf { values } => values.iter().map(|v| describe_cpf(v)).collect(),
        Command::Phone { values } => values.iter().map(|v| describe_phone(v)).collect(),
        Command::Whatsapp { values, message } => values
            .iter()
            .map(|v| describe_whatsapp(v, message.as_deref()))
            .collect(),
    };

    let all_valid = results.iter().all(|(valid, _)| *valid);
    (all_valid, results.into_iter().map(|(_, line)| line).collect())
}

/// Exits non-zero if any value is invalid.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (all_valid, lines) = run(&cli.cmd);

    for line in &lines {
        println!("{}", line);
    }
    tracing::debug!("Normalized {} value(s)", lines.len());

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_help_is_not_treated_as_a_value() {
        let err = Cli::try_parse_from(["normalize", "cpf", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["normalize"]).is_err());
    }

    #[test]
    fn test_subcommand_requires_values() {
        let err = Cli::try_parse_from(["normalize", "phone"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["normalize", "cpf", "--strict", "52998224725"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cpf_values_described() {
        let cli = Cli::try_parse_from(["normalize", "cpf", "52998224725", "11111111111"]).unwrap();
        let (all_valid, lines) = run(&cli.cmd);
        assert!(!all_valid);
        assert_eq!(lines[0], "529.982.247-25\tvalid");
        assert_eq!(lines[1], "111.111.111-11\tinvalid");
    }

    #[test]
    fn test_whatsapp_with_message() {
        let cli = Cli::try_parse_from(["normalize", "whatsapp", "71999998888", "-m", "Oi"]).unwrap();
        let (all_valid, lines) = run(&cli.cmd);
        assert!(all_valid);
        assert_eq!(lines, vec!["https://wa.me/5571999998888?text=Oi".to_string()]);
    }
}
