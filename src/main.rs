//! Command line front end for the public-key recovery search.

use {
    anyhow::{bail, ensure, Result},
    argh::FromArgs,
    recover_pk::{
        fixtures::DEVICE_PROFILES,
        search::{search_auto, Outcome, Sample},
    },
    tracing_subscriber::EnvFilter,
};

/// Recover a vendor ECDSA public key from tag signatures.
///
/// Pass `selftests` to verify the built-in device profiles, or an even
/// number of hex arguments forming UID SIGNATURE pairs from one product
/// family. A signature may be prefixed with a one-byte recovery id (27/28).
#[derive(FromArgs)]
struct Args {
    /// enable debug logging
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// selftests, or UID SIGNATURE hex pairs
    #[argh(positional)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.args.len() == 1 && args.args[0] == "selftests" {
        return run_selftests();
    }
    run_search(&args.args)
}

fn run_selftests() -> Result<()> {
    let mut failures = 0;
    for profile in DEVICE_PROFILES {
        match profile.verify() {
            Ok(params) => println!("[=] ok: {} ({params})", profile.name),
            Err(err) => {
                failures += 1;
                println!("[!] FAILED: {err:#}");
            }
        }
    }
    ensure!(failures == 0, "{failures} profile(s) failed");
    println!("[=] all {} profiles passed", DEVICE_PROFILES.len());
    Ok(())
}

fn run_search(args: &[String]) -> Result<()> {
    ensure!(
        !args.is_empty() && args.len() % 2 == 0,
        "expected UID SIGNATURE hex pairs (or `selftests`)"
    );
    let samples = args
        .chunks_exact(2)
        .map(|pair| Sample::from_hex(&pair[0], &pair[1]))
        .collect::<Result<Vec<_>>>()?;

    let report = search_auto(&samples)?;
    for (params, keys) in report.results() {
        for key in keys {
            println!("[+] candidate: {params} pk={key}");
        }
    }
    match report.outcome() {
        Outcome::Unique { params, key } => {
            println!("[=] unique key found: {params}");
            println!("[=] pk={key}");
            Ok(())
        }
        Outcome::Ambiguous => {
            println!("[~] several candidates remain; add more samples from the same family");
            Ok(())
        }
        Outcome::Exhausted => bail!("no public key recovered from the given samples"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::from_args(&["recover-pk"], &["-v", "selftests"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.args, ["selftests"]);

        let args = Args::from_args(&["recover-pk"], &["04E10CDA993C80", "8B76"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.args.len(), 2);
    }
}
