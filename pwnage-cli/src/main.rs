use clap::Parser;
use pwnage::{BreachChecker, DEFAULT_TIMEOUT, Error, HibpClient, Pwnage, Sha1Hex};
use tracing_subscriber::EnvFilter;

const ABOUT: &str = "Calls the haveibeenpwned.com range API to find out if the provided \
password has been known to be pwned. Only the first 5 hex characters of the password's \
SHA-1 hash are sent out; the password itself never leaves this machine.";

#[derive(Parser, Debug)]
#[command(name = "pwnage", version)]
#[command(about = ABOUT)]
struct Args {
    /// Password to check (omit to print usage)
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let Some(password) = args.password else {
        println!("{ABOUT}");
        println!("Usage: pwnage <PASSWORD>");
        return Ok(());
    };

    let http = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(concat!("pwnage/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    let checker = BreachChecker::new(HibpClient::new(http));

    match checker.check_password(&password).await? {
        Pwnage::Found { count } => {
            println!("According to haveibeenpwned.com you have been pwned.");
            println!("SHA1 hash of pwned password: {}", Sha1Hex::of_password(&password));
            println!("The given password has been pwned {count} times.");
        }
        Pwnage::NotFound => {
            println!("You haven't been pwned - according to haveibeenpwned.com.");
        }
    }

    Ok(())
}
