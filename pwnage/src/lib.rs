//! Checks whether a password appears in the Have I Been Pwned breach corpus
//! using the k-anonymity range API.
//!
//! The password is hashed locally with SHA-1 and only the first 5 hex
//! characters of the digest are sent to the remote service. The service
//! answers with every known `suffix:count` record sharing that prefix, and
//! the remaining 35 characters are matched locally, so neither the password
//! nor its full hash ever leaves the machine.
//!
//! ```no_run
//! use pwnage::{BreachChecker, DEFAULT_TIMEOUT, HibpClient, Pwnage};
//!
//! # async fn run() -> Result<(), pwnage::Error> {
//! let http = reqwest::Client::builder()
//!     .timeout(DEFAULT_TIMEOUT)
//!     .user_agent("pwnage")
//!     .build()
//!     .unwrap();
//!
//! let checker = BreachChecker::new(HibpClient::new(http));
//! match checker.check_password("hunter2").await? {
//!     Pwnage::Found { count } => println!("pwned {count} times"),
//!     Pwnage::NotFound => println!("not found"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod error;
pub mod hash;
pub mod range;

pub use check::{BreachChecker, Pwnage};
pub use error::Error;
pub use hash::{HEX_LEN, PREFIX_LEN, SUFFIX_LEN, Sha1Hex};
pub use range::{DEFAULT_TIMEOUT, HibpClient, RANGE_API_BASE, RangeQuery};
