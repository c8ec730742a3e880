use clap::{Arg, ArgMatches, Command};

pub const CMD_HASH_PASSWORD: &str = "hash-password";

pub const ARG_HASH_MEMORY_KIB: &str = "hash-memory-kib";
pub const ARG_HASH_ITERATIONS: &str = "hash-iterations";
pub const ARG_HASH_PARALLELISM: &str = "hash-parallelism";

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            memory_kib: matches
                .get_one::<u32>(ARG_HASH_MEMORY_KIB)
                .copied()
                .unwrap_or(argon2::Params::DEFAULT_M_COST),
            iterations: matches
                .get_one::<u32>(ARG_HASH_ITERATIONS)
                .copied()
                .unwrap_or(argon2::Params::DEFAULT_T_COST),
            parallelism: matches
                .get_one::<u32>(ARG_HASH_PARALLELISM)
                .copied()
                .unwrap_or(argon2::Params::DEFAULT_P_COST),
        }
    }
}

/// `hash-password` reads a password from stdin and prints the PHC string to
/// store in `users.password`.
#[must_use]
pub fn command() -> Command {
    Command::new(CMD_HASH_PASSWORD)
        .about("Hash a password read from stdin for the users table")
        .arg(
            Arg::new(ARG_HASH_MEMORY_KIB)
                .long(ARG_HASH_MEMORY_KIB)
                .help("Argon2 memory cost in KiB")
                .env("LEARNBOARD_HASH_MEMORY_KIB")
                .default_value("19456")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_HASH_ITERATIONS)
                .long(ARG_HASH_ITERATIONS)
                .help("Argon2 iteration count")
                .env("LEARNBOARD_HASH_ITERATIONS")
                .default_value("2")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_HASH_PARALLELISM)
                .long(ARG_HASH_PARALLELISM)
                .help("Argon2 lanes")
                .env("LEARNBOARD_HASH_PARALLELISM")
                .default_value("1")
                .value_parser(clap::value_parser!(u32)),
        )
}
