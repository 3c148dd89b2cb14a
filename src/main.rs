use clap::Parser;
use user_accounts::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo(args) => cli::demo::run(args).await,
        Command::CheckEmail { address } => cli::check::email(&address),
        Command::CheckPassword { password } => cli::check::password(&password),
        Command::Digest { secret } => cli::check::digest(&secret),
    }
}
