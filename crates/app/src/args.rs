pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mock-accounts")]
#[command(about = "Serve fake account data for front-end development")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: crate::Command,
}
