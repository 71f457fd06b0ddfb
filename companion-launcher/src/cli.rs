use clap::{Parser, Subcommand};

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub service: Service,
}

#[derive(Subcommand)]
pub enum Service {
    /// Character and chat session API.
    Api {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Template-based reply service.
    Persona {
        #[arg(long, default_value_t = 8001)]
        port: u16,
    },
}
