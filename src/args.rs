use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(env = "HOST", long, default_value_t = String::from("127.0.0.1"))]
    pub host: String,

    #[arg(env = "PORT", long, default_value_t = 8098)]
    pub port: u16,
}

impl Args {
    pub fn load() -> Args {
        // A missing .env file is fine, the defaults cover everything
        dotenvy::dotenv().ok();
        Args::parse()
    }
}
