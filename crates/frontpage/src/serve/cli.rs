#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "FRONTPAGE_PORT", default_value = "5173")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "FRONTPAGE_HOST", default_value = "127.0.0.1")]
    pub host: String,
}
