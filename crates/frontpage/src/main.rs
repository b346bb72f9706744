use crate::prelude::*;
use clap::Parser;
use frontpage_core::locale::offset_from_hours;
use frontpage_core::resolver::ResolverOptions;

mod environment;
mod error;
mod load;
mod prelude;
mod prerender;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Load, serve and prerender the blog front page data"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Hours east of UTC used for the "last updated" date
    #[clap(
        long,
        env = "FRONTPAGE_UTC_OFFSET",
        global = true,
        default_value = "9",
        allow_negative_numbers = true
    )]
    utc_offset: i32,

    /// Whether to display additional information.
    #[clap(long, env = "FRONTPAGE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Resolver options derived from the global flags
    pub fn resolver_options(&self) -> Result<ResolverOptions, Error> {
        let utc_offset =
            offset_from_hours(self.utc_offset).ok_or(Error::InvalidOffset(self.utc_offset))?;

        Ok(ResolverOptions {
            utc_offset,
            ..ResolverOptions::default()
        })
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Resolve the front page once and print it
    Load(crate::load::LoadOptions),

    /// Serve the front page data over HTTP
    Serve(crate::serve::ServeOptions),

    /// Write the default front page data to a static file
    Prerender(crate::prerender::PrerenderOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Load(options) => crate::load::run(options, app.global),
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
        SubCommands::Prerender(options) => crate::prerender::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(utc_offset: i32) -> Global {
        Global {
            utc_offset,
            verbose: false,
        }
    }

    #[test]
    fn test_resolver_options_from_offset() {
        let options = global(-5).resolver_options().unwrap();
        assert_eq!(options.utc_offset.local_minus_utc(), -5 * 3600);
        assert_eq!(options.per_page, 2);
    }

    #[test]
    fn test_resolver_options_rejects_bad_offset() {
        let err = global(30).resolver_options().unwrap_err();
        assert!(matches!(err, Error::InvalidOffset(30)));
    }

    #[test]
    fn test_cli_parses_load_flags() {
        let app = App::try_parse_from([
            "frontpage",
            "--utc-offset",
            "-3",
            "load",
            "--q",
            "svelte",
            "--page",
            "abc",
        ])
        .unwrap();
        assert_eq!(app.global.utc_offset, -3);
        assert!(matches!(app.command, SubCommands::Load(_)));
    }
}
