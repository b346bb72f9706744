use crate::prelude::{println, *};
use frontpage_core::environment::Environment;
use frontpage_core::page::PageOptions;
use frontpage_core::query::PageParams;
use frontpage_core::resolver::ResolverOptions;
use std::fs;
use std::path::{Path, PathBuf};

use crate::environment::SystemEnvironment;

/// File name of the prerendered page data
pub const OUTPUT_FILE: &str = "index.json";

#[derive(Debug, clap::Args)]
pub struct PrerenderOptions {
    /// Directory to write the page data into
    #[arg(short, long, env = "FRONTPAGE_OUT", default_value = "build")]
    pub out: PathBuf,
}

pub fn run(options: PrerenderOptions, global: crate::Global) -> Result<()> {
    let resolver_options = global.resolver_options()?;

    let path = prerender(
        &options.out,
        &PageOptions::HOME,
        &resolver_options,
        &SystemEnvironment,
    )
    .with_context(|| format!("Failed to prerender into {}", options.out.display()))?;

    if global.verbose {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Resolve the default page and write it as JSON into `out`
///
/// Returns the path of the written file.
pub fn prerender<E: Environment + ?Sized>(
    out: &Path,
    page: &PageOptions,
    options: &ResolverOptions,
    env: &E,
) -> Result<PathBuf, Error> {
    if !page.prerender {
        return Err(Error::PrerenderDisabled(page.depends.to_string()));
    }

    let data = crate::load::load_data(&PageParams::default(), options, env);
    let json = serde_json::to_vec_pretty(&data).map_err(std::io::Error::other)?;

    fs::create_dir_all(out)?;
    let path = out.join(OUTPUT_FILE);
    fs::write(&path, json)?;

    log::info!("prerendered {} ({} posts)", path.display(), data.posts.len());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use frontpage_core::environment::FixedEnvironment;
    use tempfile::TempDir;

    fn env() -> FixedEnvironment {
        FixedEnvironment::new(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(), 0.0)
    }

    #[test]
    fn test_prerender_writes_default_page() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("build");

        let path = prerender(&out, &PageOptions::HOME, &ResolverOptions::default(), &env()).unwrap();
        assert_eq!(path, out.join("index.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["currentPage"], 1);
        assert_eq!(written["searchQuery"], "");
        assert!(written["userData"].is_null());
        assert_eq!(written["stats"]["lastUpdated"], "2024. 3. 1.");
        assert_eq!(written["loadTime"], 50.0);
    }

    #[test]
    fn test_prerender_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("index.json"), "stale").unwrap();

        let path = prerender(
            temp_dir.path(),
            &PageOptions::HOME,
            &ResolverOptions::default(),
            &env(),
        )
        .unwrap();
        assert_ne!(fs::read_to_string(path).unwrap(), "stale");
    }

    #[test]
    fn test_prerender_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let page = PageOptions {
            prerender: false,
            ..PageOptions::HOME
        };

        let result = prerender(temp_dir.path(), &page, &ResolverOptions::default(), &env());
        assert!(matches!(result, Err(Error::PrerenderDisabled(_))));
        assert!(!temp_dir.path().join("index.json").exists());
    }
}
