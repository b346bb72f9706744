use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use frontpage_core::dataset::{Dataset, Post};
use frontpage_core::environment::Environment;
use frontpage_core::query::{PageParams, PageQuery};
use frontpage_core::resolver::{resolve, HomePage, ResolverOptions};

use crate::environment::SystemEnvironment;

#[derive(Debug, clap::Args, Clone, Default)]
pub struct LoadOptions {
    /// Search text matched against titles, content and tags
    #[arg(long)]
    pub q: Option<String>,

    /// Page number (1-indexed); anything non-numeric falls back to 1
    #[arg(short, long)]
    pub page: Option<String>,

    /// Tag filter
    #[arg(short, long)]
    pub category: Option<String>,

    /// User id to synthesize a profile for
    #[arg(short, long)]
    pub user: Option<String>,

    /// Raw URL query string (e.g. "q=svelte&page=2"); overrides the other filters
    #[arg(long)]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LoadOptions {
    /// Page parameters described by these options
    pub fn params(&self) -> PageParams {
        match &self.query {
            Some(raw) => PageParams::from_query_string(raw),
            None => PageParams::from_query(&PageQuery {
                q: self.q.clone(),
                page: self.page.clone(),
                category: self.category.clone(),
                user: self.user.clone(),
            }),
        }
    }
}

pub fn run(options: LoadOptions, global: crate::Global) -> Result<()> {
    let params = options.params();

    if global.verbose {
        eprintln!("Resolving front page with {:?}", params);
    }

    let resolver_options = global.resolver_options()?;
    let page = load_data(&params, &resolver_options, &SystemEnvironment);

    if options.json {
        println!("{}", format_json(&page)?);
    } else {
        println!("{}", format_text(&page));
    }

    Ok(())
}

/// Resolves the sample front page for `params`
pub fn load_data<E: Environment + ?Sized>(
    params: &PageParams,
    options: &ResolverOptions,
    env: &E,
) -> HomePage {
    let page = resolve(Dataset::sample(), params, options, env);

    log::debug!(
        "resolved page {} of {}: {} of {} posts",
        page.current_page,
        page.total_pages,
        page.posts.len(),
        page.total_posts
    );

    page
}

/// Convert the page to a pretty JSON string
pub fn format_json(page: &HomePage) -> Result<String> {
    serde_json::to_string_pretty(page).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn posts_table(posts: &[Post]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Title", "Author", "Date", "Tags"]);

    for post in posts {
        table.add_row(prettytable::row![
            post.id,
            post.title,
            post.author,
            post.date,
            post.tags.join(", ")
        ]);
    }

    table.to_string()
}

/// Convert the page to formatted text with colors
pub fn format_text(page: &HomePage) -> String {
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!("{}\n", page.meta.title.bright_cyan().bold()));
    result.push_str(&f!("{}\n", page.meta.description.bright_white()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if page.posts.is_empty() {
        result.push_str(&f!("\n{}\n", "No posts on this page.".yellow()));
    } else {
        result.push_str(&f!("\n{}", posts_table(&page.posts)));
    }

    result.push_str(&f!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        page.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        page.total_pages.to_string().bright_cyan().bold(),
        page.total_posts.to_string().bright_cyan().bold(),
        "matching posts".bright_white()
    ));

    if page.has_prev_page {
        result.push_str(&f!(
            "  {}: {}\n",
            "Previous page".green(),
            f!("frontpage load --page {}", page.current_page - 1).cyan()
        ));
    }
    if page.has_next_page {
        result.push_str(&f!(
            "  {}: {}\n",
            "Next page".green(),
            f!("frontpage load --page {}", page.current_page + 1).cyan()
        ));
    }

    result.push_str(&f!("\n{}\n", "FEATURED".bright_yellow().bold()));
    for post in &page.featured_posts {
        result.push_str(&f!(
            "  {} {} {}\n",
            f!("[{}]", post.id).yellow(),
            post.title.white().bold(),
            f!("({})", post.author).bright_black()
        ));
    }

    result.push_str(&f!("\n{}\n", "CATEGORIES".bright_yellow().bold()));
    for category in &page.categories {
        result.push_str(&f!(
            "  {} {}\n",
            category.name.bright_white(),
            category.count.to_string().bright_magenta()
        ));
    }

    let weather = &page.weather;
    result.push_str(&f!(
        "\n{}: {} {}°, {} | {}: {}% | {}: {} m/s\n",
        "Weather".green(),
        weather.city.bright_white(),
        weather.temperature,
        weather.condition,
        "Humidity".green(),
        weather.humidity,
        "Wind".green(),
        weather.wind_speed
    ));

    if let Some(user) = &page.user_data {
        result.push_str(&f!(
            "{}: {} <{}> | {}: {} | {}: {}\n",
            "User".green(),
            user.name.bright_white(),
            user.email,
            "Joined".green(),
            user.join_date,
            "Posts".green(),
            user.post_count.to_string().bright_yellow()
        ));
    }

    result.push_str(&f!(
        "{}: {} | {}: {} | {}: {} | {}: {}\n",
        "Posts".green(),
        page.stats.total_posts,
        "Views".green(),
        page.stats.total_views,
        "Users".green(),
        page.stats.total_users,
        "Updated".green(),
        page.stats.last_updated.bright_black()
    ));

    result.push_str(&f!(
        "{}: {:.1} ms | {}: {}\n",
        "Load time".green(),
        page.load_time,
        "Timestamp".green(),
        page.timestamp.bright_black()
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use frontpage_core::environment::FixedEnvironment;

    fn fixed() -> FixedEnvironment {
        FixedEnvironment::new(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(), 0.5)
    }

    fn page_for(options: &LoadOptions) -> HomePage {
        load_data(&options.params(), &ResolverOptions::default(), &fixed())
    }

    #[test]
    fn test_params_from_flags() {
        let options = LoadOptions {
            q: Some("svelte".to_string()),
            page: Some("nope".to_string()),
            user: Some("3".to_string()),
            ..LoadOptions::default()
        };
        let params = options.params();
        assert_eq!(params.q, "svelte");
        assert_eq!(params.page, 1);
        assert_eq!(params.user.as_deref(), Some("3"));
    }

    #[test]
    fn test_raw_query_overrides_flags() {
        let options = LoadOptions {
            q: Some("svelte".to_string()),
            query: Some("category=css&page=1".to_string()),
            ..LoadOptions::default()
        };
        let params = options.params();
        assert_eq!(params.q, "");
        assert_eq!(params.category, "css");
    }

    #[test]
    fn test_format_text_lists_posts_and_navigation() {
        colored::control::set_override(false);
        let text = format_text(&page_for(&LoadOptions::default()));
        assert!(text.contains("SvelteKit 블로그"));
        assert!(text.contains("TypeScript와 함께하는 개발"));
        assert!(text.contains("Showing page 1 of 2 (3 matching posts)"));
        assert!(text.contains("frontpage load --page 2"));
        assert!(!text.contains("Previous page"));
        assert!(text.contains("Seoul"));
        assert!(!text.contains("User:"));
    }

    #[test]
    fn test_format_text_empty_page_with_user() {
        colored::control::set_override(false);
        let options = LoadOptions {
            page: Some("7".to_string()),
            user: Some("9".to_string()),
            ..LoadOptions::default()
        };
        let text = format_text(&page_for(&options));
        assert!(text.contains("No posts on this page."));
        assert!(text.contains("사용자9"));
        assert!(text.contains("user9@example.com"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&page_for(&LoadOptions::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["currentPage"], 1);
        assert_eq!(value["stats"]["lastUpdated"], "2024. 1. 15.");
        assert_eq!(value["loadTime"], 100.0);
    }
}
