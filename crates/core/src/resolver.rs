//! Front page resolver
//!
//! Turns [`PageParams`] into a fully assembled [`HomePage`] in five stages:
//! search filter, tag filter, pagination, featured selection and metadata
//! assembly. Resolution is total: every input produces a page.

use chrono::FixedOffset;
use serde::Serialize;

use crate::dataset::{Category, Dataset, Post, WeatherSnapshot};
use crate::environment::{load_time_ms, post_count, Environment};
use crate::locale::{format_iso_timestamp, format_ko_date, kst, local_date};
use crate::pagination::{Pagination, POSTS_PER_PAGE};
use crate::query::PageParams;

const SITE_NAME: &str = "SvelteKit 블로그";
const SITE_DESCRIPTION: &str = "SvelteKit으로 만든 멋진 블로그";
const KEYWORDS: &[&str] = &["svelte", "sveltekit", "typescript", "blog"];
const TOTAL_VIEWS: u32 = 1234;
const TOTAL_USERS: u32 = 45;
const USER_JOIN_DATE: &str = "2023-12-01";

/// Tunables of the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    pub per_page: usize,
    pub featured_count: usize,
    /// Offset used to pick the calendar date shown as "last updated"
    pub utc_offset: FixedOffset,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            per_page: POSTS_PER_PAGE,
            featured_count: 2,
            utc_offset: kst(),
        }
    }
}

/// Synthesized profile of the requesting user
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: &'static str,
    pub post_count: u32,
}

/// Site-wide counters
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_posts: usize,
    pub total_views: u32,
    pub total_users: u32,
    pub last_updated: String,
}

/// Document metadata for the page head
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: &'static [&'static str],
}

/// Everything the front page renders
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub posts: Vec<Post>,
    /// Number of posts matching the filters, across all pages
    pub total_posts: usize,
    pub featured_posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub weather: WeatherSnapshot,
    pub current_page: u32,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub search_query: String,
    pub category: String,
    pub user_data: Option<UserProfile>,
    pub stats: Stats,
    pub meta: PageMeta,
    pub timestamp: String,
    pub load_time: f64,
}

/// Case-insensitive substring test; `needle` must already be lowercase
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether `post` matches a search query in its title, content or tags
pub fn matches_search(post: &Post, query: &str) -> bool {
    let needle = query.to_lowercase();
    contains_folded(post.title, &needle)
        || contains_folded(post.content, &needle)
        || post.tags.iter().any(|tag| contains_folded(tag, &needle))
}

/// Whether any tag of `post` contains `category`
///
/// This is a tag match only; the category list is never consulted.
pub fn matches_category(post: &Post, category: &str) -> bool {
    let needle = category.to_lowercase();
    post.tags.iter().any(|tag| contains_folded(tag, &needle))
}

/// Apply the search and tag filters, preserving dataset order
pub fn filter_posts(posts: &[Post], params: &PageParams) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| params.q.is_empty() || matches_search(post, &params.q))
        .filter(|post| params.category.is_empty() || matches_category(post, &params.category))
        .copied()
        .collect()
}

/// Build the profile for a user id
pub fn synthesize_user(id: &str, sample: f64) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: format!("사용자{id}"),
        email: format!("user{id}@example.com"),
        join_date: USER_JOIN_DATE,
        post_count: post_count(sample),
    }
}

/// Title and description, which depend on whether a search is active
pub fn page_meta(query: &str) -> PageMeta {
    let (title, description) = if query.is_empty() {
        (SITE_NAME.to_string(), SITE_DESCRIPTION.to_string())
    } else {
        (
            format!("검색: {query} | {SITE_NAME}"),
            format!("\"{query}\"에 대한 검색 결과"),
        )
    };

    PageMeta {
        title,
        description,
        keywords: KEYWORDS,
    }
}

/// Resolve the front page for `params`
pub fn resolve<E: Environment + ?Sized>(
    dataset: &Dataset,
    params: &PageParams,
    options: &ResolverOptions,
    env: &E,
) -> HomePage {
    let filtered = filter_posts(dataset.posts, params);

    let pagination = Pagination::new(filtered.len(), params.page as usize, options.per_page);
    let posts = pagination.slice(&filtered).to_vec();

    let featured_count = options.featured_count.min(dataset.posts.len());
    let featured_posts = dataset.posts[..featured_count].to_vec();

    let user_data = params
        .user
        .as_deref()
        .map(|id| synthesize_user(id, env.random()));

    let now = env.now();
    let stats = Stats {
        total_posts: dataset.posts.len(),
        total_views: TOTAL_VIEWS,
        total_users: TOTAL_USERS,
        last_updated: format_ko_date(local_date(now, options.utc_offset)),
    };

    HomePage {
        posts,
        total_posts: filtered.len(),
        featured_posts,
        categories: dataset.categories.to_vec(),
        weather: dataset.weather,
        current_page: params.page.max(1),
        total_pages: pagination.total_pages,
        has_next_page: pagination.has_next_page,
        has_prev_page: pagination.has_prev_page,
        search_query: params.q.clone(),
        category: params.category.clone(),
        user_data,
        stats,
        meta: page_meta(&params.q),
        timestamp: format_iso_timestamp(now),
        load_time: load_time_ms(env.random()),
    }
}
