use serde::Serialize;

/// Static rendering options of a page
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Whether the page may be rendered ahead of time into a static file
    pub prerender: bool,
    /// Whether the page is rendered on the server
    pub ssr: bool,
    /// Invalidation key clients use to refetch the page data
    pub depends: &'static str,
}

impl PageOptions {
    /// Options of the blog front page
    pub const HOME: PageOptions = PageOptions {
        prerender: true,
        ssr: true,
        depends: "app:homepage",
    };
}
