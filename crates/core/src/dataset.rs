use serde::Serialize;

/// Blog post
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    /// Publication date, kept as the literal text it was authored with
    pub date: &'static str,
    pub tags: &'static [&'static str],
}

/// Category shown in the sidebar. Not linked to post tags.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub count: u32,
}

/// Weather widget data
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city: &'static str,
    pub temperature: i32,
    pub condition: &'static str,
    pub humidity: u32,
    pub wind_speed: f64,
}

/// Read-only content the resolver works over
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub posts: &'static [Post],
    pub categories: &'static [Category],
    pub weather: WeatherSnapshot,
}

const SAMPLE_POSTS: &[Post] = &[
    Post {
        id: 1,
        title: "SvelteKit 시작하기",
        content: "SvelteKit은 현대적인 웹 개발 프레임워크입니다.",
        author: "김개발",
        date: "2024-01-15",
        tags: &["svelte", "tutorial"],
    },
    Post {
        id: 2,
        title: "TypeScript와 함께하는 개발",
        content: "TypeScript를 사용하면 더 안전한 코드를 작성할 수 있습니다.",
        author: "이타입",
        date: "2024-01-10",
        tags: &["typescript", "javascript"],
    },
    Post {
        id: 3,
        title: "반응형 웹 디자인",
        content: "모든 디바이스에서 완벽하게 동작하는 웹사이트를 만들어보세요.",
        author: "박디자인",
        date: "2024-01-05",
        tags: &["css", "responsive"],
    },
];

const SAMPLE_CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        name: "프론트엔드",
        count: 15,
    },
    Category {
        id: 2,
        name: "백엔드",
        count: 8,
    },
    Category {
        id: 3,
        name: "디자인",
        count: 5,
    },
    Category {
        id: 4,
        name: "DevOps",
        count: 3,
    },
];

const SAMPLE_WEATHER: WeatherSnapshot = WeatherSnapshot {
    city: "Seoul",
    temperature: 22,
    condition: "맑음",
    humidity: 65,
    wind_speed: 3.2,
};

static SAMPLE: Dataset = Dataset {
    posts: SAMPLE_POSTS,
    categories: SAMPLE_CATEGORIES,
    weather: SAMPLE_WEATHER,
};

impl Dataset {
    /// The built-in sample content served by the front page
    pub fn sample() -> &'static Dataset {
        &SAMPLE
    }
}
