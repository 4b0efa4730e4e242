//! Static reading suggestions for the dashboard's "Suggested Article" card.

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleSuggestion {
    pub title: &'static str,
    pub link: &'static str,
    pub desc: &'static str,
}

pub const SUGGESTIONS: &[ArticleSuggestion] = &[
    ArticleSuggestion {
        title: "The Science of Habits",
        link: "https://jamesclear.com/habits",
        desc: "Discover how habits are formed and how you can leverage them to improve productivity.",
    },
    ArticleSuggestion {
        title: "Why We Sleep",
        link: "https://www.sleepfoundation.org/how-sleep-works",
        desc: "Understand the neuroscience behind sleep and how it affects your health.",
    },
    ArticleSuggestion {
        title: "AI and the Future of Work",
        link: "https://hbr.org/2023/07/how-ai-will-transform-work",
        desc: "Explore how artificial intelligence is reshaping the workforce and job markets.",
    },
    ArticleSuggestion {
        title: "Deep Work by Cal Newport",
        link: "https://www.calnewport.com/books/deep-work/",
        desc: "A deep dive into focus, distraction, and meaningful productivity.",
    },
    ArticleSuggestion {
        title: "Let's End Toxic Productivity",
        link: "https://hbr.org/2024/11/lets-end-toxic-productivity",
        desc: "Addressing the unhealthy compulsion to be productive at all times and its impact on well-being.",
    },
    ArticleSuggestion {
        title: "Healthy Living Guide 2023/2024",
        link: "https://nutritionsource.hsph.harvard.edu/2024/01/02/healthy-living-guide-2023-2024/",
        desc: "Comprehensive guide to healthy eating and lifestyle choices.",
    },
    ArticleSuggestion {
        title: "Productivity and Remote Work",
        link: "https://www.bls.gov/productivity/notices/2024/productivity-and-remote-work.htm",
        desc: "How the shift to remote work shows up in productivity statistics.",
    },
];

/// Pick a suggestion from a uniform sample in `[0, 1)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn pick(sample: f64) -> &'static ArticleSuggestion {
    let last = SUGGESTIONS.len() - 1;
    let index = if sample.is_finite() && sample > 0.0 {
        ((sample * SUGGESTIONS.len() as f64) as usize).min(last)
    } else {
        0
    };
    &SUGGESTIONS[index]
}

/// A random suggestion; the first one outside the browser.
pub fn random() -> &'static ArticleSuggestion {
    #[cfg(feature = "csr")]
    {
        pick(js_sys::Math::random())
    }
    #[cfg(not(feature = "csr"))]
    {
        pick(0.0)
    }
}
