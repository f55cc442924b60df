//! Content store for blog posts and FAQ entries.
//!
//! Content is the built-in sample set, loaded once at startup: post bodies
//! are markdown rendered to HTML, FAQ entries are plain text. Nothing here
//! is user-mutable.

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use serde::{Deserialize, Serialize};

use eliteshop_core::FaqId;

/// Blog post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Reviews,
    Tips,
    Trends,
    News,
}

impl PostCategory {
    /// The URL-friendly identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reviews => "reviews",
            Self::Tips => "tips",
            Self::Trends => "trends",
            Self::News => "news",
        }
    }
}

/// Metadata for blog posts.
#[derive(Debug, Clone)]
pub struct PostMeta {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published_at: NaiveDate,
    pub category: PostCategory,
    pub image: String,
    pub tags: Vec<String>,
}

/// A rendered blog post with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub meta: PostMeta,
    pub content_html: String,
    pub reading_time_minutes: u32,
}

/// FAQ category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Orders,
    Payment,
    Shipping,
    Returns,
    Account,
}

impl FaqCategory {
    /// The URL-friendly identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Payment => "payment",
            Self::Shipping => "shipping",
            Self::Returns => "returns",
            Self::Account => "account",
        }
    }
}

/// One question/answer pair.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
}

/// Content store that holds all loaded content in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
    faqs: Vec<FaqEntry>,
}

impl ContentStore {
    /// Load the built-in sample content.
    #[must_use]
    pub fn load() -> Self {
        let mut posts: Vec<Post> = sample_posts().into_iter().map(load_post).collect();

        // Sort posts by published date (newest first)
        posts.sort_by(|a, b| b.meta.published_at.cmp(&a.meta.published_at));

        Self {
            posts,
            faqs: sample_faqs(),
        }
    }

    /// Get a blog post by slug.
    #[must_use]
    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// All posts, newest first.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts in a category, newest first.
    pub fn posts_by_category(&self, category: PostCategory) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(move |p| p.meta.category == category)
    }

    /// Posts carrying a tag (case-insensitive), newest first.
    pub fn posts_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Post> {
        let tag_lower = tag.to_lowercase();
        self.posts
            .iter()
            .filter(move |p| p.meta.tags.iter().any(|t| t.to_lowercase() == tag_lower))
    }

    /// Recent posts, optionally excluding a specific slug.
    #[must_use]
    pub fn recent_posts(&self, limit: usize, exclude_slug: Option<&str>) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| exclude_slug.is_none_or(|s| p.slug != s))
            .take(limit)
            .collect()
    }

    /// All unique tags, sorted.
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .posts
            .iter()
            .flat_map(|p| p.meta.tags.clone())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// All FAQ entries, in display order.
    #[must_use]
    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    /// FAQ entries in a category.
    pub fn faqs_by_category(&self, category: FaqCategory) -> impl Iterator<Item = &FaqEntry> {
        self.faqs.iter().filter(move |f| f.category == category)
    }

    /// Case-insensitive substring search over questions and answers.
    #[must_use]
    pub fn search_faqs(&self, query: &str) -> Vec<&FaqEntry> {
        let needle = query.to_lowercase();
        self.faqs
            .iter()
            .filter(|f| {
                f.question.to_lowercase().contains(&needle)
                    || f.answer.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::load()
    }
}

/// Render a sample post: markdown to HTML plus reading-time estimate.
fn load_post(source: PostSource) -> Post {
    let content_html = render_markdown(source.body);

    // Estimate reading time (average 200 words per minute)
    let word_count = source.body.split_whitespace().count();
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let reading_time_minutes = ((word_count as f32) / 200.0).ceil() as u32;

    Post {
        slug: source.slug.to_owned(),
        meta: source.meta,
        content_html,
        reading_time_minutes: reading_time_minutes.max(1),
    }
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    markdown_to_html(content, &options)
}

// =============================================================================
// Sample content
// =============================================================================

struct PostSource {
    slug: &'static str,
    meta: PostMeta,
    body: &'static str,
}

#[allow(clippy::too_many_lines)]
fn sample_posts() -> Vec<PostSource> {
    let meta = |title: &str,
                excerpt: &str,
                author: &str,
                date: (i32, u32, u32),
                category: PostCategory,
                image: &str,
                tags: &[&str]| {
        PostMeta {
            title: title.to_owned(),
            excerpt: excerpt.to_owned(),
            author: author.to_owned(),
            published_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap_or_default(),
            category,
            image: image.to_owned(),
            tags: tags.iter().map(|&t| t.to_owned()).collect(),
        }
    };

    vec![
        PostSource {
            slug: "top-10-gadgets-2024",
            meta: meta(
                "Top 10 Gadgets for 2024: Must-Have Tech Accessories",
                "Discover the latest technology trends and essential gadgets that will enhance your digital lifestyle this year.",
                "Sarah Johnson",
                (2024, 1, 15),
                PostCategory::Reviews,
                "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=600&h=400&fit=crop",
                &["gadgets", "technology", "2024"],
            ),
            body: "Technology moves fast, and 2024 is no exception. From wireless audio to smart \
home hubs, this year's accessories focus on longer battery life and fewer cables.\n\n\
## Our picks\n\n\
- Noise-cancelling headphones with 30-hour battery life\n\
- Fitness watches with on-wrist GPS\n\
- Qi charging pads that finally charge through cases\n\n\
Every pick below was tested for at least two weeks of daily use before making the list.",
        },
        PostSource {
            slug: "sustainable-shopping-guide",
            meta: meta(
                "Sustainable Shopping: How to Make Eco-Friendly Purchases",
                "Learn how to shop responsibly and make choices that benefit both you and the environment.",
                "Michael Chen",
                (2024, 1, 12),
                PostCategory::Tips,
                "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=600&h=400&fit=crop",
                &["sustainability", "eco-friendly", "shopping"],
            ),
            body: "Shopping sustainably does not mean buying less of everything; it means buying \
better. Durable goods with repairable parts outlast three rounds of cheaper replacements.\n\n\
Look for recycled packaging, third-party certifications, and published supply chains. \
When in doubt, the product page's materials section tells you more than the marketing copy.",
        },
        PostSource {
            slug: "winter-fashion-trends",
            meta: meta(
                "Winter Fashion Trends: Stay Warm and Stylish",
                "Explore the hottest winter fashion trends and find the perfect pieces for the cold season.",
                "Emily Davis",
                (2024, 1, 10),
                PostCategory::Trends,
                "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=600&h=400&fit=crop",
                &["fashion", "winter", "trends"],
            ),
            body: "Layering is back, and this winter it is all about mixing textures: wool over \
mesh, leather over knits.\n\n\
Minimalist watches and slim leather goods round out the season's accessories. Neutral \
palettes dominate, with a single saturated accent piece doing the talking.",
        },
        PostSource {
            slug: "home-office-setup-guide",
            meta: meta(
                "Home Office Setup Guide: Boost Your Productivity",
                "Create the perfect home office environment with our comprehensive setup guide and product recommendations.",
                "Sarah Johnson",
                (2024, 1, 8),
                PostCategory::Tips,
                "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=600&h=400&fit=crop",
                &["home office", "productivity", "setup"],
            ),
            body: "A good home office starts with the chair. Lumbar support and adjustable height \
matter more than any gadget on your desk.\n\n\
## The essentials\n\n\
1. An ergonomic chair you can sit in for eight hours\n\
2. A desk at elbow height\n\
3. Light that comes from beside your screen, not behind it\n\n\
Add a programmable coffee maker within walking distance and you may never commute again.",
        },
        PostSource {
            slug: "sustainability-initiative",
            meta: meta(
                "EliteShop's New Sustainability Initiative",
                "We're excited to announce our new commitment to sustainable practices and eco-friendly packaging.",
                "EliteShop Team",
                (2024, 1, 5),
                PostCategory::News,
                "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=600&h=400&fit=crop",
                &["sustainability", "company news", "eco-friendly"],
            ),
            body: "Starting this quarter, every EliteShop order ships in fully recyclable \
packaging, and our warehouses run on renewable energy contracts.\n\n\
This is the first step in a program we will be reporting on openly throughout the year.",
        },
        PostSource {
            slug: "customer-spotlight-top-reviewer",
            meta: meta(
                "Customer Spotlight: Meet Our Top Reviewer",
                "Get to know Jane, one of our most active product reviewers and her favorite EliteShop finds.",
                "Emily Davis",
                (2024, 1, 3),
                PostCategory::News,
                "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=600&h=400&fit=crop",
                &["customers", "reviews", "community"],
            ),
            body: "Jane has written over two hundred reviews in the past year, and her \
photography has set the bar for the whole community.\n\n\
Her current favorites: the wireless headphones she calls \"commute armor\" and a coffee \
maker she swears brews better than her local cafe.",
        },
    ]
}

fn sample_faqs() -> Vec<FaqEntry> {
    let faq = |id: i32, question: &str, answer: &str, category: FaqCategory| FaqEntry {
        id: FaqId::new(id),
        question: question.to_owned(),
        answer: answer.to_owned(),
        category,
    };

    vec![
        faq(
            1,
            "How do I place an order?",
            "To place an order, browse our products, add items to your cart, and proceed to checkout. You'll need to provide shipping and payment information to complete your purchase.",
            FaqCategory::Orders,
        ),
        faq(
            2,
            "What payment methods do you accept?",
            "We accept major credit cards (Visa, MasterCard, American Express), PayPal, and Apple Pay for secure and convenient payment processing.",
            FaqCategory::Payment,
        ),
        faq(
            3,
            "How long does shipping take?",
            "Standard shipping typically takes 3-5 business days within the continental US. Express shipping (1-2 business days) and overnight shipping are also available for an additional fee.",
            FaqCategory::Shipping,
        ),
        faq(
            4,
            "What is your return policy?",
            "We offer a 30-day return policy for most items. Products must be in their original condition with tags attached. Some items like personalized products are not returnable.",
            FaqCategory::Returns,
        ),
        faq(
            5,
            "How do I track my order?",
            "Once your order ships, you'll receive a tracking number via email. You can also check your order status by logging into your account and viewing your order history.",
            FaqCategory::Orders,
        ),
        faq(
            6,
            "Do you offer international shipping?",
            "Yes, we ship to most countries worldwide. International shipping rates and delivery times vary by location. Additional customs fees may apply.",
            FaqCategory::Shipping,
        ),
        faq(
            7,
            "Can I change or cancel my order?",
            "Orders can be modified or cancelled within 2 hours of placement. Please contact our customer service team immediately if you need to make changes.",
            FaqCategory::Orders,
        ),
        faq(
            8,
            "Are my payment details secure?",
            "Yes, we use SSL encryption and PCI-compliant payment processing to ensure your payment information is secure. We never store your full credit card details.",
            FaqCategory::Payment,
        ),
        faq(
            9,
            "How do I create an account?",
            "Click the 'Account' link in the navigation and select 'Sign Up'. You'll need to provide your email address and create a password to register.",
            FaqCategory::Account,
        ),
        faq(
            10,
            "What should I do if I receive a damaged item?",
            "Please contact our customer service team immediately with photos of the damaged item. We'll arrange for a replacement or full refund at no cost to you.",
            FaqCategory::Returns,
        ),
        faq(
            11,
            "Do you offer gift wrapping?",
            "Yes, we offer complimentary gift wrapping for most items. You can select this option during checkout and add a personalized message.",
            FaqCategory::Orders,
        ),
        faq(
            12,
            "How do I reset my password?",
            "Use the 'Forgot Password' link on the sign-in form. We'll email you a reset link that is valid for 24 hours.",
            FaqCategory::Account,
        ),
    ]
}
