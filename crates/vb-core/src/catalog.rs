//! Static registry of survey questions and shoppable products.
//!
//! Read-only data injected at startup. In a production deployment this
//! would come from a CMS or affiliate feed; here it is a fixed in-memory
//! catalog, which is all the pipeline requires.

use serde::{Deserialize, Serialize};

/// Per-question selection cap ("select up to 3 images per category").
pub const MAX_SELECTIONS_PER_QUESTION: usize = 3;

/// A selectable survey image. Always carries a label and style tags —
/// never a bare image URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOption {
    pub label: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl StyleOption {
    pub fn new(label: &str, image: &str, tags: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            image: image.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// One step of the preference survey.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub options: Vec<StyleOption>,
    pub max_selections: usize,
}

impl Question {
    pub fn new(id: &str, title: &str, options: Vec<StyleOption>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            options,
            max_selections: MAX_SELECTIONS_PER_QUESTION,
        }
    }

    /// Look up an option by its label (the selection identity).
    pub fn option_by_label(&self, label: &str) -> Option<&StyleOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// A shoppable product from the (mocked) affiliate catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub merchant: String,
    pub category: String,
    pub tags: Vec<String>,
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=400&h=300&fit=crop")
}

/// The four survey questions, eight options each.
pub fn survey_questions() -> Vec<Question> {
    vec![
        Question::new(
            "fitness",
            "Fitness & Wellness",
            vec![
                StyleOption::new(
                    "Gym session",
                    &unsplash("photo-1571019613454-1cb2f99b2d8b"),
                    &["active", "wellness"],
                ),
                StyleOption::new(
                    "Trail run",
                    &unsplash("photo-1540569876979-df919b7c1d70"),
                    &["active", "outdoors"],
                ),
                StyleOption::new(
                    "Morning stretch",
                    &unsplash("photo-1534438327276-14e5300c3a48"),
                    &["wellness", "minimalist"],
                ),
                StyleOption::new(
                    "Yoga flow",
                    &unsplash("photo-1506629905607-0e3dd3bb9e0e"),
                    &["wellness", "mindful"],
                ),
                StyleOption::new(
                    "Meditation corner",
                    &unsplash("photo-1518611012118-696072aa579a"),
                    &["mindful", "minimalist"],
                ),
                StyleOption::new(
                    "Healthy bowl",
                    &unsplash("photo-1593079831268-3381b0db4a77"),
                    &["wellness", "nutrition"],
                ),
                StyleOption::new(
                    "Cycling",
                    &unsplash("photo-1517836357463-d25dfeac3438"),
                    &["active", "outdoors"],
                ),
                StyleOption::new(
                    "Climbing wall",
                    &unsplash("photo-1544367567-0f2fcb009e0b"),
                    &["active", "adventurous"],
                ),
            ],
        ),
        Question::new(
            "travel",
            "Travel & Adventure",
            vec![
                StyleOption::new(
                    "Tropical coast",
                    &unsplash("photo-1488646953014-85cb44e25828"),
                    &["adventurous", "coastal"],
                ),
                StyleOption::new(
                    "City lights",
                    &unsplash("photo-1502780402662-acc01917cf4a"),
                    &["urban", "modern"],
                ),
                StyleOption::new(
                    "Desert road",
                    &unsplash("photo-1539635278303-d4002c07eae3"),
                    &["adventurous", "outdoors"],
                ),
                StyleOption::new(
                    "Mountain peak",
                    &unsplash("photo-1506905925346-21bda4d32df4"),
                    &["adventurous", "outdoors"],
                ),
                StyleOption::new(
                    "Backpacking",
                    &unsplash("photo-1507003211169-0a1dd7228f2d"),
                    &["adventurous", "minimalist"],
                ),
                StyleOption::new(
                    "Lakeside camp",
                    &unsplash("photo-1476514525535-07fb3b4ae5f1"),
                    &["outdoors", "cozy"],
                ),
                StyleOption::new(
                    "Old town streets",
                    &unsplash("photo-1540979388789-6cee28a1cdc9"),
                    &["urban", "cultural"],
                ),
                StyleOption::new(
                    "Vineyard escape",
                    &unsplash("photo-1501594907352-04cda38ebc29"),
                    &["cultural", "slow-living"],
                ),
            ],
        ),
        Question::new(
            "home",
            "Home & Living",
            vec![
                StyleOption::new(
                    "Reading nook",
                    &unsplash("photo-1586023492125-27b2c045efd7"),
                    &["cozy", "home-decor"],
                ),
                StyleOption::new(
                    "Plant shelf",
                    &unsplash("photo-1567767292278-a4f21aa2d36e"),
                    &["plants", "home-decor"],
                ),
                StyleOption::new(
                    "Open kitchen",
                    &unsplash("photo-1556909114-f6e7ad7d3136"),
                    &["modern", "home-decor"],
                ),
                StyleOption::new(
                    "Calm bedroom",
                    &unsplash("photo-1618221195710-dd6b41faaea6"),
                    &["minimalist", "cozy"],
                ),
                StyleOption::new(
                    "Workspace",
                    &unsplash("photo-1576013551627-0cc20b96c2a7"),
                    &["minimalist", "modern"],
                ),
                StyleOption::new(
                    "Sunlit living room",
                    &unsplash("photo-1595526114035-0d45ed16cfbf"),
                    &["modern", "airy"],
                ),
                StyleOption::new(
                    "Ceramic details",
                    &unsplash("photo-1522444195799-478538b28823"),
                    &["ceramic", "home-decor"],
                ),
                StyleOption::new(
                    "Warm textures",
                    &unsplash("photo-1571508601205-de58ff9b9bce"),
                    &["cozy", "sustainable"],
                ),
            ],
        ),
        Question::new(
            "fashion",
            "Fashion & Style",
            vec![
                StyleOption::new(
                    "Capsule wardrobe",
                    &unsplash("photo-1445205170230-053b83016050"),
                    &["minimalist", "versatile"],
                ),
                StyleOption::new(
                    "Linen layers",
                    &unsplash("photo-1566479179817-bea0b1d0c1b6"),
                    &["sustainable", "airy"],
                ),
                StyleOption::new(
                    "Street style",
                    &unsplash("photo-1490427712608-588e68359dbd"),
                    &["urban", "modern"],
                ),
                StyleOption::new(
                    "Soft knits",
                    &unsplash("photo-1594633313593-bab3825d0caf"),
                    &["cozy", "sustainable"],
                ),
                StyleOption::new(
                    "Tailored looks",
                    &unsplash("photo-1516762689617-e1cffcef479d"),
                    &["modern", "versatile"],
                ),
                StyleOption::new(
                    "Leather accents",
                    &unsplash("photo-1581044777550-4cfa60707c03"),
                    &["leather", "versatile"],
                ),
                StyleOption::new(
                    "Statement accessories",
                    &unsplash("photo-1558769132-cb1aea458c5e"),
                    &["bold", "modern"],
                ),
                StyleOption::new(
                    "Everyday basics",
                    &unsplash("photo-1509631179647-0177331693ae"),
                    &["minimalist", "sustainable"],
                ),
            ],
        ),
    ]
}

fn product(
    id: u32,
    title: &str,
    price: f64,
    original_price: Option<f64>,
    rating: f64,
    review_count: u32,
    merchant: &str,
    category: &str,
    tags: &[&str],
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        original_price,
        rating,
        review_count,
        merchant: merchant.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The mocked affiliate product catalog.
pub fn product_catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Wireless Fitness Tracker",
            129.99,
            Some(159.99),
            4.5,
            2847,
            "Amazon",
            "fitness",
            &["health", "technology", "minimalist"],
        ),
        product(
            2,
            "Sustainable Yoga Mat",
            48.00,
            Some(65.00),
            4.8,
            1203,
            "REI",
            "fitness",
            &["eco-friendly", "wellness", "minimalist"],
        ),
        product(
            3,
            "Minimalist Travel Backpack",
            89.99,
            None,
            4.6,
            892,
            "Peak Design",
            "travel",
            &["minimalist", "travel", "durable"],
        ),
        product(
            4,
            "Ceramic Plant Pot Set",
            34.99,
            None,
            4.4,
            567,
            "West Elm",
            "home",
            &["home-decor", "plants", "ceramic", "modern"],
        ),
        product(
            5,
            "Organic Cotton Oversized Sweater",
            78.00,
            Some(95.00),
            4.7,
            1456,
            "Everlane",
            "fashion",
            &["sustainable", "cozy", "minimalist"],
        ),
        product(
            6,
            "Smart Water Bottle",
            59.99,
            None,
            4.3,
            743,
            "Hydro Flask",
            "fitness",
            &["hydration", "smart", "sustainable"],
        ),
        product(
            7,
            "Aromatherapy Diffuser",
            42.50,
            None,
            4.6,
            2103,
            "Vitruvi",
            "home",
            &["wellness", "aromatherapy", "home-decor"],
        ),
        product(
            8,
            "Leather Crossbody Bag",
            125.00,
            None,
            4.5,
            634,
            "Madewell",
            "fashion",
            &["leather", "minimalist", "versatile"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_questions_eight_options() {
        let questions = survey_questions();
        assert_eq!(questions.len(), 4);
        for q in &questions {
            assert_eq!(q.options.len(), 8, "question {} option count", q.id);
            assert_eq!(q.max_selections, MAX_SELECTIONS_PER_QUESTION);
        }
    }

    #[test]
    fn test_question_ids_unique() {
        let questions = survey_questions();
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_option_labels_unique_within_question() {
        for q in survey_questions() {
            let mut labels: Vec<&str> = q.options.iter().map(|o| o.label.as_str()).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), q.options.len(), "question {}", q.id);
        }
    }

    #[test]
    fn test_every_option_tagged() {
        for q in survey_questions() {
            for o in &q.options {
                assert!(!o.tags.is_empty(), "option '{}' has no tags", o.label);
                assert!(o.image.starts_with("https://"), "option '{}'", o.label);
            }
        }
    }

    #[test]
    fn test_option_by_label() {
        let questions = survey_questions();
        let q = &questions[0];
        assert!(q.option_by_label("Gym session").is_some());
        assert!(q.option_by_label("Nonexistent").is_none());
    }

    #[test]
    fn test_product_categories_match_questions() {
        let question_ids: Vec<String> =
            survey_questions().into_iter().map(|q| q.id).collect();
        for p in product_catalog() {
            assert!(
                question_ids.contains(&p.category),
                "product '{}' has unknown category '{}'",
                p.title,
                p.category
            );
        }
    }

    #[test]
    fn test_discounted_products_cost_less() {
        for p in product_catalog() {
            if let Some(orig) = p.original_price {
                assert!(p.price < orig, "product '{}'", p.title);
            }
        }
    }
}
