//! Product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::Validate;
use crate::{SchemaError, StarRating};

/// A customer review embedded in a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
    /// Whole-star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl Review {
    /// Star rating for this review.
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(f64::from(self.rating))
    }

    /// Sentiment bucket for the review badge.
    pub fn sentiment(&self) -> ReviewSentiment {
        ReviewSentiment::from_rating(self.rating)
    }

    /// Review date in long US form, e.g. `May 23, 2024`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

impl Validate for Review {
    fn validate(&self) -> Result<(), SchemaError> {
        if (1..=5).contains(&self.rating) {
            Ok(())
        } else {
            Err(SchemaError::out_of_range("rating", self.rating))
        }
    }
}

/// Sentiment bucket derived from a review rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSentiment {
    Positive,
    Neutral,
    Negative,
}

impl ReviewSentiment {
    /// Four stars and up are positive, three is neutral, the rest negative.
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 4 {
            ReviewSentiment::Positive
        } else if rating >= 3 {
            ReviewSentiment::Neutral
        } else {
            ReviewSentiment::Negative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewSentiment::Positive => "Positive",
            ReviewSentiment::Neutral => "Neutral",
            ReviewSentiment::Negative => "Negative",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ReviewSentiment::Positive => "sentiment-positive",
            ReviewSentiment::Neutral => "sentiment-neutral",
            ReviewSentiment::Negative => "sentiment-negative",
        }
    }
}
