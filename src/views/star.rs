// src/views/star.rs

//! Reusable star-rating widget.

/// Number of stars in a full bar.
const STAR_COUNT: f64 = 5.0;

/// Star bar whose visible width follows the bound rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    rating: f64,
    max_width: f64,
    star_width: f64,
}

impl StarRating {
    pub fn new(max_width: f64) -> Self {
        Self {
            rating: 0.0,
            max_width,
            star_width: 0.0,
        }
    }

    pub fn with_rating(rating: f64, max_width: f64) -> Self {
        let mut star = Self::new(max_width);
        star.set_rating(rating);
        star
    }

    /// Bind a new rating. The width is recomputed on every change.
    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
        self.star_width = rating * self.max_width / STAR_COUNT;
    }

    pub fn star_width(&self) -> f64 {
        self.star_width
    }

    /// Payload emitted to the container when the stars are clicked.
    pub fn click(&self) -> String {
        log::debug!("Star rating {} was clicked", self.rating);
        format!("The rating {} was clicked!", self.rating)
    }

    /// Text bar: filled stars for the visible width, hollow for the rest.
    pub fn render(&self) -> String {
        let filled = if self.max_width > 0.0 {
            (self.star_width / self.max_width * STAR_COUNT)
                .round()
                .clamp(0.0, STAR_COUNT) as usize
        } else {
            0
        };
        format!(
            "{}{} ({})",
            "★".repeat(filled),
            "☆".repeat(STAR_COUNT as usize - filled),
            self.rating
        )
    }
}
