use serde::{Deserialize, Serialize};

/// Rule table holding every weight and bound the scoring engine applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub empty_gallery_points: i32,
    pub hd_picture_points: i32,
    pub standard_picture_points: i32,
    pub description_points: i32,
    pub flat_medium_description: WordCountBand,
    pub flat_long_description: WordCountBand,
    pub chalet_long_description: WordCountBand,
    pub keywords: Vec<String>,
    pub keyword_points: i32,
    pub complete_score: i32,
    pub min_score: u8,
    pub max_score: u8,
    pub relevance_threshold: u8,
}

/// Word-count range (inclusive, open-ended when `max_words` is `None`) and the
/// points it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountBand {
    pub min_words: usize,
    pub max_words: Option<usize>,
    pub points: i32,
}

impl WordCountBand {
    pub fn contains(&self, word_count: usize) -> bool {
        word_count >= self.min_words && self.max_words.map_or(true, |max| word_count <= max)
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            empty_gallery_points: -10,
            hd_picture_points: 20,
            standard_picture_points: 10,
            description_points: 5,
            flat_medium_description: WordCountBand {
                min_words: 20,
                max_words: Some(49),
                points: 10,
            },
            flat_long_description: WordCountBand {
                min_words: 50,
                max_words: None,
                points: 30,
            },
            chalet_long_description: WordCountBand {
                min_words: 50,
                max_words: None,
                points: 20,
            },
            keywords: ["luminoso", "nuevo", "céntrico", "reformado", "ático"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            keyword_points: 5,
            complete_score: 40,
            min_score: 0,
            max_score: 100,
            relevance_threshold: 40,
        }
    }
}

impl ScoringRules {
    pub fn clamp(&self, raw_score: i32) -> u8 {
        let clamped = raw_score
            .max(i32::from(self.min_score))
            .min(i32::from(self.max_score));
        clamped as u8
    }

    pub fn is_relevant(&self, score: u8) -> bool {
        score >= self.relevance_threshold
    }
}
