use super::super::domain::{Ad, PictureQuality, Typology};
use super::config::ScoringRules;
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_ad(ad: &Ad, rules: &ScoringRules) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::new();
    let mut total_score: i32 = 0;

    if ad.pictures.is_empty() {
        components.push(ScoreComponent {
            factor: ScoreFactor::Pictures,
            points: rules.empty_gallery_points,
            notes: "no pictures".to_string(),
        });
        total_score += rules.empty_gallery_points;
    } else {
        let hd = ad
            .pictures
            .iter()
            .filter(|picture| picture.quality == PictureQuality::Hd)
            .count();
        let standard = ad.pictures.len() - hd;
        let points =
            hd as i32 * rules.hd_picture_points + standard as i32 * rules.standard_picture_points;
        components.push(ScoreComponent {
            factor: ScoreFactor::Pictures,
            points,
            notes: format!("{hd} HD and {standard} standard picture(s)"),
        });
        total_score += points;
    }

    if let Some(description) = &ad.description {
        if !description.is_empty() {
            components.push(ScoreComponent {
                factor: ScoreFactor::Description,
                points: rules.description_points,
                notes: "description present".to_string(),
            });
            total_score += rules.description_points;
        }

        let words = tokenize(description);
        let word_count = words.len();

        let band = match ad.typology {
            Typology::Flat => [rules.flat_medium_description, rules.flat_long_description]
                .into_iter()
                .find(|band| band.contains(word_count)),
            Typology::Chalet => Some(rules.chalet_long_description)
                .filter(|band| band.contains(word_count)),
            Typology::Garage => None,
        };

        if let Some(band) = band {
            components.push(ScoreComponent {
                factor: ScoreFactor::WordCount,
                points: band.points,
                notes: format!(
                    "{word_count} word(s) for {} description",
                    ad.typology.name()
                ),
            });
            total_score += band.points;
        }

        for keyword in &rules.keywords {
            if words.contains(&keyword.as_str()) {
                components.push(ScoreComponent {
                    factor: ScoreFactor::Keyword,
                    points: rules.keyword_points,
                    notes: format!("keyword '{keyword}'"),
                });
                total_score += rules.keyword_points;
            }
        }
    }

    if ad.is_complete {
        let adjustment = rules.complete_score - total_score;
        components.push(ScoreComponent {
            factor: ScoreFactor::Completeness,
            points: adjustment,
            notes: format!("complete ad resets score to {}", rules.complete_score),
        });
        total_score = rules.complete_score;
    }

    (components, total_score)
}

/// Splits on single spaces, keeping interior empty tokens and dropping trailing ones.
fn tokenize(description: &str) -> Vec<&str> {
    let mut words: Vec<&str> = description.split(' ').collect();
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}
