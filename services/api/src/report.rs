use crate::infra::{seed_ads, InMemoryAdRepository};
use ad_scoring::ads::{AdsService, PublicAd, QualityAd, ScoringRules, ScoringSummary};
use ad_scoring::config::AppConfig;
use ad_scoring::error::AppError;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file of ads to score instead of the configured seed
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Emit compact rather than pretty-printed JSON
    #[arg(long)]
    pub(crate) compact: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) summary: ScoringSummary,
    pub(crate) public: Vec<PublicAd>,
    pub(crate) quality: Vec<QualityAd>,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(seed) = args.seed {
        config.ads.seed_path = Some(seed);
    }

    let rules = ScoringRules::default();
    let ads = seed_ads(&config.ads)?;
    let repository = Arc::new(InMemoryAdRepository::with_ads(&rules, ads));
    let service = AdsService::new(repository, rules);

    let report = build_report(&service, Utc::now())?;
    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn build_report(
    service: &AdsService<InMemoryAdRepository>,
    evaluated_at: DateTime<Utc>,
) -> Result<ScoreReport, AppError> {
    let summary = service.score_all_at(evaluated_at)?;
    Ok(ScoreReport {
        evaluated_at,
        summary,
        public: service.list_relevant()?,
        quality: service.list_irrelevant()?,
    })
}
