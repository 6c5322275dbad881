//! Pipeline runner: orchestrates the RAKE stages.
//!
//! [`Rake`] holds a configuration and a prebuilt [`StopwordMatcher`], so
//! repeated extractions never recompile the stop-word pattern. Calling
//! [`Rake::extract`] runs, in order:
//!
//! 1. Split sentences
//! 2. Extract candidate phrases
//! 3. Score words over all candidates
//! 4. Score distinct candidates
//! 5. Rank by score, descending
//!
//! All intermediate state is local to one call; a `Rake` can be shared
//! across threads and used concurrently.

use rayon::prelude::*;

use crate::error::Result;
use crate::nlp::pattern::StopwordMatcher;
use crate::nlp::sentence::split_sentences;
use crate::nlp::stopwords::StopwordList;
use crate::phrase::extraction::CandidateExtractor;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_CANDIDATES,
    STAGE_CANDIDATE_SCORES, STAGE_RANK, STAGE_SENTENCES, STAGE_WORD_SCORES,
};
use crate::scoring::candidate::{generate_candidate_keyword_scores, CandidateScores};
use crate::scoring::word::calculate_word_scores;
use crate::types::{RakeConfig, RankedKeyword};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("rake_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Batches smaller than this are processed sequentially
const PARALLEL_BATCH_THRESHOLD: usize = 4;

/// Sort keywords by score, descending
///
/// The sort is stable: equal scores keep their first-seen order.
pub fn rank_keywords(scores: CandidateScores) -> Vec<RankedKeyword> {
    let mut ranked = scores.into_entries();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Reusable RAKE keyword extractor
#[derive(Debug, Clone)]
pub struct Rake {
    config: RakeConfig,
    matcher: StopwordMatcher,
}

impl Rake {
    /// Create an extractor with default config
    pub fn new(stopwords: &StopwordList) -> Result<Self> {
        Self::with_config(stopwords, RakeConfig::default())
    }

    /// Create an extractor with custom config
    pub fn with_config(stopwords: &StopwordList, config: RakeConfig) -> Result<Self> {
        let matcher = StopwordMatcher::from_list(stopwords)?;
        trace_debug!(
            stopwords = matcher.len(),
            min_char_length = config.min_char_length,
            max_words_length = config.max_words_length,
            min_keyword_frequency = config.min_keyword_frequency,
            "built RAKE extractor"
        );
        Ok(Self::from_matcher(matcher, config))
    }

    /// Create an extractor around an already compiled matcher
    pub fn from_matcher(matcher: StopwordMatcher, config: RakeConfig) -> Self {
        Self { config, matcher }
    }

    pub fn config(&self) -> &RakeConfig {
        &self.config
    }

    pub fn matcher(&self) -> &StopwordMatcher {
        &self.matcher
    }

    /// Extract ranked keywords from `text`
    pub fn extract(&self, text: &str) -> Vec<RankedKeyword> {
        self.extract_with_observer(text, &mut NoopObserver)
    }

    /// Extract ranked keywords, notifying `observer` at each stage boundary
    pub fn extract_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Vec<RankedKeyword> {
        // Stage 1: Split sentences
        let sentences = {
            trace_stage!(STAGE_SENTENCES);
            observer.on_stage_start(STAGE_SENTENCES);
            let clock = StageClock::start();
            let sentences = split_sentences(text);
            observer.on_stage_end(
                STAGE_SENTENCES,
                &StageReport::new(clock.elapsed(), sentences.len()),
            );
            sentences
        };

        // Stage 2: Extract candidates
        let phrases = {
            trace_stage!(STAGE_CANDIDATES);
            observer.on_stage_start(STAGE_CANDIDATES);
            let clock = StageClock::start();
            let phrases = CandidateExtractor::new()
                .with_min_char_length(self.config.min_char_length)
                .with_max_words_length(self.config.max_words_length)
                .extract(&sentences, &self.matcher);
            trace_debug!(candidates = phrases.len(), "extracted candidate phrases");
            observer.on_stage_end(
                STAGE_CANDIDATES,
                &StageReport::new(clock.elapsed(), phrases.len()),
            );
            phrases
        };

        // Stage 3: Score words
        let word_scores = {
            trace_stage!(STAGE_WORD_SCORES);
            observer.on_stage_start(STAGE_WORD_SCORES);
            let clock = StageClock::start();
            let word_scores = calculate_word_scores(&phrases);
            observer.on_stage_end(
                STAGE_WORD_SCORES,
                &StageReport::new(clock.elapsed(), word_scores.len()),
            );
            word_scores
        };

        // Stage 4: Score candidates
        let candidates = {
            trace_stage!(STAGE_CANDIDATE_SCORES);
            observer.on_stage_start(STAGE_CANDIDATE_SCORES);
            let clock = StageClock::start();
            let candidates = generate_candidate_keyword_scores(
                &phrases,
                &word_scores,
                self.config.min_keyword_frequency,
            );
            observer.on_stage_end(
                STAGE_CANDIDATE_SCORES,
                &StageReport::new(clock.elapsed(), candidates.len()),
            );
            candidates
        };

        // Stage 5: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let ranked = rank_keywords(candidates);
        observer.on_stage_end(STAGE_RANK, &StageReport::new(clock.elapsed(), ranked.len()));
        trace_debug!(keywords = ranked.len(), "ranked keywords");

        ranked
    }

    /// Extract keywords from many documents
    ///
    /// Documents are independent and processed in parallel for larger
    /// batches. Output order matches input order.
    pub fn extract_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Vec<RankedKeyword>> {
        if texts.len() < PARALLEL_BATCH_THRESHOLD {
            return texts.iter().map(|t| self.extract(t.as_ref())).collect();
        }

        texts.par_iter().map(|t| self.extract(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::separate_words;
    use crate::pipeline::observer::{StageTimingObserver, STAGES};
    use crate::scoring::candidate::count_occurrences;
    use proptest::prelude::*;

    const PAPER_TEXT: &str = "Compatibility of systems of linear constraints over the set of natural numbers.

Criteria of compatibility of a system of linear Diophantine equations, strict inequations, and nonstrict inequations are considered. Upper bounds for components of a minimal set of solutions and algorithms of construction of minimal generating sets of solutions for all types of systems are given. These criteria and the corresponding algorithms for constructing a minimal supporting set of solutions can be used in solving all the considered types of systems and systems of mixed types.";

    const STOPWORDS: &[&str] = &[
        "of", "the", "over", "a", "and", "are", "for", "all", "these", "can", "be", "used", "in",
    ];

    fn extractor(config: RakeConfig) -> Rake {
        Rake::with_config(&StopwordList::from_list(STOPWORDS), config).unwrap()
    }

    fn phrases(ranked: &[RankedKeyword]) -> Vec<&str> {
        ranked.iter().map(|k| k.phrase.as_str()).collect()
    }

    #[test]
    fn test_paper_ranking() {
        let ranked = extractor(RakeConfig::default()).extract(PAPER_TEXT);

        assert_eq!(ranked.len(), 26);
        assert_eq!(
            phrases(&ranked[..14]),
            vec![
                "minimal generating sets",
                "linear diophantine equations",
                "minimal supporting set",
                "minimal set",
                "linear constraints",
                "natural numbers",
                "strict inequations",
                "nonstrict inequations",
                "upper bounds",
                "mixed types",
                "corresponding algorithms",
                "considered types",
                "set",
                "types",
            ]
        );

        let expected = [8.0 / 3.0 + 6.0, 8.5, 8.0 / 3.0 + 5.0, 8.0 / 3.0 + 2.0, 4.5];
        for (keyword, score) in ranked.iter().zip(expected) {
            assert!((keyword.score - score).abs() < 1e-9, "{keyword:?}");
        }
        assert_eq!(ranked[5].score, 4.0);
        assert_eq!(ranked[8].score, 4.0);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranked = extractor(RakeConfig::default()).extract(PAPER_TEXT);

        assert_eq!(phrases(&ranked[14..16]), vec!["considered", "algorithms"]);
        assert_eq!(
            phrases(&ranked[16..]),
            vec![
                "compatibility",
                "systems",
                "criteria",
                "system",
                "components",
                "solutions",
                "construction",
                "given",
                "constructing",
                "solving",
            ]
        );
        assert!(ranked[16..].iter().all(|k| k.score == 1.0));
    }

    #[test]
    fn test_min_keyword_frequency() {
        let ranked =
            extractor(RakeConfig::new().with_min_keyword_frequency(2)).extract(PAPER_TEXT);

        assert_eq!(
            phrases(&ranked),
            vec!["compatibility", "systems", "criteria", "solutions"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor(RakeConfig::default()).extract("").is_empty());
    }

    #[test]
    fn test_no_stopwords_degrades_gracefully() {
        let rake = Rake::new(&StopwordList::empty()).unwrap();
        let ranked = rake.extract("Natural numbers. Linear constraints over sets");

        assert_eq!(
            phrases(&ranked),
            vec!["linear constraints over sets", "natural numbers"]
        );
        assert_eq!(ranked[0].score, 16.0);
        assert_eq!(ranked[1].score, 4.0);
    }

    #[test]
    fn test_only_stopwords_yields_nothing() {
        let ranked = extractor(RakeConfig::default()).extract("of the, and a. For all");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_keywords_descending() {
        let mut scores = CandidateScores::new();
        scores.insert("low", 1.0);
        scores.insert("high", 9.0);
        scores.insert("mid", 4.0);
        scores.insert("also mid", 4.0);

        let ranked = rank_keywords(scores);
        assert_eq!(phrases(&ranked), vec!["high", "mid", "also mid", "low"]);
    }

    #[test]
    fn test_observer_sees_every_stage() {
        let rake = extractor(RakeConfig::default());
        let mut observer = StageTimingObserver::new();
        let ranked = rake.extract_with_observer(PAPER_TEXT, &mut observer);

        let names: Vec<_> = observer.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, STAGES.to_vec());
        assert_eq!(observer.report(STAGE_CANDIDATES).unwrap().items, 33);
        assert_eq!(observer.report(STAGE_RANK).unwrap().items, ranked.len());
    }

    #[test]
    fn test_extract_batch_matches_single() {
        let rake = extractor(RakeConfig::default());
        let texts = vec![
            PAPER_TEXT,
            "",
            "Linear constraints over natural numbers",
            "strict inequations and nonstrict inequations",
            "minimal generating sets of solutions",
        ];

        let batch = rake.extract_batch(&texts);
        assert_eq!(batch.len(), texts.len());
        for (text, result) in texts.iter().zip(&batch) {
            assert_eq!(result, &rake.extract(text));
        }

        let small = rake.extract_batch(&texts[..2]);
        assert_eq!(small, batch[..2].to_vec());
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rake>();
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ,.]{0,120}"
    }

    proptest! {
        #[test]
        fn prop_extraction_is_idempotent(text in text_strategy()) {
            let rake = extractor(RakeConfig::default());
            let first = serde_json::to_string(&rake.extract(&text)).unwrap();
            let second = serde_json::to_string(&rake.extract(&text)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_min_frequency_only_removes_rare_phrases(
            text in text_strategy(),
            min_frequency in 2usize..5,
        ) {
            let base = extractor(RakeConfig::default());
            let gated = extractor(RakeConfig::default().with_min_keyword_frequency(min_frequency));

            let sentences = split_sentences(&text);
            let candidates = CandidateExtractor::new()
                .with_min_char_length(3)
                .extract(&sentences, base.matcher());
            let counts = count_occurrences(&candidates);

            let all = base.extract(&text);
            let kept = gated.extract(&text);
            prop_assert!(kept.len() <= all.len());

            for keyword in &all {
                let count = counts.get(keyword.phrase.as_str()).copied().unwrap_or(0);
                let survived = kept.iter().any(|k| k.phrase == keyword.phrase);
                prop_assert_eq!(survived, count >= min_frequency);
            }
        }

        #[test]
        fn prop_digit_only_phrases_never_returned(
            text in "[0-9 ,.]{0,40}[a-z ]{0,40}",
            min_char_length in 0usize..4,
        ) {
            let rake = extractor(RakeConfig::default().with_min_char_length(min_char_length));
            for keyword in rake.extract(&text) {
                prop_assert!(keyword.phrase.chars().any(|c| c.is_ascii_alphabetic()));
                prop_assert!(keyword.score >= 0.0);
                if separate_words(&keyword.phrase, 0).is_empty() {
                    prop_assert_eq!(keyword.score, 0.0);
                }
            }
        }
    }
}
