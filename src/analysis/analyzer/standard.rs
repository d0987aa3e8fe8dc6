//! Standard analyzer with the default pipeline for classification input.
//!
//! # Pipeline
//!
//! 1. UnicodeNormalizationCharFilter (NFKC)
//! 2. PatternReplaceCharFilter (`[,.(){}[]!]` → space)
//! 3. UnicodeWordTokenizer
//! 4. LowercaseFilter
//!
//! Stop words are not removed by default: frequent words are shared by all
//! categories and mostly cancel out in the arg-max.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Characters replaced by a space before tokenization.
pub const DEFAULT_PUNCTUATION_PATTERN: &str = r"[,\.\(\)\{\}\[\]\!]";

/// A standard analyzer that provides good defaults for most use cases.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        Ok(StandardAnalyzer {
            inner: Self::base_pipeline()?.with_name("standard"),
        })
    }

    /// Create a standard analyzer that also removes English stop words.
    pub fn with_stop_words() -> Result<Self> {
        let analyzer = Self::base_pipeline()?
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("standard_stop");

        Ok(StandardAnalyzer { inner: analyzer })
    }

    fn base_pipeline() -> Result<PipelineAnalyzer> {
        Ok(PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_char_filter(Arc::new(UnicodeNormalizationCharFilter::new(
                NormalizationForm::NFKC,
            )))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
                DEFAULT_PUNCTUATION_PATTERN,
                " ",
            )?))
            .add_filter(Arc::new(LowercaseFilter::new())))
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
