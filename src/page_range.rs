// PAGE RANGE PARSING - "1,3,5-8,10" into a sorted, deduplicated page set
use crate::types::{Result, VocabError};
use std::collections::BTreeSet;
use std::fmt;

/// What to do with tokens that are neither `N` nor `N-M`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Drop malformed tokens silently
    #[default]
    Permissive,
    /// Reject the whole expression if any non-empty token is malformed
    Strict,
}

/// Inclusive run of page numbers, shown as `7` or `5-9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageSpan {
    pub start: u32,
    pub end: u32,
}

impl PageSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn single(page: u32) -> Self {
        Self::new(page, page)
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for PageSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// `7, 9, 12-4000000000`
pub fn format_spans(spans: &[PageSpan]) -> String {
    spans
        .iter()
        .map(PageSpan::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sort and merge overlapping or adjacent spans
fn merge_spans(mut spans: Vec<PageSpan>) -> Vec<PageSpan> {
    spans.sort();
    let mut merged: Vec<PageSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Ascending, duplicate-free set of 1-based page numbers.
///
/// When parsed with a page ceiling, pages above it are kept as spans in
/// `beyond` instead of being listed one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<u32>,
    beyond: Vec<PageSpan>,
}

impl PageSet {
    /// Every page of a document with `count` pages
    pub fn all(count: u32) -> Self {
        Self {
            pages: (1..=count).collect(),
            beyond: Vec::new(),
        }
    }

    /// Nothing was selected at all, in range or not
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.beyond.is_empty()
    }

    /// Number of listed pages (spans above the ceiling are not counted)
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages.binary_search(&page).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.pages
    }

    /// Spans that were above the parse ceiling
    pub fn beyond_ceiling(&self) -> &[PageSpan] {
        &self.beyond
    }

    /// Everything outside `1..=max_page`, merged into ascending spans
    pub fn out_of_range(&self, max_page: u32) -> Vec<PageSpan> {
        let spans = self
            .iter()
            .filter(|&p| p < 1 || p > max_page)
            .map(PageSpan::single)
            .chain(self.beyond.iter().copied())
            .collect();
        merge_spans(spans)
    }

    /// Fail with every out-of-range page at once rather than the first one
    pub fn validate(&self, max_page: u32) -> Result<()> {
        let pages = self.out_of_range(max_page);
        if pages.is_empty() {
            Ok(())
        } else {
            Err(VocabError::OutOfRange {
                pages,
                max: max_page,
            })
        }
    }
}

impl From<BTreeSet<u32>> for PageSet {
    fn from(set: BTreeSet<u32>) -> Self {
        Self {
            pages: set.into_iter().collect(),
            beyond: Vec::new(),
        }
    }
}

impl FromIterator<u32> for PageSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().collect::<BTreeSet<_>>().into()
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeParser {
    policy: ParsePolicy,
    max_page: Option<u32>,
}

impl RangeParser {
    pub fn new(policy: ParsePolicy) -> Self {
        Self {
            policy,
            max_page: None,
        }
    }

    pub fn strict() -> Self {
        Self::new(ParsePolicy::Strict)
    }

    /// Only list pages up to `max_page`; anything above is kept as spans.
    /// Keeps `1-4000000000` from materializing four billion pages.
    pub fn with_max_page(mut self, max_page: u32) -> Self {
        self.max_page = Some(max_page);
        self
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn max_page(&self) -> Option<u32> {
        self.max_page
    }

    /// Parse a page-range expression. Never fails under `ParsePolicy::Permissive`.
    pub fn parse(&self, expression: &str) -> Result<PageSet> {
        let ceiling = self.max_page.unwrap_or(u32::MAX);
        let mut pages = BTreeSet::new();
        let mut beyond = Vec::new();
        let mut malformed = Vec::new();

        for token in expression.split(',').map(str::trim) {
            let (start, end) = match parse_token(token) {
                Some(Token::Single(page)) => (page, page),
                Some(Token::Span(start, end)) => (start, end),
                None if token.is_empty() => continue,
                None => {
                    malformed.push(token.to_string());
                    continue;
                }
            };
            // start > end leaves this empty
            if start > end {
                continue;
            }
            if start <= ceiling {
                pages.extend(start..=end.min(ceiling));
            }
            if end > ceiling {
                beyond.push(PageSpan::new(start.max(ceiling + 1), end));
            }
        }

        if self.policy == ParsePolicy::Strict && !malformed.is_empty() {
            return Err(VocabError::MalformedRange { tokens: malformed });
        }
        if !malformed.is_empty() {
            tracing::debug!("dropped malformed page tokens: {:?}", malformed);
        }

        Ok(PageSet {
            pages: pages.into_iter().collect(),
            beyond: merge_spans(beyond),
        })
    }
}

/// Permissive parse; malformed tokens are dropped
pub fn parse_page_ranges(expression: &str) -> PageSet {
    RangeParser::default()
        .parse(expression)
        .unwrap_or_default()
}

enum Token {
    Single(u32),
    Span(u32, u32),
}

fn parse_token(token: &str) -> Option<Token> {
    if token.contains('-') {
        let mut parts = token.split('-');
        let (start, end) = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Some(Token::Span(parse_number(start)?, parse_number(end)?))
    } else {
        parse_number(token).map(Token::Single)
    }
}

// ASCII digits only; "+3", " 3" and overflowing values are malformed
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
