use std::ops::RangeInclusive;

/// An inclusive span of hours `[start, end]`, 1-based.
///
/// This is the form the block-span enumeration produces and the form in
/// which the optimization collaborator lays out its block columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourSpan {
    /// First delivery hour (inclusive).
    pub start: usize,
    /// Last delivery hour (inclusive).
    pub end: usize,
}

impl HourSpan {
    /// Number of hours covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the span covers no hours. Never true for enumerated spans.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// The delivery interval of a block order: hours in `(start, end]`.
///
/// The exclusive-start convention matches how the surrounding system
/// timestamps deliveries (hour `h` labels the period ending at `h`), so a
/// span `[s, e]` of delivery hours is carried as `(s - 1, e]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryInterval {
    start: usize,
    end: usize,
}

impl DeliveryInterval {
    /// The exclusive start hour.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The inclusive end hour.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether delivery takes place in `hour`, i.e. `start < hour <= end`.
    pub fn covers(&self, hour: usize) -> bool {
        self.start < hour && hour <= self.end
    }

    /// The delivery hours, `start + 1..=end`.
    pub fn hours(&self) -> RangeInclusive<usize> {
        self.start + 1..=self.end
    }
}

impl From<HourSpan> for DeliveryInterval {
    fn from(span: HourSpan) -> Self {
        Self {
            start: span.start - 1,
            end: span.end,
        }
    }
}

/// Enumerate every contiguous hour span of length at least `min_length`
/// within a horizon of `horizon` hours.
///
/// Spans are ordered start-major: for each start hour `h` from 1 to the
/// horizon, every admissible ending in increasing order. The optimization
/// collaborator lays out its block-volume columns in exactly this order, so
/// extraction pairs the returned list positionally against those columns.
/// The list is materialized once and passed around; it is never regenerated
/// on the assumption that two enumerations stay in lockstep.
pub fn block_spans(horizon: usize, min_length: usize) -> Vec<HourSpan> {
    let mut spans = Vec::new();
    for start in 1..=horizon {
        // A zero minimum still yields spans of at least one hour.
        let first_end = start + min_length.saturating_sub(1);
        for end in first_end..=horizon {
            spans.push(HourSpan { start, end });
        }
    }
    spans
}
