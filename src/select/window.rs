use super::error::Error;
use std::iter::StepBy;
use std::ops::RangeInclusive;

/// Caller-requested frame range and stride, before clamping.
///
/// Bounds are signed so out-of-range requests (a negative start, an end past
/// the last frame) can be clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub stride: usize,
}

impl Default for FrameRange {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            stride: 1,
        }
    }
}

impl FrameRange {
    pub fn new(start: Option<i64>, end: Option<i64>, stride: usize) -> Self {
        Self { start, end, stride }
    }

    pub fn with_stride(stride: usize) -> Self {
        Self {
            stride,
            ..Self::default()
        }
    }
}

/// A validated `(start, end, stride)` window over zero-based frame indices.
///
/// Frame `i` is selected iff `start <= i <= end` and
/// `(i - start) % stride == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionWindow {
    start: usize,
    end: usize,
    stride: usize,
}

impl SelectionWindow {
    /// Clamps `range` to `total_frames` and validates it.
    ///
    /// Missing bounds default to the first and last frame. Fails if the
    /// stride is zero or the clamped start lies past the clamped end (which
    /// includes every request against an empty trajectory).
    pub fn resolve(range: &FrameRange, total_frames: usize) -> Result<Self, Error> {
        if range.stride == 0 {
            return Err(Error::InvalidStride);
        }

        let last = i64::try_from(total_frames).unwrap_or(i64::MAX) - 1;
        let start = range.start.unwrap_or(0).max(0);
        let end = range.end.unwrap_or(last).min(last);
        if start > end {
            return Err(Error::InvalidWindow { start, end });
        }

        Ok(Self {
            start: start as usize,
            end: end as usize,
            stride: range.stride,
        })
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether `index` lies inside `[start, end]`, regardless of stride.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    #[inline]
    pub fn selects(&self, index: usize) -> bool {
        self.contains(index) && (index - self.start) % self.stride == 0
    }

    /// Whether scanning can stop once `index` has been handled.
    #[inline]
    pub fn is_last(&self, index: usize) -> bool {
        index >= self.end
    }

    /// Number of frames inside `[start, end]`.
    pub fn span(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn selected_count(&self) -> usize {
        (self.end - self.start) / self.stride + 1
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> StepBy<RangeInclusive<usize>> {
        (self.start..=self.end).step_by(self.stride)
    }
}

impl From<SelectionWindow> for FrameRange {
    fn from(window: SelectionWindow) -> Self {
        Self {
            start: Some(window.start as i64),
            end: Some(window.end as i64),
            stride: window.stride,
        }
    }
}
