use std::ops::Range;

/// Positions of the targets and sources inside the per-location bearing and
/// hint lists.
///
/// Targets always come first. In symmetric requests the single coordinate list
/// fills the target slots and there are no source slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSlots {
    targets: Range<usize>,
    sources: Range<usize>,
}

impl LocationSlots {
    pub fn symmetric(coordinates: usize) -> Self {
        LocationSlots {
            targets: 0..coordinates,
            sources: coordinates..coordinates,
        }
    }

    pub fn asymmetric(destinations: usize, sources: usize) -> Self {
        LocationSlots {
            targets: 0..destinations,
            sources: destinations..destinations + sources,
        }
    }

    pub fn targets(&self) -> Range<usize> {
        self.targets.clone()
    }

    pub fn sources(&self) -> Range<usize> {
        self.sources.clone()
    }

    pub fn total(&self) -> usize {
        self.sources.end
    }
}
