use geo::{Closest, ClosestPoint};
use rstar::primitives::GeomWithData;
use rstar::{AABB, PointDistance, RStarInsertionStrategy, RTree, RTreeObject, RTreeParams};

use crate::coordinate::FixedPointCoordinate;
use crate::types::SegmentId;

use super::Segment;

struct IndexedLine(geo::Line);

impl IndexedLine {
    fn new(start: &FixedPointCoordinate, end: &FixedPointCoordinate) -> Self {
        IndexedLine(geo::Line::new(geo::Coord::from(start), geo::Coord::from(end)))
    }

    fn line(&self) -> &geo::Line {
        &self.0
    }

    /// Closest point on the line and its position along the line in `[0, 1]`.
    fn project(&self, point: &[f64; 2]) -> (geo::Point, f64) {
        let line = self.line();
        let point = geo::Point::new(point[0], point[1]);

        let closest = match line.closest_point(&point) {
            Closest::Intersection(closest) => closest,
            Closest::SinglePoint(closest) => closest,
            Closest::Indeterminate => line.start_point(),
        };

        let length = line.dx().hypot(line.dy());
        if length == 0.0 {
            return (closest, 0.0);
        }

        let along = (closest.x() - line.start.x).hypot(closest.y() - line.start.y);
        (closest, (along / length).clamp(0.0, 1.0))
    }
}

impl RTreeObject for IndexedLine {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let line = self.line();
        AABB::from_corners([line.start.x, line.start.y], [line.end.x, line.end.y])
    }
}

impl PointDistance for IndexedLine {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let (closest, _) = self.project(point);
        let dx = closest.x() - point[0];
        let dy = closest.y() - point[1];
        dx * dx + dy * dy
    }
}

struct IndexedData {
    segment_id: SegmentId,
}

type LocationIndexObject = GeomWithData<IndexedLine, IndexedData>;

struct LocationIndexTreeParams;

impl RTreeParams for LocationIndexTreeParams {
    type DefaultInsertionStrategy = RStarInsertionStrategy;

    const MAX_SIZE: usize = 64;
    const MIN_SIZE: usize = 28;
    const REINSERTION_COUNT: usize = 5;
}

/// A candidate segment returned by the index, closest first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SegmentProjection {
    pub segment_id: SegmentId,
    pub location: FixedPointCoordinate,
    /// Position of `location` between the segment start (0) and end (1).
    pub ratio: f64,
}

pub(crate) struct LocationIndex {
    tree: RTree<LocationIndexObject, LocationIndexTreeParams>,
}

impl LocationIndex {
    pub fn build(nodes: &[FixedPointCoordinate], segments: &[Segment]) -> LocationIndex {
        let tree: RTree<LocationIndexObject, LocationIndexTreeParams> =
            RTree::bulk_load_with_params(
                segments
                    .iter()
                    .enumerate()
                    .map(|(segment_id, segment)| {
                        LocationIndexObject::new(
                            IndexedLine::new(
                                &nodes[segment.start as usize],
                                &nodes[segment.end as usize],
                            ),
                            IndexedData {
                                segment_id: segment_id as SegmentId,
                            },
                        )
                    })
                    .collect(),
            );

        LocationIndex { tree }
    }

    /// Segments ordered by distance to `coordinate`, projected onto the
    /// segment geometry. Lazily evaluated so callers can stop at the first
    /// eligible one.
    pub fn nearest_segments(
        &self,
        coordinate: &FixedPointCoordinate,
    ) -> impl Iterator<Item = SegmentProjection> + '_ {
        let point: [f64; 2] = coordinate.into();

        self.tree
            .nearest_neighbor_iter(&point)
            .filter_map(move |nearest_neighbor| {
                let (closest, ratio) = nearest_neighbor.geom().project(&point);

                // Projections always land inside the segment's envelope
                let location = FixedPointCoordinate::from_degrees(closest.y(), closest.x()).ok()?;

                Some(SegmentProjection {
                    segment_id: nearest_neighbor.data.segment_id,
                    location,
                    ratio,
                })
            })
    }
}
