use thiserror::Error;

use crate::{
    coordinate::CoordinateError,
    types::{NodeId, SegmentId},
};

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Failed to read network file")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse network file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Node {index} has an invalid coordinate: {source}")]
    InvalidCoordinate {
        index: usize,
        source: CoordinateError,
    },
    #[error("Segment {segment} references unknown node {node}")]
    UnknownNode { segment: SegmentId, node: NodeId },
    #[error("Segment {segment} has a negative weight")]
    NegativeWeight { segment: SegmentId },
    #[error("Network has more nodes or segments than can be addressed")]
    TooLarge,
}
