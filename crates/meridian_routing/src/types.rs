pub type NodeId = u32;
pub type SegmentId = u32;
pub type ComponentId = u32;

/// Travel cost unit shared by the network and the distance table.
pub type EdgeWeight = i32;
