use std::sync::OnceLock;

/// One edge of the unit cube, as a pair of corner indices with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
	pub i: usize,
	pub j: usize,
}

/// Corner offsets of the unit cube in corner-index order.
///
/// The bit layout of a corner index is bit0 = x, bit1 = z, bit2 = y. The
/// intersection table and the neighbor-face selection in the mesh pass both
/// depend on this exact ordering.
pub const CORNER_OFFSETS: [(usize, usize, usize); 8] = [
	(0, 0, 0), // 0
	(1, 0, 0), // 1
	(0, 0, 1), // 2
	(1, 0, 1), // 3
	(0, 1, 0), // 4
	(1, 1, 0), // 5
	(0, 1, 1), // 6
	(1, 1, 1), // 7
];

/// Number of edges on a cube.
pub const CUBE_EDGES: usize = 12;

/// Grid-independent lookup tables, computed once per process.
///
/// `edges` enumerates the 12 corner pairs differing by exactly one index
/// bit; `intersections` maps an 8-bit corner-inside mask to the 12-bit mask
/// of edges whose endpoints straddle the isosurface. Both are immutable
/// after construction and safe to share across chunks and workers.
#[derive(Debug)]
pub struct LookupTables {
	pub edges: [Edge; CUBE_EDGES],
	pub intersections: [u16; 256],
}

static TABLES: OnceLock<LookupTables> = OnceLock::new();

impl LookupTables {
	/// The process-wide shared instance.
	pub fn get() -> &'static LookupTables {
		TABLES.get_or_init(LookupTables::build)
	}

	fn build() -> Self {
		let edges = Self::build_edge_table();
		let intersections = Self::build_intersection_table(&edges);
		Self { edges, intersections }
	}

	/// Enumerate the 12 unique corner pairs that differ by exactly one set
	/// bit, in ascending (i, j) order. Edge index is later used to select
	/// face sweep directions, so the order is load-bearing.
	fn build_edge_table() -> [Edge; CUBE_EDGES] {
		let mut edges = [Edge { i: 0, j: 0 }; CUBE_EDGES];
		let mut k = 0;
		for i in 0..8 {
			// adjacent corners differ in exactly one of the three index bits
			for bit in [1usize, 2, 4] {
				let j = i ^ bit;
				if i < j {
					edges[k] = Edge { i, j };
					k += 1;
				}
			}
		}
		edges
	}

	/// For each of the 256 corner in/out combinations, set bit k iff edge
	/// k's endpoints land on opposite sides of the isosurface.
	fn build_intersection_table(edges: &[Edge; CUBE_EDGES]) -> [u16; 256] {
		let mut intersections = [0u16; 256];
		for (mask, entry) in intersections.iter_mut().enumerate() {
			let mut edge_mask = 0u16;
			for (k, edge) in edges.iter().enumerate() {
				let a = mask & (1 << edge.i) != 0;
				let b = mask & (1 << edge.j) != 0;
				if a != b {
					edge_mask |= 1 << k;
				}
			}
			*entry = edge_mask;
		}
		intersections
	}
}
