use pathgrid_core::{Cell, CellIndex, CellKey};

/// Sentinel cost for cells no search has reached.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// ParentMap
// ---------------------------------------------------------------------------

/// Predecessor links, one optional slot per cell key.
///
/// The start cell never gets a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentMap {
    links: Vec<Option<CellKey>>,
}

impl ParentMap {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            links: vec![None; len],
        }
    }

    /// Predecessor of `key`, or `None` for the start, unreached cells and
    /// keys outside the map.
    #[inline]
    pub fn get(&self, key: CellKey) -> Option<CellKey> {
        self.links.get(key.get()).copied().flatten()
    }

    #[inline]
    pub(crate) fn link(&mut self, child: CellKey, parent: CellKey) {
        self.links[child.get()] = Some(parent);
    }

    /// Number of key slots (the grid size).
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of cells that have a predecessor.
    pub fn linked(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Everything one search run produces: the expansion order, the parent links
/// and the best known cost per cell.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub(crate) index: CellIndex,
    pub(crate) visited: Vec<Cell>,
    pub(crate) parents: ParentMap,
    pub(crate) costs: Vec<i32>,
}

impl SearchState {
    pub(crate) fn new(index: CellIndex, len: usize) -> Self {
        Self {
            index,
            visited: Vec::new(),
            parents: ParentMap::new(len),
            costs: vec![UNREACHABLE; len],
        }
    }

    /// Cells in the order they were expanded (dequeued), not discovered.
    #[inline]
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Predecessor links recorded during the search.
    #[inline]
    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }

    /// The key scheme the search ran with.
    #[inline]
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Best known cost to reach `c`, or [`UNREACHABLE`].
    pub fn cost_at(&self, c: Cell) -> i32 {
        if c.row < 0 || c.col < 0 || c.col >= self.index.cols() {
            return UNREACHABLE;
        }
        self.costs
            .get(self.index.encode(c).get())
            .copied()
            .unwrap_or(UNREACHABLE)
    }

    /// Take the expansion order, dropping the bookkeeping.
    pub fn into_visited(self) -> Vec<Cell> {
        self.visited
    }
}
