use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Column index on the board, one per category.
pub type Col = usize;

/// Row index on the board, one per clue slot.
pub type Row = usize;

/// Positional address of a clue cell, `(col, row)`.
///
/// The textual form `"{col}-{row}"` is what the grid uses as cell element id, so a click on the page can be resolved
/// back into an address without looking at the event object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddr {
    pub col: Col,
    pub row: Row,
}

impl CellAddr {
    pub const fn new(col: Col, row: Row) -> Self {
        Self { col, row }
    }

    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.col, self.row]
    }

    /// Resolves an element id into an address, `None` for anything that is not a cell id.
    pub fn resolve(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    pub fn to_id(self) -> String {
        alloc::format!("{}", self)
    }
}

impl From<(Col, Row)> for CellAddr {
    fn from((col, row): (Col, Row)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.col, self.row)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseCellAddrError;

impl fmt::Display for ParseCellAddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a cell address")
    }
}

impl FromStr for CellAddr {
    type Err = ParseCellAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, row) = s.split_once('-').ok_or(ParseCellAddrError)?;
        let col = col.parse().map_err(|_| ParseCellAddrError)?;
        let row = row.parse().map_err(|_| ParseCellAddrError)?;
        Ok(Self { col, row })
    }
}
