use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Revealed,
    Ignored,
}

impl Activation {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Handles a click on a clue cell: advance its reveal state and patch that one cell.
///
/// A clue already showing its answer swallows the click.
pub fn on_cell_activated(
    board: &mut Board,
    renderer: &mut impl BoardRenderer,
    addr: CellAddr,
) -> Result<Activation> {
    Ok(match board.reveal(addr)? {
        Some(text) => {
            renderer.patch(addr, text);
            Activation::Revealed
        }
        None => Activation::Ignored,
    })
}
