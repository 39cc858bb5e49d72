use jeopardy_core::CellAddr;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Resolves a click delegated to the grid into the address of the clicked cell.
pub(crate) fn clicked_cell(e: &MouseEvent) -> Option<CellAddr> {
    let target = e.target()?.dyn_into::<web_sys::Element>().ok()?;
    let cell = target.closest("td").ok().flatten()?;
    CellAddr::resolve(&cell.id())
}
