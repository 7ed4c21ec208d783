//! Two rows of two chart slots.

use dioxus::prelude::*;

/// DOM ids of the four chart slots, row by row.
pub const CHART_IDS: [&str; 4] = ["sales-chart-1", "sales-chart-2", "sales-chart-3", "sales-chart-4"];

/// Charts per grid row.
const ROW_LEN: usize = 2;

/// Minimum slot height, so an undrawn row keeps its place in the layout.
const SLOT_MIN_HEIGHT: u32 = 340;

/// Grid position (row, column) of the slot at `index`.
pub fn slot_position(index: usize) -> (usize, usize) {
    (index / ROW_LEN, index % ROW_LEN)
}

#[derive(Props, Clone, PartialEq)]
struct ChartSlotProps {
    index: usize,
}

/// One D3 render target. The id comes from [`CHART_IDS`].
#[component]
fn ChartSlot(props: ChartSlotProps) -> Element {
    let id = CHART_IDS[props.index];
    let (row, col) = slot_position(props.index);
    rsx! {
        div {
            style: "min-height: {SLOT_MIN_HEIGHT}px; flex: 1 1 0; min-width: 0;",
            "data-row": "{row}",
            "data-col": "{col}",
            div { id: "{id}", style: "width: 100%;" }
        }
    }
}

/// Fixed 2x2 layout the render result is drawn into.
#[component]
pub fn ChartGrid() -> Element {
    rsx! {
        div {
            class: "chart-grid",
            style: "display: flex; flex-direction: column; gap: 12px;",
            for row in 0..CHART_IDS.len() / ROW_LEN {
                div {
                    key: "{row}",
                    style: "display: flex; gap: 12px;",
                    for index in row * ROW_LEN..(row + 1) * ROW_LEN {
                        ChartSlot { key: "{index}", index }
                    }
                }
            }
        }
    }
}
