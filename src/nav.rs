use crate::Result;
use crate::harness::{Handler, Harness};

pub const TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_SELECTOR: &str = "nav";
pub const OPEN_CLASS: &str = "nav-open";

// Attach-on-ready, guard-on-missing: runs when the document ready signal
// fires. Both elements must already be in the tree; otherwise the page gets
// no navigation wiring at all, and that is not an error.
pub(crate) fn bind(harness: &mut Harness) -> Result<()> {
    let toggle = harness.dom.query_selector(TOGGLE_SELECTOR)?;
    let nav = harness.dom.query_selector(NAV_SELECTOR)?;

    match (toggle, nav) {
        (Some(toggle), Some(nav)) => {
            harness.listeners.add(
                toggle,
                "click".to_string(),
                Handler::ToggleClass {
                    target: nav,
                    class_name: OPEN_CLASS.to_string(),
                },
            );
            let toggle_label = harness.trace_node_label(toggle);
            let nav_label = harness.trace_node_label(nav);
            harness.trace_line(format!("[nav] bound toggle={toggle_label} nav={nav_label}"));
        }
        (toggle, nav) => {
            harness.trace_line(format!(
                "[nav] bind skipped toggle_present={} nav_present={}",
                toggle.is_some(),
                nav.is_some()
            ));
        }
    }

    Ok(())
}
