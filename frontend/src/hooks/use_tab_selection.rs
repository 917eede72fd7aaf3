use shared::{ServiceTab, TabSelection};
use yew::prelude::*;

pub struct UseTabSelectionResult {
    pub selection: TabSelection,
    pub select: Callback<ServiceTab>,
}

/// State for the services tab panel
#[hook]
pub fn use_tab_selection(initial: ServiceTab) -> UseTabSelectionResult {
    let selection = use_state(|| TabSelection::new(initial));

    let select = {
        let selection = selection.clone();
        Callback::from(move |tab: ServiceTab| {
            selection.set((*selection).select(tab));
        })
    };

    UseTabSelectionResult {
        selection: *selection,
        select,
    }
}
