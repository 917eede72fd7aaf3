use shared::MountPhase;
use yew::prelude::*;

/// Two-phase mount gate.
///
/// Returns `Placeholder` on the first render and flips to `Interactive`
/// once the component has been attached, which only happens in a live
/// browser. Server-side rendering therefore always sees `Placeholder`.
#[hook]
pub fn use_mount_phase() -> MountPhase {
    let phase = use_state(MountPhase::default);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let mut next = *phase;
            if next.mark_ready() {
                phase.set(next);
            }
            || ()
        });
    }

    *phase
}
